use thiserror::Error;

/// The errors that may be raised while configuring or running the miner.
///
/// An empty transaction source is not an error; mining it yields an empty
/// [`Output`](crate::Output).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration constraint was violated, or a value passed to a
    /// constructor lies outside its legal range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested operation exceeds what the implementation supports,
    /// e.g. a candidate explosion beyond the per-level ceiling.
    #[error("unsupported: {0}")]
    Unsupported(String),
}
