use std::slice;

use crate::interval::TimeInterval;
use crate::itemset::Item;

/// A single observation processed by the miner: a sequence of items,
/// optionally stamped with the time interval it was recorded in.
///
/// Duplicate items within one transaction are treated as a single occurrence.
pub trait Transaction<I: Item> {
    type Items<'a>: Iterator<Item = &'a I>
    where
        Self: 'a,
        I: 'a;

    fn items(&self) -> Self::Items<'_>;

    /// The time interval the transaction corresponds to, if any.
    fn time_interval(&self) -> Option<&TimeInterval> {
        None
    }
}

impl<I: Item> Transaction<I> for Vec<I> {
    type Items<'a>
        = slice::Iter<'a, I>
    where
        Self: 'a,
        I: 'a;

    fn items(&self) -> Self::Items<'_> {
        self.iter()
    }
}

/// A transaction backed by a plain vector, optionally carrying a time
/// interval.
#[derive(Debug, Clone)]
pub struct TimedTransaction<I> {
    items: Vec<I>,
    interval: Option<TimeInterval>,
}

impl<I: Item> TimedTransaction<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        Self {
            items: items.into_iter().collect(),
            interval: None,
        }
    }

    pub fn with_interval(items: impl IntoIterator<Item = I>, interval: TimeInterval) -> Self {
        Self {
            items: items.into_iter().collect(),
            interval: Some(interval),
        }
    }
}

impl<I: Item> Transaction<I> for TimedTransaction<I> {
    type Items<'a>
        = slice::Iter<'a, I>
    where
        Self: 'a,
        I: 'a;

    fn items(&self) -> Self::Items<'_> {
        self.items.iter()
    }

    fn time_interval(&self) -> Option<&TimeInterval> {
        self.interval.as_ref()
    }
}
