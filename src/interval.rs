use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::Error;

/// A time interval between two timestamps. Both bounds are inclusive and may
/// be equal, in which case the interval represents a single moment in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: i64,
    end: i64,
}

impl TimeInterval {
    /// Creates a new time interval. The end timestamp must be at least the
    /// start timestamp.
    pub fn new(start: i64, end: i64) -> Result<Self, Error> {
        if end < start {
            return Err(Error::InvalidArgument(format!(
                "the end timestamp must be at least the start timestamp ({end} < {start})"
            )));
        }

        Ok(Self { start, end })
    }

    /// Creates an interval spanning a single moment in time.
    pub fn at(timestamp: i64) -> Self {
        Self {
            start: timestamp,
            end: timestamp,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Returns whether the given timestamp lies within the interval.
    pub fn includes(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Returns the overlap of two intervals, if they overlap at all.
    pub fn intersect(&self, other: &TimeInterval) -> Option<TimeInterval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        (start <= end).then_some(TimeInterval { start, end })
    }
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_is_inclusive_on_both_bounds() {
        let interval = TimeInterval::new(10, 100).unwrap();

        assert!(!interval.includes(9));
        assert!(interval.includes(10));
        assert!(interval.includes(50));
        assert!(interval.includes(100));
        assert!(!interval.includes(101));
    }

    #[test]
    fn single_timestamp_interval() {
        let interval = TimeInterval::at(42);

        assert_eq!(interval.start(), 42);
        assert_eq!(interval.end(), 42);
        assert_eq!(interval.duration(), 0);
        assert!(interval.includes(42));
        assert!(!interval.includes(41));
        assert!(!interval.includes(43));
    }

    #[test]
    fn new_rejects_end_before_start() {
        assert!(matches!(
            TimeInterval::new(10, 9),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn duration() {
        assert_eq!(TimeInterval::new(10, 100).unwrap().duration(), 90);
    }

    #[test]
    fn intersect_overlapping() {
        let a = TimeInterval::new(10, 20).unwrap();
        let b = TimeInterval::new(15, 25).unwrap();

        assert_eq!(a.intersect(&b), Some(TimeInterval::new(15, 20).unwrap()));
        assert_eq!(b.intersect(&a), Some(TimeInterval::new(15, 20).unwrap()));
    }

    #[test]
    fn intersect_disjoint() {
        let a = TimeInterval::new(10, 20).unwrap();
        let b = TimeInterval::new(21, 25).unwrap();

        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn intersect_touching_bounds() {
        let a = TimeInterval::new(10, 20).unwrap();
        let b = TimeInterval::new(20, 25).unwrap();

        assert_eq!(a.intersect(&b), Some(TimeInterval::at(20)));
    }

    #[test]
    fn display() {
        assert_eq!(TimeInterval::new(10, 100).unwrap().to_string(), "[10, 100]");
    }

    #[test]
    fn clone_is_equal() {
        let interval = TimeInterval::new(10, 100).unwrap();
        assert_eq!(interval, interval.clone());
    }
}
