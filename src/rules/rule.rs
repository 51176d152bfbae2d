use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::Error;
use crate::interval::TimeInterval;
use crate::itemset::{Item, ItemSet};

/// An association rule of the form body -> head. Both parts are non-empty,
/// disjoint item sets; the rule states that transactions containing the body
/// tend to contain the head as well.
///
/// A rule may only be valid for a certain time interval, in which case it is
/// referred to as a temporal association rule.
#[derive(Debug, Clone)]
pub struct AssociationRule<I: Item> {
    body: ItemSet<I>,
    head: ItemSet<I>,
    support: f64,
    time_interval: Option<TimeInterval>,
}

impl<I: Item> AssociationRule<I> {
    /// Creates a new association rule. The body and the head must be
    /// non-empty and disjoint, and the support must lie in `[0, 1]`.
    pub fn new(body: ItemSet<I>, head: ItemSet<I>, support: f64) -> Result<Self, Error> {
        Self::validated(body, head, support, None)
    }

    /// Creates a rule that is only valid within the given time interval.
    pub fn temporal(
        body: ItemSet<I>,
        head: ItemSet<I>,
        support: f64,
        time_interval: TimeInterval,
    ) -> Result<Self, Error> {
        Self::validated(body, head, support, Some(time_interval))
    }

    fn validated(
        body: ItemSet<I>,
        head: ItemSet<I>,
        support: f64,
        time_interval: Option<TimeInterval>,
    ) -> Result<Self, Error> {
        if body.is_empty() {
            return Err(Error::InvalidArgument(
                "the body of a rule may not be empty".into(),
            ));
        }

        if head.is_empty() {
            return Err(Error::InvalidArgument(
                "the head of a rule may not be empty".into(),
            ));
        }

        if body.iter().any(|item| head.contains(item)) {
            return Err(Error::InvalidArgument(
                "the body and the head of a rule must be disjoint".into(),
            ));
        }

        if !(0.0..=1.0).contains(&support) {
            return Err(Error::InvalidArgument(format!(
                "the support must be at least 0 and at most 1; got {support}"
            )));
        }

        Ok(Self::from_parts(body, head, support, time_interval))
    }

    /// Internal constructor for rules derived from frequent item sets, whose
    /// parts are valid by construction.
    pub(crate) fn from_parts(
        body: ItemSet<I>,
        head: ItemSet<I>,
        support: f64,
        time_interval: Option<TimeInterval>,
    ) -> Self {
        Self {
            body,
            head,
            support,
            time_interval,
        }
    }

    pub fn body(&self) -> &ItemSet<I> {
        &self.body
    }

    pub fn head(&self) -> &ItemSet<I> {
        &self.head
    }

    /// The support of body and head combined.
    pub fn support(&self) -> f64 {
        self.support
    }

    /// The conditional probability of the head, given the body.
    pub fn confidence(&self) -> f64 {
        self.support / self.body.support()
    }

    /// The time interval the rule is valid for, if it is temporal.
    pub fn time_interval(&self) -> Option<&TimeInterval> {
        self.time_interval.as_ref()
    }

    pub fn is_temporal(&self) -> bool {
        self.time_interval.is_some()
    }

    /// Returns whether the rule is valid at the given moment in time. A
    /// non-temporal rule is valid at any moment.
    pub fn is_valid_at(&self, timestamp: i64) -> bool {
        self.time_interval
            .map_or(true, |interval| interval.includes(timestamp))
    }

    /// Returns whether the rule applies to the given items, i.e. whether all
    /// items of its body are among them.
    pub fn covers(&self, items: &[I]) -> bool {
        self.body.iter().all(|body_item| items.contains(body_item))
    }
}

impl<I: Item> PartialEq for AssociationRule<I> {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
            && self.head == other.head
            && self.support == other.support
            && self.time_interval == other.time_interval
    }
}

impl<I: Item + Display> Display for AssociationRule<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} -> {}", self.body, self.head)?;

        if let Some(interval) = &self.time_interval {
            write!(f, "; {interval}")?;
        }

        Ok(())
    }
}
