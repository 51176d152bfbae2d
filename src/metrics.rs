//! Interest metrics over association rules, and their composition into rule
//! orderings.

use std::cmp::Ordering;

use crate::itemset::Item;
use crate::rules::rule::AssociationRule;

/// A metric measuring how "interesting" an association rule is. Each metric
/// is a pure function of the rule's support and the supports of its body and
/// head.
pub trait Metric<I: Item> {
    fn evaluate(&self, rule: &AssociationRule<I>) -> f64;

    /// The smallest value the metric can assume.
    fn min_value(&self) -> f64;

    /// The greatest value the metric can assume.
    fn max_value(&self) -> f64;
}

/// A total order over association rules. Every [`Metric`] orders rules by
/// its value, descending; [`then_by`] appends a tie-breaker.
///
/// [`then_by`]: RuleComparator::then_by
pub trait RuleComparator<I: Item> {
    fn compare(&self, a: &AssociationRule<I>, b: &AssociationRule<I>) -> Ordering;

    /// Composes this comparator with a tie-breaker consulted on equal ranks.
    fn then_by<C>(self, tie_breaker: C) -> ThenBy<Self, C>
    where
        Self: Sized,
        C: RuleComparator<I>,
    {
        ThenBy {
            primary: self,
            tie_breaker,
        }
    }
}

impl<I: Item, M: Metric<I>> RuleComparator<I> for M {
    fn compare(&self, a: &AssociationRule<I>, b: &AssociationRule<I>) -> Ordering {
        self.evaluate(b).total_cmp(&self.evaluate(a))
    }
}

/// Comparator falling back to a tie-breaker when the primary comparator
/// ranks two rules equally.
#[derive(Debug, Clone)]
pub struct ThenBy<A, B> {
    primary: A,
    tie_breaker: B,
}

impl<I, A, B> RuleComparator<I> for ThenBy<A, B>
where
    I: Item,
    A: RuleComparator<I>,
    B: RuleComparator<I>,
{
    fn compare(&self, a: &AssociationRule<I>, b: &AssociationRule<I>) -> Ordering {
        self.primary
            .compare(a, b)
            .then_with(|| self.tie_breaker.compare(a, b))
    }
}

/// The fraction of transactions the rule's body and head co-occur in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Support;

impl<I: Item> Metric<I> for Support {
    fn evaluate(&self, rule: &AssociationRule<I>) -> f64 {
        rule.support()
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }
}

/// The conditional probability of the head, given the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Confidence;

impl<I: Item> Metric<I> for Confidence {
    fn evaluate(&self, rule: &AssociationRule<I>) -> f64 {
        rule.confidence()
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }
}

/// The ratio of the rule's confidence over the head's support. A lift of 1
/// means body and head are independent; greater values mean the body raises
/// the likelihood of the head.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lift;

impl<I: Item> Metric<I> for Lift {
    fn evaluate(&self, rule: &AssociationRule<I>) -> f64 {
        rule.confidence() / rule.head().support()
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }
}

/// The difference between the observed co-occurrence and the one expected
/// under independence. Negative when body and head repel each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leverage;

impl<I: Item> Metric<I> for Leverage {
    fn evaluate(&self, rule: &AssociationRule<I>) -> f64 {
        rule.support() - rule.body().support() * rule.head().support()
    }

    fn min_value(&self) -> f64 {
        -0.25
    }

    fn max_value(&self) -> f64 {
        0.25
    }
}

/// The ratio of the expected over the observed failure rate of the rule.
/// Infinite for rules whose confidence is 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conviction;

impl<I: Item> Metric<I> for Conviction {
    fn evaluate(&self, rule: &AssociationRule<I>) -> f64 {
        let confidence = rule.confidence();

        if confidence >= 1.0 {
            f64::INFINITY
        } else {
            (1.0 - rule.head().support()) / (1.0 - confidence)
        }
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::INFINITY
    }
}
