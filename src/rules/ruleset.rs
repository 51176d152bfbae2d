use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice;

use crate::itemset::Item;
use crate::metrics::RuleComparator;

use super::rule::AssociationRule;

/// An ordered collection of association rules, without duplicates by
/// (body, head, time interval).
///
/// Ranking and filtering operations return new ordered views; the underlying
/// collection is only mutated by [`push`] and the in-place [`sort_by`].
///
/// [`push`]: RuleSet::push
/// [`sort_by`]: RuleSet::sort_by
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet<I: Item> {
    rules: Vec<AssociationRule<I>>,
}

impl<I: Item> RuleSet<I> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, AssociationRule<I>> {
        self.rules.iter()
    }

    /// Appends a rule, unless an equal rule (by body, head and time
    /// interval) is already present.
    pub fn push(&mut self, rule: AssociationRule<I>) {
        let duplicate = self.rules.iter().any(|existing| {
            existing.body() == rule.body()
                && existing.head() == rule.head()
                && existing.time_interval() == rule.time_interval()
        });

        if !duplicate {
            self.rules.push(rule);
        }
    }

    /// Sorts the rules in place by the given comparator.
    pub fn sort_by<C: RuleComparator<I>>(&mut self, comparator: &C) {
        self.rules.sort_by(|a, b| comparator.compare(a, b));
    }

    /// Returns a new rule set sorted by the given comparator.
    pub fn sorted<C: RuleComparator<I>>(&self, comparator: &C) -> RuleSet<I> {
        let mut sorted = self.clone();
        sorted.sort_by(comparator);
        sorted
    }

    /// Returns the `k` best rules according to the given comparator.
    pub fn top_k<C: RuleComparator<I>>(&self, k: usize, comparator: &C) -> RuleSet<I> {
        let mut sorted = self.sorted(comparator);
        sorted.rules.truncate(k);
        sorted
    }

    /// Returns a new rule set containing the rules matching the predicate,
    /// in their current order.
    pub fn filter<P: Fn(&AssociationRule<I>) -> bool>(&self, predicate: P) -> RuleSet<I> {
        Self {
            rules: self
                .rules
                .iter()
                .filter(|rule| predicate(rule))
                .cloned()
                .collect(),
        }
    }
}

impl<I: Item> Default for RuleSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: Item> IntoIterator for &'a RuleSet<I> {
    type Item = &'a AssociationRule<I>;
    type IntoIter = slice::Iter<'a, AssociationRule<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl<I: Item> IntoIterator for RuleSet<I> {
    type Item = AssociationRule<I>;
    type IntoIter = std::vec::IntoIter<AssociationRule<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<I: Item + Display> Display for RuleSet<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }

        Ok(())
    }
}
