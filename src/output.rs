use std::collections::HashMap;
use std::time::Duration;

use crate::itemset::{Item, ItemSet};
use crate::rules::ruleset::RuleSet;

/// The result of a mining run: the frequent item sets keyed by their
/// fingerprint, the generated rules (if rule generation was enabled), the
/// wall-clock time the run took, and the thresholds that were effectively
/// used after the adaptive loops settled.
#[derive(Debug, Clone)]
pub struct Output<I: Item> {
    frequent_item_sets: HashMap<u64, ItemSet<I>>,
    rules: Option<RuleSet<I>>,
    elapsed: Duration,
    effective_min_support: f64,
    effective_min_confidence: Option<f64>,
}

impl<I: Item> Output<I> {
    pub(crate) fn new(
        frequent_item_sets: HashMap<u64, ItemSet<I>>,
        rules: Option<RuleSet<I>>,
        elapsed: Duration,
        effective_min_support: f64,
        effective_min_confidence: Option<f64>,
    ) -> Self {
        Self {
            frequent_item_sets,
            rules,
            elapsed,
            effective_min_support,
            effective_min_confidence,
        }
    }

    /// The frequent item sets, keyed by their [fingerprint].
    ///
    /// [fingerprint]: ItemSet::fingerprint
    pub fn frequent_item_sets(&self) -> &HashMap<u64, ItemSet<I>> {
        &self.frequent_item_sets
    }

    /// The generated rules, or `None` if rule generation was not enabled.
    pub fn rules(&self) -> Option<&RuleSet<I>> {
        self.rules.as_ref()
    }

    /// The wall-clock time the mining run took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The support threshold the frequent item sets were mined at.
    pub fn effective_min_support(&self) -> f64 {
        self.effective_min_support
    }

    /// The confidence threshold the rules were generated at, if rule
    /// generation was enabled.
    pub fn effective_min_confidence(&self) -> Option<f64> {
        self.effective_min_confidence
    }
}
