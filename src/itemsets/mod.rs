pub(crate) mod count;

use std::collections::HashMap;

use log::debug;

use crate::combi::join_step;
use crate::error::Error;
use crate::itemset::Item;
use crate::types::{FrequentItemsets, ItemId, Itemset, ItemsetCounts, WitnessIntervals};

use self::count::{count_candidates, count_items, witness_interval, Dataset};

/// Surviving candidates per level beyond which mining gives up instead of
/// exhausting memory.
const MAX_CANDIDATES_PER_LEVEL: usize = 1 << 20;

/// The frequent item sets mined by one finder invocation, keyed by level,
/// together with the witnessed validity interval of each set (present only
/// when every witness was temporal and their intervals overlap).
#[derive(Debug, Clone, Default)]
pub(crate) struct MinedItemSets {
    pub(crate) levels: FrequentItemsets,
    pub(crate) witness_intervals: WitnessIntervals,
    pub(crate) transaction_count: usize,
}

impl MinedItemSets {
    /// Total number of frequent item sets across all levels.
    pub(crate) fn len(&self) -> usize {
        self.levels.values().map(HashMap::len).sum()
    }

    /// The support of a mined item set, if it is frequent.
    pub(crate) fn support_of(&self, itemset: &[ItemId]) -> Option<f64> {
        let count = *self.levels.get(&itemset.len())?.get(itemset)?;
        Some(count as f64 / self.transaction_count as f64)
    }
}

/// Level-wise Apriori search for all item sets whose support falls within
/// `[min_support, max_support]`.
#[derive(Debug, Clone)]
pub(crate) struct FrequentItemSetFinder {
    min_support: f64,
    max_support: f64,
}

impl FrequentItemSetFinder {
    pub(crate) fn new(min_support: f64, max_support: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&min_support) {
            return Err(Error::InvalidArgument(format!(
                "the minimum support must be at least 0 and at most 1; got {min_support}"
            )));
        }

        if !(min_support..=1.0).contains(&max_support) {
            return Err(Error::InvalidArgument(format!(
                "the maximum support must be at least the minimum support and at most 1; \
                 got {max_support}"
            )));
        }

        Ok(Self {
            min_support,
            max_support,
        })
    }

    pub(crate) fn find<I: Item>(&self, dataset: &Dataset<I>) -> Result<MinedItemSets, Error> {
        let n = dataset.len();
        let mut result = MinedItemSets {
            transaction_count: n,
            ..MinedItemSets::default()
        };

        if n == 0 {
            return Ok(result);
        }

        let mut current: ItemsetCounts = count_items(&dataset.transactions)
            .into_iter()
            .filter(|&(_, count)| self.reaches_min_support(count, n))
            .map(|(item, count)| (vec![item], count))
            .collect();
        debug!(
            "level 1: {} frequent of {} distinct items",
            current.len(),
            dataset.item_count()
        );

        let mut level = 1;
        while !current.is_empty() {
            result.levels.insert(level, current);

            // a frequent set cannot outgrow the distinct-item universe
            if level >= dataset.item_count() {
                break;
            }

            let prev = &result.levels[&level];
            let mut candidates = join_step(prev.keys().cloned().collect());
            candidates.retain(|candidate| all_subsets_frequent(candidate, prev));

            if candidates.len() > MAX_CANDIDATES_PER_LEVEL {
                return Err(Error::Unsupported(format!(
                    "level {} produced {} candidates, exceeding the ceiling of {}; \
                     raise the minimum support",
                    level + 1,
                    candidates.len(),
                    MAX_CANDIDATES_PER_LEVEL
                )));
            }

            if candidates.is_empty() {
                break;
            }
            debug!("level {}: counting {} candidates", level + 1, candidates.len());

            current = count_candidates(candidates, &dataset.transactions)
                .into_iter()
                .filter(|&(_, count)| self.reaches_min_support(count, n))
                .collect();
            level += 1;
        }

        // applied last so it cannot interfere with the monotone pruning
        for counts in result.levels.values_mut() {
            counts.retain(|_, &mut count| count as f64 / n as f64 <= self.max_support);
        }
        result.levels.retain(|_, counts| !counts.is_empty());

        if dataset.intervals.iter().any(Option::is_some) {
            for itemset in result.levels.values().flat_map(HashMap::keys) {
                if let Some(interval) =
                    witness_interval(itemset, &dataset.transactions, &dataset.intervals)
                {
                    result.witness_intervals.insert(itemset.clone(), interval);
                }
            }
        }

        Ok(result)
    }

    fn reaches_min_support(&self, count: u32, n: usize) -> bool {
        count as f64 / n as f64 >= self.min_support
    }
}

/// Downward-closure prune: every subset one element smaller must itself be
/// frequent.
fn all_subsets_frequent(candidate: &Itemset, prev: &ItemsetCounts) -> bool {
    let mut subset: Itemset = Vec::with_capacity(candidate.len() - 1);

    (0..candidate.len()).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item),
        );
        prev.contains_key(subset.as_slice())
    })
}
