use std::collections::HashMap;

use rayon::prelude::*;

use crate::interval::TimeInterval;
use crate::itemset::Item;
use crate::transaction::Transaction;
use crate::types::{ItemCounts, ItemId, Itemset, ItemsetCounts};

/// The interned transaction store the miner works on. Items are replaced by
/// their rank in the caller's total order, so that id order and item order
/// coincide; transactions become sorted, deduplicated rank vectors.
#[derive(Debug, Clone)]
pub(crate) struct Dataset<I: Item> {
    pub(crate) transactions: Vec<Itemset>,
    pub(crate) intervals: Vec<Option<TimeInterval>>,
    /// Rank-indexed lookup back to the caller's items.
    pub(crate) inventory: Vec<I>,
}

impl<I: Item> Dataset<I> {
    pub(crate) fn from_transactions<T: Transaction<I>>(raw: &[T]) -> Self {
        let mut inventory: Vec<I> = raw
            .iter()
            .flat_map(|transaction| transaction.items().cloned())
            .collect();
        inventory.sort();
        inventory.dedup();

        let mut ranks: HashMap<&I, ItemId> = HashMap::with_capacity(inventory.len());
        for (id, item) in inventory.iter().enumerate() {
            ranks.insert(item, id);
        }

        let transactions: Vec<Itemset> = raw
            .iter()
            .map(|transaction| {
                let mut ids: Itemset = transaction.items().map(|item| ranks[item]).collect();
                ids.sort_unstable();
                ids.dedup();
                ids
            })
            .collect();

        let intervals = raw
            .iter()
            .map(|transaction| transaction.time_interval().copied())
            .collect();

        Self {
            transactions,
            intervals,
            inventory,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn item_count(&self) -> usize {
        self.inventory.len()
    }
}

/// Counts individual items in a single scan.
pub(crate) fn count_items(transactions: &[Itemset]) -> ItemCounts {
    let mut counts = ItemCounts::new();

    for transaction in transactions {
        for &item in transaction {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    counts
}

/// Counts every candidate against every transaction. The scan is parallel
/// over candidates; each counter is an independent integer sum.
pub(crate) fn count_candidates(candidates: Vec<Itemset>, transactions: &[Itemset]) -> ItemsetCounts {
    candidates
        .into_par_iter()
        .map(|candidate| {
            let count = transactions
                .iter()
                .filter(|transaction| is_contained(&candidate, transaction))
                .count() as u32;
            (candidate, count)
        })
        .collect()
}

/// Both slices are sorted rank vectors.
pub(crate) fn is_contained(candidate: &[ItemId], transaction: &[ItemId]) -> bool {
    candidate
        .iter()
        .all(|item| transaction.binary_search(item).is_ok())
}

/// Folds the intersection of the witnessing transactions' intervals for one
/// item set. A witness without an interval, or an empty intersection, leaves
/// the set non-temporal.
pub(crate) fn witness_interval(
    itemset: &[ItemId],
    transactions: &[Itemset],
    intervals: &[Option<TimeInterval>],
) -> Option<TimeInterval> {
    let mut merged: Option<TimeInterval> = None;

    for (transaction, interval) in transactions.iter().zip(intervals) {
        if !is_contained(itemset, transaction) {
            continue;
        }

        let interval = (*interval)?;
        merged = Some(match merged {
            None => interval,
            Some(current) => current.intersect(&interval)?,
        });
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    const A: &str = "Item A";
    const B: &str = "Item B";
    const C: &str = "Item C";
    const D: &str = "Item D";

    #[test]
    fn dataset_ranks_items_in_their_total_order() {
        let raw = vec![vec![B, A, D], vec![A]];
        let dataset = Dataset::from_transactions(&raw);

        assert_eq!(dataset.inventory, vec![A, B, D]);
        assert_eq!(dataset.transactions, vec![vec![0, 1, 2], vec![0]]);
        assert_eq!(dataset.intervals, vec![None, None]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.item_count(), 3);
    }

    #[test]
    fn dataset_deduplicates_items_within_a_transaction() {
        let raw = vec![vec![A, A, B]];
        let dataset = Dataset::from_transactions(&raw);

        assert_eq!(dataset.transactions, vec![vec![0, 1]]);
    }

    #[test]
    fn dataset_of_nothing() {
        let raw: Vec<Vec<&str>> = vec![];
        let dataset = Dataset::from_transactions(&raw);

        assert!(dataset.is_empty());
        assert_eq!(dataset.item_count(), 0);
    }

    #[test]
    fn count_items_counts_each_transaction_once() {
        let transactions = vec![vec![0, 1, 2], vec![0], vec![0, 2]];
        let counts = count_items(&transactions);

        assert_eq!(counts, hashmap! { 0 => 3, 1 => 1, 2 => 2 });
    }

    #[test]
    fn count_candidates_single_items() {
        let transactions = vec![vec![10, 11, 13], vec![10]];
        let counts = count_candidates(vec![vec![10], vec![11]], &transactions);

        assert_eq!(counts, hashmap! { vec![10] => 2, vec![11] => 1 });
    }

    #[test]
    fn count_candidates_pairs() {
        let transactions = vec![
            vec![10, 11],
            vec![10, 15],
            vec![10, 13],
            vec![10, 13],
            vec![10, 13],
            vec![11, 13],
        ];
        let candidates = vec![vec![10, 11], vec![10, 13], vec![11, 15]];
        let counts = count_candidates(candidates, &transactions);

        assert_eq!(
            counts,
            hashmap! { vec![10, 11] => 1, vec![10, 13] => 3, vec![11, 15] => 0 }
        );
    }

    #[test]
    fn is_contained_uses_set_semantics() {
        assert!(is_contained(&[1, 3], &[1, 2, 3]));
        assert!(!is_contained(&[1, 4], &[1, 2, 3]));
        assert!(is_contained(&[], &[1, 2, 3]));
    }

    #[test]
    fn witness_interval_intersects_all_witnesses() {
        let transactions = vec![vec![0, 1], vec![0, 1], vec![2]];
        let intervals = vec![
            Some(TimeInterval::new(10, 20).unwrap()),
            Some(TimeInterval::new(15, 25).unwrap()),
            Some(TimeInterval::new(90, 99).unwrap()),
        ];

        assert_eq!(
            witness_interval(&[0, 1], &transactions, &intervals),
            Some(TimeInterval::new(15, 20).unwrap())
        );
    }

    #[test]
    fn witness_interval_requires_every_witness_to_be_temporal() {
        let transactions = vec![vec![0, 1], vec![0, 1]];
        let intervals = vec![Some(TimeInterval::new(10, 20).unwrap()), None];

        assert_eq!(witness_interval(&[0, 1], &transactions, &intervals), None);
    }

    #[test]
    fn witness_interval_is_empty_on_disjoint_witnesses() {
        let transactions = vec![vec![0], vec![0]];
        let intervals = vec![
            Some(TimeInterval::new(10, 20).unwrap()),
            Some(TimeInterval::new(30, 40).unwrap()),
        ];

        assert_eq!(witness_interval(&[0], &transactions, &intervals), None);
    }

    #[test]
    fn witness_interval_ignores_non_witnesses() {
        let transactions = vec![vec![0, 1], vec![2]];
        let intervals = vec![Some(TimeInterval::new(10, 20).unwrap()), None];

        assert_eq!(
            witness_interval(&[0, 1], &transactions, &intervals),
            Some(TimeInterval::new(10, 20).unwrap())
        );
    }

    #[test]
    fn witness_interval_of_unwitnessed_set() {
        let transactions = vec![vec![0]];
        let intervals = vec![Some(TimeInterval::new(10, 20).unwrap())];

        assert_eq!(witness_interval(&[1], &transactions, &intervals), None);
    }

    #[test]
    fn dataset_keeps_intervals_aligned_with_transactions() {
        use crate::transaction::TimedTransaction;

        let interval = TimeInterval::new(10, 20).unwrap();
        let raw = vec![
            TimedTransaction::with_interval(vec![A, B], interval),
            TimedTransaction::new(vec![C]),
        ];
        let dataset = Dataset::from_transactions(&raw);

        assert_eq!(dataset.intervals, vec![Some(interval), None]);
        assert_eq!(dataset.transactions, vec![vec![0, 1], vec![2]]);
    }
}
