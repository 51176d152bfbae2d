pub mod rule;
pub mod ruleset;

use itertools::Itertools;
use log::debug;

use crate::itemset::{Item, ItemSet};
use crate::itemsets::MinedItemSets;
use crate::metrics::Support;
use crate::types::Itemset;

use self::rule::AssociationRule;
use self::ruleset::RuleSet;

/// Derives every rule `body -> head` whose confidence reaches
/// `min_confidence` from the mined frequent item sets.
///
/// For each frequent set of two or more items, every non-empty proper subset
/// becomes a candidate head, with the remainder as the body. The body's
/// support is looked up among the frequent sets; a missing body (possible
/// after the maximum-support filter) skips the candidate. The result is
/// ordered by descending support.
pub(crate) fn generate_rules<I: Item>(
    min_confidence: f64,
    mined: &MinedItemSets,
    inventory: &[I],
) -> RuleSet<I> {
    let mut rules = RuleSet::new();
    let n = mined.transaction_count;

    for (&size, itemsets) in &mined.levels {
        if size < 2 {
            continue;
        }

        for (combi, &count) in itemsets {
            let union_support = count as f64 / n as f64;
            let interval = mined.witness_intervals.get(combi).copied();

            for head_len in 1..combi.len() {
                for head in combi.iter().copied().combinations(head_len) {
                    let body: Itemset = combi
                        .iter()
                        .copied()
                        .filter(|item| !head.contains(item))
                        .collect();

                    let Some(body_support) = mined.support_of(&body) else {
                        continue;
                    };

                    let confidence = union_support / body_support;
                    if confidence < min_confidence {
                        continue;
                    }

                    let head_support = mined.support_of(&head).unwrap_or(0.0);
                    rules.push(AssociationRule::from_parts(
                        decode(&body, body_support, inventory),
                        decode(&head, head_support, inventory),
                        union_support,
                        interval,
                    ));
                }
            }
        }
    }

    debug!(
        "generated {} rules at min confidence {:.3}",
        rules.len(),
        min_confidence
    );

    rules.sort_by(&Support);
    rules
}

fn decode<I: Item>(ids: &[usize], support: f64, inventory: &[I]) -> ItemSet<I> {
    ItemSet::with_support(ids.iter().map(|&id| inventory[id].clone()), support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemsets::count::Dataset;
    use crate::itemsets::FrequentItemSetFinder;

    const A: &str = "A";
    const B: &str = "B";
    const C: &str = "C";

    fn textbook_mined() -> (MinedItemSets, Vec<&'static str>) {
        let raw = vec![
            vec![A, B, C],
            vec![A, B],
            vec![A, C],
            vec![B, C],
            vec![A],
        ];
        let dataset = Dataset::from_transactions(&raw);
        let finder = FrequentItemSetFinder::new(0.4, 1.0).unwrap();
        let mined = finder.find(&dataset).unwrap();

        (mined, dataset.inventory)
    }

    fn find<'a>(
        rules: &'a RuleSet<&'static str>,
        body: &[&'static str],
        head: &[&'static str],
    ) -> Option<&'a AssociationRule<&'static str>> {
        rules.iter().find(|rule| {
            rule.body() == &ItemSet::new(body.iter().copied())
                && rule.head() == &ItemSet::new(head.iter().copied())
        })
    }

    #[test]
    fn textbook_rules_at_min_confidence() {
        let (mined, inventory) = textbook_mined();
        let rules = generate_rules(0.6, &mined, &inventory);

        assert_eq!(rules.len(), 4);
        assert!(find(&rules, &[B], &[A]).is_some());
        assert!(find(&rules, &[C], &[A]).is_some());
        assert!(find(&rules, &[B], &[C]).is_some());
        assert!(find(&rules, &[C], &[B]).is_some());

        // confidence 0.5 each, rejected
        assert!(find(&rules, &[A], &[B]).is_none());
        assert!(find(&rules, &[A], &[C]).is_none());

        let rule = find(&rules, &[B], &[A]).unwrap();
        assert!((rule.confidence() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(rule.support(), 0.4);
    }

    #[test]
    fn zero_confidence_enumerates_every_partition() {
        let (mined, inventory) = textbook_mined();
        let rules = generate_rules(0.0, &mined, &inventory);

        // three 2-sets, two rules each; the 3-set is not frequent
        assert_eq!(rules.len(), 6);
    }

    #[test]
    fn rules_have_disjoint_non_empty_parts_within_the_frequent_sets() {
        let (mined, inventory) = textbook_mined();
        let rules = generate_rules(0.0, &mined, &inventory);

        for rule in &rules {
            assert!(!rule.body().is_empty());
            assert!(!rule.head().is_empty());
            assert!(!rule.body().iter().any(|item| rule.head().contains(item)));

            let union = rule.body().union(rule.head());
            assert_eq!(union.len(), rule.body().len() + rule.head().len());

            let union_ids: Vec<usize> = union
                .iter()
                .map(|item| inventory.binary_search(item).unwrap())
                .collect();
            assert!(mined.support_of(&union_ids).is_some());
        }
    }

    #[test]
    fn result_is_sorted_by_descending_support() {
        let raw = vec![
            vec![A, B],
            vec![A, B],
            vec![A, B, C],
            vec![B, C],
        ];
        let dataset = Dataset::from_transactions(&raw);
        let finder = FrequentItemSetFinder::new(0.25, 1.0).unwrap();
        let mined = finder.find(&dataset).unwrap();
        let rules = generate_rules(0.0, &mined, &dataset.inventory);

        let supports: Vec<f64> = rules.iter().map(AssociationRule::support).collect();
        let mut sorted = supports.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));

        assert_eq!(supports, sorted);
    }

    #[test]
    fn single_items_yield_no_rules() {
        let raw = vec![vec![A], vec![A]];
        let dataset = Dataset::from_transactions(&raw);
        let finder = FrequentItemSetFinder::new(0.5, 1.0).unwrap();
        let mined = finder.find(&dataset).unwrap();

        assert!(generate_rules(0.0, &mined, &dataset.inventory).is_empty());
    }

    #[test]
    fn empty_input_yields_no_rules() {
        let dataset: Dataset<&str> = Dataset::from_transactions(&Vec::<Vec<&str>>::new());
        let finder = FrequentItemSetFinder::new(0.5, 1.0).unwrap();
        let mined = finder.find(&dataset).unwrap();

        assert!(generate_rules(0.0, &mined, &dataset.inventory).is_empty());
    }

    #[test]
    fn heads_of_every_size_are_enumerated() {
        let raw = vec![vec![A, B, C], vec![A, B, C]];
        let dataset = Dataset::from_transactions(&raw);
        let finder = FrequentItemSetFinder::new(0.5, 1.0).unwrap();
        let mined = finder.find(&dataset).unwrap();
        let rules = generate_rules(0.9, &mined, &dataset.inventory);

        // the 3-set alone contributes 6 rules (3 single heads, 3 double
        // heads), the three 2-sets contribute 2 each
        assert_eq!(rules.len(), 12);
        assert!(find(&rules, &[A], &[B, C]).is_some());
        assert!(find(&rules, &[A, B], &[C]).is_some());
    }

    #[test]
    fn rules_inherit_the_witness_interval_of_their_frequent_set() {
        use crate::interval::TimeInterval;
        use crate::transaction::TimedTransaction;

        let raw = vec![
            TimedTransaction::with_interval(vec![A, B], TimeInterval::new(10, 20).unwrap()),
            TimedTransaction::with_interval(vec![A, B], TimeInterval::new(15, 25).unwrap()),
        ];
        let dataset = Dataset::from_transactions(&raw);
        let finder = FrequentItemSetFinder::new(0.5, 1.0).unwrap();
        let mined = finder.find(&dataset).unwrap();
        let rules = generate_rules(0.5, &mined, &dataset.inventory);

        let rule = find(&rules, &[A], &[B]).unwrap();
        assert!(rule.is_temporal());
        assert_eq!(rule.time_interval(), Some(&TimeInterval::new(15, 20).unwrap()));
        assert!(rule.is_valid_at(18));
        assert!(!rule.is_valid_at(22));
    }
}
