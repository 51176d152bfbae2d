use itertools::Itertools;

use crate::types::{ItemId, Itemset};

/// Joins sorted k-itemsets that share their first `k - 1` elements into
/// sorted `(k + 1)`-candidates.
///
/// The input sets are grouped by their common prefix; within a group, every
/// pair of distinct last elements extends the prefix by two. Singleton input
/// degenerates to all pairs of items, so the same step drives every level.
pub(crate) fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    if itemsets.is_empty() {
        return vec![];
    }

    itemsets.sort_unstable();
    itemsets.dedup();

    let mut joined: Vec<Itemset> = Vec::new();
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, last) = itemsets[i].split_at(itemsets[i].len() - 1);

        tail_items.clear();
        tail_items.push(last[0]);

        let mut skip = 1;
        for other in &itemsets[i + 1..] {
            let (other_prefix, other_last) = other.split_at(other.len() - 1);

            if prefix == other_prefix {
                tail_items.push(other_last[0]);
                skip += 1;
            } else {
                break;
            }
        }

        // tails are ascending, so the joined candidate stays sorted
        for pair in tail_items.iter().combinations(2) {
            let mut candidate = Vec::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(*pair[0]);
            candidate.push(*pair[1]);
            joined.push(candidate);
        }

        i += skip;
    }

    joined
}
