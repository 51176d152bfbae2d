use std::collections::HashMap;

use crate::interval::TimeInterval;

/// Dense rank of an item in the caller's total order.
pub(crate) type ItemId = usize;
/// Sorted, deduplicated set of item ranks.
pub(crate) type Itemset = Vec<ItemId>;
pub(crate) type ItemsetLength = usize;

pub(crate) type ItemCounts = HashMap<ItemId, u32>;
pub(crate) type ItemsetCounts = HashMap<Itemset, u32>;
/// Frequent item sets keyed by their size.
pub(crate) type FrequentItemsets = HashMap<ItemsetLength, ItemsetCounts>;

/// Merged validity interval per frequent item set. A set is only present when
/// every witnessing transaction was temporal and their intervals overlap.
pub(crate) type WitnessIntervals = HashMap<Itemset, TimeInterval>;
