use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::slice;

/// The capabilities an item must provide: equality consistent with hashing,
/// and a total order. Implemented automatically for every conforming type.
pub trait Item: Clone + Ord + Hash {}

impl<T: Clone + Ord + Hash> Item for T {}

/// An ordered set of items together with the support it was observed at.
///
/// The elements are unique and iterate in the items' total order, regardless
/// of the order they were supplied in. Equality, hashing and ordering are
/// based on the elements alone; the support is a measurement, not part of the
/// set's identity.
#[derive(Debug, Clone)]
pub struct ItemSet<I: Item> {
    items: Vec<I>,
    support: f64,
}

impl<I: Item> ItemSet<I> {
    /// Creates an item set with a support of 0. Duplicates are dropped.
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        Self::with_support(items, 0.0)
    }

    /// Creates an item set carrying the given support.
    pub fn with_support(items: impl IntoIterator<Item = I>, support: f64) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort();
        items.dedup();

        Self { items, support }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, I> {
        self.items.iter()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn is_subset_of(&self, other: &ItemSet<I>) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }

    /// Returns the union of two item sets, with a support of 0.
    pub fn union(&self, other: &ItemSet<I>) -> ItemSet<I> {
        ItemSet::new(self.items.iter().chain(other.items.iter()).cloned())
    }

    /// The fraction of transactions containing the set.
    pub fn support(&self) -> f64 {
        self.support
    }

    /// A stable, order-independent hash of the set's elements. Two sets with
    /// the same elements fingerprint identically. The fingerprint is an
    /// advisory lookup key; equality of sets remains element-wise.
    pub fn fingerprint(&self) -> u64 {
        // the elements are kept sorted, so hashing the sequence does not
        // depend on insertion order
        let mut hasher = DefaultHasher::new();
        for item in &self.items {
            item.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<I: Item> PartialEq for ItemSet<I> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<I: Item> Eq for ItemSet<I> {}

impl<I: Item> Hash for ItemSet<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<I: Item> PartialOrd for ItemSet<I> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Item> Ord for ItemSet<I> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.items.cmp(&other.items)
    }
}

impl<'a, I: Item> IntoIterator for &'a ItemSet<I> {
    type Item = &'a I;
    type IntoIter = slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<I: Item + Display> Display for ItemSet<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[")?;

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_are_sorted_and_unique() {
        let item_set = ItemSet::new(vec!["c", "a", "b", "a"]);

        assert_eq!(item_set.len(), 3);
        assert_eq!(item_set.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn equality_ignores_support() {
        let a = ItemSet::with_support(vec!["a", "b"], 0.5);
        let b = ItemSet::with_support(vec!["b", "a"], 0.9);

        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_is_insertion_order_independent() {
        let a = ItemSet::new(vec!["milk", "bread", "butter"]);
        let b = ItemSet::new(vec!["butter", "milk", "bread"]);

        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprints_differ_for_different_sets() {
        let a = ItemSet::new(vec!["milk", "bread"]);
        let b = ItemSet::new(vec!["milk", "butter"]);

        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn contains_and_subset() {
        let small = ItemSet::new(vec!["a", "c"]);
        let large = ItemSet::new(vec!["a", "b", "c"]);

        assert!(small.contains(&"a"));
        assert!(!small.contains(&"b"));
        assert!(small.is_subset_of(&large));
        assert!(!large.is_subset_of(&small));
        assert!(small.is_subset_of(&small));
    }

    #[test]
    fn union_merges_elements() {
        let a = ItemSet::new(vec!["a", "b"]);
        let b = ItemSet::new(vec!["b", "c"]);

        assert_eq!(a.union(&b), ItemSet::new(vec!["a", "b", "c"]));
    }

    #[test]
    fn empty_item_set() {
        let item_set: ItemSet<&str> = ItemSet::new(vec![]);

        assert!(item_set.is_empty());
        assert_eq!(item_set.len(), 0);
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let original = ItemSet::with_support(vec!["a", "b"], 0.4);
        let mut cloned = original.clone();

        assert_eq!(original, cloned);

        cloned.support = 0.9;
        assert_eq!(original.support(), 0.4);
    }

    #[test]
    fn display() {
        let item_set = ItemSet::new(vec!["b", "a"]);
        assert_eq!(item_set.to_string(), "[a, b]");
    }

    #[test]
    fn ordering_is_lexicographic_over_elements() {
        let a = ItemSet::new(vec!["a"]);
        let ab = ItemSet::new(vec!["a", "b"]);
        let b = ItemSet::new(vec!["b"]);

        assert!(a < ab);
        assert!(ab < b);
    }
}
