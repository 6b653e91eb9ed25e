//! Itemsets and the frequent-itemset table produced by the miner.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable, unordered set of item identifiers.
///
/// Items are kept sorted so that equal sets compare, hash and render
/// identically regardless of how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itemset(BTreeSet<String>);

impl Itemset {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn single(item: impl Into<String>) -> Self {
        Self(BTreeSet::from([item.into()]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &BTreeSet<String> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    /// True when every item of `self` is present in `items`.
    pub fn is_subset_of(&self, items: &BTreeSet<String>) -> bool {
        self.0.len() <= items.len() && self.0.is_subset(items)
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// The set with one item removed.
    pub fn without(&self, item: &str) -> Self {
        Self(self.0.iter().filter(|i| *i != item).cloned().collect())
    }

    /// All subsets of exactly `size` items, in lexicographic order.
    pub fn subsets(&self, size: usize) -> Vec<Self> {
        let items: Vec<&String> = self.0.iter().collect();
        let n = items.len();
        if size == 0 || size > n {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            out.push(Self(indices.iter().map(|&i| items[i].clone()).collect()));
            // Advance the rightmost index that still has room.
            let Some(pos) = (0..size).rev().find(|&i| indices[i] != i + n - size) else {
                break;
            };
            indices[pos] += 1;
            for next in pos + 1..size {
                indices[next] = indices[next - 1] + 1;
            }
        }
        out
    }

    /// Sorted, comma-joined rendering used in result tables.
    pub fn label(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.label())
    }
}

impl<S: Into<String>> FromIterator<S> for Itemset {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Frequent itemsets grouped by size, each with its support.
///
/// Levels are keyed by itemset size and only non-empty levels are stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    transaction_count: usize,
    levels: BTreeMap<usize, BTreeMap<Itemset, f64>>,
}

impl FrequentItemsets {
    pub fn new(transaction_count: usize) -> Self {
        Self {
            transaction_count,
            levels: BTreeMap::new(),
        }
    }

    /// Stores the frequent itemsets of one size. Empty levels are ignored.
    pub fn insert_level(&mut self, size: usize, itemsets: BTreeMap<Itemset, f64>) {
        if !itemsets.is_empty() {
            self.levels.insert(size, itemsets);
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    pub fn level(&self, size: usize) -> Option<&BTreeMap<Itemset, f64>> {
        self.levels.get(&size)
    }

    pub fn levels(&self) -> &BTreeMap<usize, BTreeMap<Itemset, f64>> {
        &self.levels
    }

    /// Support of a frequent itemset, `None` when it is not frequent.
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.levels
            .get(&itemset.len())
            .and_then(|level| level.get(itemset))
            .copied()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.support(itemset).is_some()
    }

    /// Size of the largest frequent itemset, 0 when there are none.
    pub fn max_size(&self) -> usize {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    /// Total number of frequent itemsets over all sizes.
    pub fn len(&self) -> usize {
        self.levels.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates by size, then lexicographically within a size.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.levels
            .values()
            .flat_map(|level| level.iter().map(|(itemset, support)| (itemset, *support)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_sorted() {
        let set = Itemset::new(["milk", "bread", "eggs"]);
        assert_eq!(set.label(), "bread, eggs, milk");
        assert_eq!(set.to_string(), "{bread, eggs, milk}");
    }

    #[test]
    fn test_subsets_enumerates_combinations_in_order() {
        let set = Itemset::new(["a", "b", "c", "d"]);
        let pairs: Vec<String> = set.subsets(2).iter().map(Itemset::label).collect();
        assert_eq!(pairs, vec!["a, b", "a, c", "a, d", "b, c", "b, d", "c, d"]);
        assert_eq!(set.subsets(4), vec![set.clone()]);
        assert!(set.subsets(0).is_empty());
        assert!(set.subsets(5).is_empty());
        assert_eq!(set.subsets(3).len(), 4);
    }

    #[test]
    fn test_set_operations() {
        let ab = Itemset::new(["a", "b"]);
        let bc = Itemset::new(["b", "c"]);
        assert_eq!(ab.union(&bc), Itemset::new(["a", "b", "c"]));
        assert_eq!(ab.difference(&bc), Itemset::single("a"));
        assert_eq!(ab.without("a"), Itemset::single("b"));
        assert!(!ab.is_disjoint(&bc));
        let tx: BTreeSet<String> = ["a", "b", "z"].iter().map(|s| s.to_string()).collect();
        assert!(ab.is_subset_of(&tx));
        assert!(!bc.is_subset_of(&tx));
    }

    #[test]
    fn test_frequent_itemsets_lookup() {
        let mut frequent = FrequentItemsets::new(4);
        frequent.insert_level(
            1,
            BTreeMap::from([(Itemset::single("a"), 0.75), (Itemset::single("b"), 0.5)]),
        );
        frequent.insert_level(2, BTreeMap::from([(Itemset::new(["a", "b"]), 0.5)]));
        frequent.insert_level(3, BTreeMap::new());

        assert_eq!(frequent.len(), 3);
        assert_eq!(frequent.max_size(), 2);
        assert_eq!(frequent.support(&Itemset::new(["b", "a"])), Some(0.5));
        assert_eq!(frequent.support(&Itemset::single("c")), None);
        let order: Vec<String> = frequent.iter().map(|(set, _)| set.label()).collect();
        assert_eq!(order, vec!["a", "b", "a, b"]);
    }
}
