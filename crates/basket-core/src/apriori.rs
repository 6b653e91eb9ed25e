//! Level-wise frequent itemset mining.
//!
//! Level 1 counts single items directly. Each further level joins pairs of
//! frequent itemsets from the previous level, keeps only unions whose
//! every one-smaller subset is frequent, and counts the survivors by a
//! subset scan over all transactions.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use basket_model::{AnalysisError, FrequentItemsets, Itemset, Result, Transaction};
use tracing::{debug, info};

use crate::options::check_min_support;

/// Candidate itemsets of size `k` built from the frequent itemsets of size
/// `k - 1`.
///
/// A union of two frequent itemsets is kept only when it has exactly `k`
/// items and all of its `(k - 1)`-subsets are in `previous`.
pub fn generate_candidates<V>(previous: &BTreeMap<Itemset, V>, k: usize) -> BTreeSet<Itemset> {
    if k < 2 {
        return BTreeSet::new();
    }
    let frequent: Vec<&Itemset> = previous.keys().collect();
    let mut candidates = BTreeSet::new();
    for (i, left) in frequent.iter().enumerate() {
        for right in &frequent[i + 1..] {
            let union = left.union(right);
            if union.len() != k || candidates.contains(&union) {
                continue;
            }
            if union
                .subsets(k - 1)
                .iter()
                .all(|subset| previous.contains_key(subset))
            {
                candidates.insert(union);
            }
        }
    }
    candidates
}

/// Number of transactions containing `itemset`.
fn count_containing(itemset: &Itemset, transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|tx| itemset.is_subset_of(&tx.items))
        .count()
}

/// Finds every itemset whose support is at least `min_support`.
///
/// Support is the fraction of transactions that contain the itemset.
pub fn mine(transactions: &[Transaction], min_support: f64) -> Result<FrequentItemsets> {
    check_min_support(min_support)?;
    if transactions.is_empty() {
        return Err(AnalysisError::empty_dataset("no transactions to mine"));
    }

    let start = Instant::now();
    let total = transactions.len() as f64;
    let support_of = |count: usize| count as f64 / total;
    let mut frequent = FrequentItemsets::new(transactions.len());

    let mut item_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tx in transactions {
        for item in &tx.items {
            *item_counts.entry(item.as_str()).or_default() += 1;
        }
    }
    let mut level: BTreeMap<Itemset, f64> = item_counts
        .into_iter()
        .map(|(item, count)| (Itemset::single(item), support_of(count)))
        .filter(|(_, support)| *support >= min_support)
        .collect();
    debug!(k = 1, frequent = level.len(), "mined level");

    let mut k = 2;
    while !level.is_empty() {
        let candidates = generate_candidates(&level, k);
        frequent.insert_level(k - 1, level);
        if candidates.is_empty() {
            break;
        }

        let candidate_count = candidates.len();
        level = candidates
            .into_iter()
            .filter_map(|candidate| {
                let count = count_containing(&candidate, transactions);
                (count > 0).then(|| (candidate, support_of(count)))
            })
            .filter(|(_, support)| *support >= min_support)
            .collect();
        debug!(k, candidates = candidate_count, frequent = level.len(), "mined level");
        k += 1;
    }

    info!(
        transactions = transactions.len(),
        min_support,
        frequent_itemsets = frequent.len(),
        max_size = frequent.max_size(),
        duration_ms = start.elapsed().as_millis(),
        "mined frequent itemsets"
    );
    Ok(frequent)
}
