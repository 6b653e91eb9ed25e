//! Property tests for mining and rule generation.
//!
//! Transactions are drawn from a six-item alphabet so every frequent
//! itemset can be checked against a brute-force count over all 63
//! non-empty subsets of the alphabet.

use std::collections::BTreeSet;

use basket_core::{generate_candidates, generate_rules, mine};
use basket_model::{Itemset, Transaction};
use proptest::prelude::*;

const ALPHABET: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(prop::collection::btree_set(0..ALPHABET.len(), 1..=5), 1..25).prop_map(
        |baskets| {
            baskets
                .into_iter()
                .enumerate()
                .filter_map(|(i, items)| {
                    Transaction::new(format!("T{i}"), items.into_iter().map(|idx| ALPHABET[idx]))
                })
                .collect()
        },
    )
}

fn support_strategy() -> impl Strategy<Value = f64> {
    (1u32..=20).prop_map(|step| (f64::from(step) * 0.05).min(1.0))
}

fn all_subsets() -> Vec<Itemset> {
    (1u32..(1 << ALPHABET.len()))
        .map(|mask| {
            ALPHABET
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, item)| *item)
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn test_supports_are_antimonotone(
        transactions in transactions_strategy(),
        min_support in support_strategy(),
    ) {
        let frequent = mine(&transactions, min_support).unwrap();
        for (itemset, support) in frequent.iter() {
            prop_assert!(support > 0.0 && support <= 1.0);
            for subset in itemset.subsets(itemset.len().saturating_sub(1)) {
                let parent = frequent.support(&subset);
                prop_assert!(parent.is_some(), "{subset} missing under {itemset}");
                prop_assert!(parent.unwrap_or(0.0) >= support);
            }
        }
    }

    #[test]
    fn test_mining_matches_brute_force(
        transactions in transactions_strategy(),
        min_support in support_strategy(),
    ) {
        let frequent = mine(&transactions, min_support).unwrap();
        let total = transactions.len() as f64;
        let mut expected = 0usize;
        for itemset in all_subsets() {
            let count = transactions
                .iter()
                .filter(|tx| itemset.is_subset_of(&tx.items))
                .count();
            let support = count as f64 / total;
            if count > 0 && support >= min_support {
                expected += 1;
                prop_assert_eq!(frequent.support(&itemset), Some(support));
            } else {
                prop_assert!(!frequent.contains(&itemset));
            }
        }
        prop_assert_eq!(frequent.len(), expected);
    }

    #[test]
    fn test_candidates_have_only_frequent_subsets(
        transactions in transactions_strategy(),
        min_support in support_strategy(),
    ) {
        let frequent = mine(&transactions, min_support).unwrap();
        for (&size, level) in frequent.levels() {
            for candidate in generate_candidates(level, size + 1) {
                prop_assert_eq!(candidate.len(), size + 1);
                for subset in candidate.subsets(size) {
                    prop_assert!(level.contains_key(&subset));
                }
            }
        }
    }

    #[test]
    fn test_rules_are_valid(
        transactions in transactions_strategy(),
        min_support in support_strategy(),
        min_lift in 0.0f64..2.0,
    ) {
        let frequent = mine(&transactions, min_support).unwrap();
        let rules = generate_rules(&frequent, min_lift).unwrap();
        for rule in &rules {
            prop_assert!(rule.antecedent.is_disjoint(&rule.consequent));
            prop_assert!(!rule.antecedent.is_empty() && !rule.consequent.is_empty());
            prop_assert!(frequent.contains(&rule.itemset()));
            prop_assert!(rule.confidence >= 0.0 && rule.confidence <= 1.0 + 1e-12);
            prop_assert!(rule.lift >= min_lift);
        }
        for pair in rules.windows(2) {
            prop_assert!(pair[0].lift >= pair[1].lift);
        }
    }

    #[test]
    fn test_mining_is_deterministic(
        transactions in transactions_strategy(),
        min_support in support_strategy(),
    ) {
        let first = mine(&transactions, min_support).unwrap();
        let second = mine(&transactions, min_support).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            generate_rules(&first, 0.5).unwrap(),
            generate_rules(&second, 0.5).unwrap()
        );
    }

    #[test]
    fn test_cleaning_is_idempotent(
        items in prop::collection::vec("[ a-d]{0,3}", 1..10),
    ) {
        if let Some(once) = Transaction::new("T", &items) {
            let twice = Transaction::new("T", &once.items);
            prop_assert_eq!(Some(once.clone()), twice);
            let distinct: BTreeSet<&str> = items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect();
            prop_assert_eq!(once.len(), distinct.len());
        }
    }
}
