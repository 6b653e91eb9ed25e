//! Association rule generation from frequent itemsets.

use std::time::Instant;

use basket_model::{FrequentItemsets, Result, Rule};
use tracing::{debug, info};

use crate::options::check_min_lift;

/// Derives every rule with lift of at least `min_lift`.
///
/// Each frequent itemset of two or more items is split into every
/// non-empty antecedent and its complement. Rules are ranked by lift, then
/// confidence, then support, all descending; equal keys keep generation
/// order (itemset size, then lexical, then antecedent size).
pub fn generate_rules(frequent: &FrequentItemsets, min_lift: f64) -> Result<Vec<Rule>> {
    check_min_lift(min_lift)?;
    let start = Instant::now();

    let mut rules = Vec::new();
    let mut skipped = 0usize;
    for (itemset, support) in frequent.iter().filter(|(set, _)| set.len() >= 2) {
        for size in 1..itemset.len() {
            for antecedent in itemset.subsets(size) {
                let consequent = itemset.difference(&antecedent);
                let (Some(antecedent_support), Some(consequent_support)) =
                    (frequent.support(&antecedent), frequent.support(&consequent))
                else {
                    skipped += 1;
                    continue;
                };
                if antecedent_support <= 0.0 || consequent_support <= 0.0 {
                    skipped += 1;
                    continue;
                }

                let confidence = support / antecedent_support;
                let lift = confidence / consequent_support;
                if lift >= min_lift {
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        support,
                        confidence,
                        lift,
                    });
                }
            }
        }
    }
    if skipped > 0 {
        debug!(skipped, "skipped splits with missing subset support");
    }

    rank_rules(&mut rules);
    info!(
        rules = rules.len(),
        min_lift,
        duration_ms = start.elapsed().as_millis(),
        "generated association rules"
    );
    Ok(rules)
}

/// Stable sort by (lift, confidence, support), descending.
pub fn rank_rules(rules: &mut [Rule]) {
    rules.sort_by(|a, b| {
        b.lift
            .total_cmp(&a.lift)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
            .then_with(|| b.support.total_cmp(&a.support))
    });
}
