use serde::{Deserialize, Serialize};

use crate::itemset::Itemset;

/// An association rule `antecedent → consequent`.
///
/// `support` is the support of the union, `confidence` is
/// `support / support(antecedent)` and `lift` is
/// `confidence / support(consequent)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl Rule {
    /// The frequent itemset this rule was split from.
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }
}
