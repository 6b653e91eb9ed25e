//! Tabular results handed back to the calling layer.

use serde::{Deserialize, Serialize};

use crate::itemset::Itemset;
use crate::roles::ColumnRoles;
use crate::rule::Rule;

/// One row of the rules table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRow {
    pub antecedents: String,
    pub consequents: String,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl From<&Rule> for RuleRow {
    fn from(rule: &Rule) -> Self {
        Self {
            antecedents: rule.antecedent.label(),
            consequents: rule.consequent.label(),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        }
    }
}

/// One row of the frequent itemsets table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsetRow {
    pub itemset: String,
    pub length: usize,
    pub support: f64,
}

impl ItemsetRow {
    pub fn new(itemset: &Itemset, support: f64) -> Self {
        Self {
            itemset: itemset.label(),
            length: itemset.len(),
            support,
        }
    }
}

/// The detection outcome, as reported to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heuristics {
    pub order_col: Option<String>,
    pub customer_col: Option<String>,
    pub date_col: Option<String>,
    pub used_list_mode: bool,
}

impl From<&ColumnRoles> for Heuristics {
    fn from(roles: &ColumnRoles) -> Self {
        Self {
            order_col: roles.order_col.clone(),
            customer_col: roles.customer_col.clone(),
            date_col: roles.date_col.clone(),
            used_list_mode: roles.used_list_mode,
        }
    }
}

/// Audit information about how the transactions were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMeta {
    pub detected_item_col: String,
    pub detected_trans_col: String,
    pub heuristics: Heuristics,
    pub n_transactions: usize,
    pub n_unique_items: usize,
}

/// The complete result triple of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub rules_table: Vec<RuleRow>,
    pub frequent_itemsets_table: Vec<ItemsetRow>,
    pub meta: AnalysisMeta,
}
