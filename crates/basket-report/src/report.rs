//! The presentation-ready analysis report.
//!
//! Numbers are rounded to six decimals and non-finite values become
//! `null`, so the report is always valid JSON.

use basket_model::{AnalysisOutput, Heuristics, ItemsetRow, RuleRow};
use serde::{Deserialize, Serialize};

/// Value of the report's `type` field.
pub const REPORT_KIND: &str = "basket";

/// Number of single items listed in [`AnalysisReport::single_rules_table`].
pub const SINGLE_ITEM_LIMIT: usize = 20;

/// Rounds to six decimals; NaN and infinities become `None`.
///
/// # Examples
///
/// ```
/// use basket_report::round6;
///
/// assert_eq!(round6(2.0 / 3.0), Some(0.666667));
/// assert_eq!(round6(f64::NAN), None);
/// assert_eq!(round6(f64::INFINITY), None);
/// ```
pub fn round6(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = (value * 1e6).round() / 1e6;
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// One rule as shown to users and written to CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRule {
    pub antecedents: String,
    pub consequents: String,
    pub support: Option<f64>,
    pub confidence: Option<f64>,
    pub lift: Option<f64>,
}

impl From<&RuleRow> for ReportRule {
    fn from(row: &RuleRow) -> Self {
        Self {
            antecedents: row.antecedents.clone(),
            consequents: row.consequents.clone(),
            support: round6(row.support),
            confidence: round6(row.confidence),
            lift: round6(row.lift),
        }
    }
}

impl ReportRule {
    /// A single frequent item shown in rule layout, without a consequent.
    fn single_item(row: &ItemsetRow) -> Self {
        Self {
            antecedents: row.itemset.clone(),
            consequents: String::new(),
            support: round6(row.support),
            confidence: None,
            lift: None,
        }
    }
}

/// One frequent itemset as shown to users and written to CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportItemset {
    pub itemset: String,
    pub length: usize,
    pub support: Option<f64>,
}

impl From<&ItemsetRow> for ReportItemset {
    fn from(row: &ItemsetRow) -> Self {
        Self {
            itemset: row.itemset.clone(),
            length: row.length,
            support: round6(row.support),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub detected_item_col: String,
    pub detected_trans_col: String,
    pub n_transactions: usize,
    pub n_unique_items: usize,
    pub heuristics: Heuristics,
    pub min_support: f64,
    pub min_lift: f64,
}

/// The full report written as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub success: bool,
    /// Always `"basket"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub meta: ReportMeta,
    pub total_rules: usize,
    pub total_transactions: usize,
    pub total_items: usize,
    pub total_frequent_itemsets: usize,
    pub rules_table: Vec<ReportRule>,
    /// The first single-item rows of the frequent itemsets table.
    pub single_rules_table: Vec<ReportRule>,
    pub frequent_itemsets_table: Vec<ReportItemset>,
}

impl AnalysisReport {
    pub fn new(output: &AnalysisOutput, min_support: f64, min_lift: f64) -> Self {
        let rules_table: Vec<ReportRule> = output.rules_table.iter().map(ReportRule::from).collect();
        let frequent_itemsets_table: Vec<ReportItemset> = output
            .frequent_itemsets_table
            .iter()
            .map(ReportItemset::from)
            .collect();
        let single_rules_table = output
            .frequent_itemsets_table
            .iter()
            .filter(|row| row.length == 1)
            .take(SINGLE_ITEM_LIMIT)
            .map(ReportRule::single_item)
            .collect();

        let meta = &output.meta;
        Self {
            success: true,
            kind: REPORT_KIND.to_string(),
            meta: ReportMeta {
                detected_item_col: meta.detected_item_col.clone(),
                detected_trans_col: meta.detected_trans_col.clone(),
                n_transactions: meta.n_transactions,
                n_unique_items: meta.n_unique_items,
                heuristics: meta.heuristics.clone(),
                min_support,
                min_lift,
            },
            total_rules: rules_table.len(),
            total_transactions: meta.n_transactions,
            total_items: meta.n_unique_items,
            total_frequent_itemsets: frequent_itemsets_table.len(),
            rules_table,
            single_rules_table,
            frequent_itemsets_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round6_handles_edges() {
        assert_eq!(round6(0.1234564), Some(0.123456));
        assert_eq!(round6(0.1234566), Some(0.123457));
        assert_eq!(round6(1.25), Some(1.25));
        assert_eq!(round6(-0.0000001), Some(0.0));
        assert_eq!(round6(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_single_items_are_capped() {
        let rows: Vec<ItemsetRow> = (0..25)
            .map(|i| ItemsetRow {
                itemset: format!("item{i:02}"),
                length: 1,
                support: 0.5,
            })
            .chain(std::iter::once(ItemsetRow {
                itemset: "a, b".to_string(),
                length: 2,
                support: 0.5,
            }))
            .collect();
        let output = AnalysisOutput {
            frequent_itemsets_table: rows,
            ..AnalysisOutput::default()
        };

        let report = AnalysisReport::new(&output, 0.1, 1.0);
        assert_eq!(report.single_rules_table.len(), SINGLE_ITEM_LIMIT);
        assert_eq!(report.single_rules_table[0].antecedents, "item00");
        assert_eq!(report.single_rules_table[0].confidence, None);
        assert_eq!(report.total_frequent_itemsets, 26);
    }
}
