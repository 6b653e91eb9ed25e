//! The analysis entry point: detect, build, mine, generate.

use std::time::Instant;

use basket_map::RoleDetector;
use basket_model::{
    AnalysisError, AnalysisMeta, AnalysisOutput, ColumnRoles, FrequentItemsets, Heuristics,
    ItemsetRow, RawTable, Result, Rule, RuleRow,
};
use tracing::{info, info_span};

use crate::apriori::mine;
use crate::options::AnalysisOptions;
use crate::rules::generate_rules;
use crate::transactions::build_transactions;

/// Everything one analysis produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketAnalysis {
    pub roles: ColumnRoles,
    pub frequent_itemsets: FrequentItemsets,
    pub rules: Vec<Rule>,
    pub meta: AnalysisMeta,
}

impl BasketAnalysis {
    /// Rules in rank order, rendered as table rows.
    pub fn rules_table(&self) -> Vec<RuleRow> {
        self.rules.iter().map(RuleRow::from).collect()
    }

    /// Frequent itemsets ordered by length ascending, then support
    /// descending. Ties keep lexical order.
    pub fn frequent_itemsets_table(&self) -> Vec<ItemsetRow> {
        let mut rows: Vec<ItemsetRow> = self
            .frequent_itemsets
            .iter()
            .map(|(itemset, support)| ItemsetRow::new(itemset, support))
            .collect();
        rows.sort_by(|a, b| {
            a.length
                .cmp(&b.length)
                .then_with(|| b.support.total_cmp(&a.support))
        });
        rows
    }

    pub fn to_output(&self) -> AnalysisOutput {
        AnalysisOutput {
            rules_table: self.rules_table(),
            frequent_itemsets_table: self.frequent_itemsets_table(),
            meta: self.meta.clone(),
        }
    }
}

/// Runs the full analysis on `table`.
///
/// Either every stage succeeds or the first failure is returned; there
/// are no partial results.
pub fn analyze(table: &RawTable, options: &AnalysisOptions) -> Result<BasketAnalysis> {
    options.validate()?;
    let span = info_span!(
        "analyze",
        rows = table.height(),
        columns = table.width(),
        min_support = options.min_support,
        min_lift = options.min_lift
    );
    let _guard = span.enter();
    let start = Instant::now();

    if table.is_empty() {
        return Err(AnalysisError::empty_dataset("the input table has no rows"));
    }

    let roles = info_span!("detect").in_scope(|| {
        let roles = RoleDetector::new(&options.synonyms).detect(table);
        info!(
            item_col = roles.item_col.as_deref().unwrap_or("-"),
            order_col = roles.order_col.as_deref().unwrap_or("-"),
            customer_col = roles.customer_col.as_deref().unwrap_or("-"),
            date_col = roles.date_col.as_deref().unwrap_or("-"),
            used_list_mode = roles.used_list_mode,
            "detected column roles"
        );
        roles
    });
    if !roles.has_item() {
        return Err(AnalysisError::schema_detection(
            "no column matches an item name and the table has no text column",
        ));
    }

    let transactions = info_span!("transactions")
        .in_scope(|| build_transactions(table, &roles, options.fallback_group_size))?;
    let frequent_itemsets =
        info_span!("mine").in_scope(|| mine(&transactions.transactions, options.min_support))?;
    let rules =
        info_span!("rules").in_scope(|| generate_rules(&frequent_itemsets, options.min_lift))?;

    let meta = AnalysisMeta {
        detected_item_col: transactions.item_column.clone(),
        detected_trans_col: transactions.transaction_column.clone(),
        heuristics: Heuristics::from(&roles),
        n_transactions: transactions.len(),
        n_unique_items: transactions.n_unique_items,
    };
    info!(
        transactions = meta.n_transactions,
        unique_items = meta.n_unique_items,
        frequent_itemsets = frequent_itemsets.len(),
        rules = rules.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    Ok(BasketAnalysis {
        roles,
        frequent_itemsets,
        rules,
        meta,
    })
}
