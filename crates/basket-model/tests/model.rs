//! Tests for basket-model types.

use basket_model::{
    AnalysisMeta, AnalysisOutput, CellValue, ColumnRoles, Heuristics, Itemset, ItemsetRow,
    ModelError, RawColumn, RawTable, Rule, RuleRow,
};

#[test]
fn test_rule_row_renders_sorted_labels() {
    let rule = Rule {
        antecedent: Itemset::new(["eggs", "bread"]),
        consequent: Itemset::single("milk"),
        support: 0.4,
        confidence: 0.8,
        lift: 1.2,
    };
    let row = RuleRow::from(&rule);
    assert_eq!(row.antecedents, "bread, eggs");
    assert_eq!(row.consequents, "milk");
    assert_eq!(rule.itemset(), Itemset::new(["bread", "eggs", "milk"]));
}

#[test]
fn test_itemset_row_reports_length() {
    let row = ItemsetRow::new(&Itemset::new(["b", "a"]), 0.25);
    assert_eq!(row.itemset, "a, b");
    assert_eq!(row.length, 2);
}

#[test]
fn test_heuristics_copy_roles() {
    let roles = ColumnRoles {
        item_col: Some("product".to_string()),
        order_col: None,
        customer_col: Some("member".to_string()),
        date_col: Some("date".to_string()),
        list_col: None,
        used_list_mode: false,
    };
    let heuristics = Heuristics::from(&roles);
    assert_eq!(heuristics.customer_col.as_deref(), Some("member"));
    assert_eq!(heuristics.order_col, None);
    assert!(!heuristics.used_list_mode);
}

#[test]
fn test_output_serializes_with_snake_case_meta() {
    let output = AnalysisOutput {
        rules_table: vec![],
        frequent_itemsets_table: vec![ItemsetRow::new(&Itemset::single("a"), 1.0)],
        meta: AnalysisMeta {
            detected_item_col: "item".to_string(),
            detected_trans_col: "order_id".to_string(),
            heuristics: Heuristics::default(),
            n_transactions: 3,
            n_unique_items: 1,
        },
    };
    let json = serde_json::to_value(&output).expect("serialize output");
    assert_eq!(json["meta"]["detected_trans_col"], "order_id");
    assert_eq!(json["meta"]["heuristics"]["used_list_mode"], false);
    assert_eq!(json["frequent_itemsets_table"][0]["itemset"], "a");

    let round: AnalysisOutput = serde_json::from_value(json).expect("deserialize output");
    assert_eq!(round, output);
}

fn sample_table() -> RawTable {
    RawTable::new(vec![
        RawColumn::new("order", vec![CellValue::Integer(1)]),
        RawColumn::new("item", vec![CellValue::text("milk")]),
        RawColumn::new("2024", vec![CellValue::text("x")]),
    ])
    .unwrap()
}

#[test]
fn test_select_by_name_and_index() {
    let table = sample_table();
    let selected = table.select(&["item", "0"]).unwrap();
    assert_eq!(selected.column_names(), vec!["item", "order"]);
    assert_eq!(selected.height(), 1);
}

#[test]
fn test_select_prefers_exact_names_and_skips_repeats() {
    let table = sample_table();
    let selected = table.select(&["2024", "2", " item ", "item"]).unwrap();
    assert_eq!(selected.column_names(), vec!["2024", "item"]);
}

#[test]
fn test_select_empty_keeps_everything() {
    let table = sample_table();
    let none: [&str; 0] = [];
    assert_eq!(table.select(&none).unwrap(), table);
}

#[test]
fn test_select_rejects_unknown_columns() {
    let table = sample_table();
    assert_eq!(
        table.select(&["price"]),
        Err(ModelError::UnknownColumn("price".to_string()))
    );
    assert_eq!(
        table.select(&["7"]),
        Err(ModelError::ColumnOutOfRange { index: 7, width: 3 })
    );
}
