use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use basket_map::SynonymLists;
use basket_report::{AnalysisReport, ReportRule};

use crate::types::AnalyzeResult;

pub fn print_summary(result: &AnalyzeResult, top: usize) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    println!("{}", detection_table(report));
    println!("{}", totals_table(report));
    if report.rules_table.is_empty() {
        println!("No rules reached the thresholds.");
    } else {
        println!();
        println!(
            "Top rules ({} of {}):",
            top.min(report.total_rules),
            report.total_rules
        );
        println!("{}", rules_table(&report.rules_table, top));
    }
    if result.dry_run {
        println!("Dry run: no files written.");
    } else {
        println!("Output: {}", result.output_dir.display());
        for path in &result.written {
            println!("- {}", path.display());
        }
    }
}

pub fn print_synonyms(lists: &SynonymLists) {
    println!("{}", synonyms_table(lists));
}

pub fn detection_table(report: &AnalysisReport) -> Table {
    let meta = &report.meta;
    let heuristics = &meta.heuristics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Item"),
        Cell::new(&meta.detected_item_col)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Transaction"),
        Cell::new(&meta.detected_trans_col)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Order"), optional_cell(heuristics.order_col.as_deref())]);
    table.add_row(vec![
        Cell::new("Customer"),
        optional_cell(heuristics.customer_col.as_deref()),
    ]);
    table.add_row(vec![Cell::new("Date"), optional_cell(heuristics.date_col.as_deref())]);
    table.add_row(vec![
        Cell::new("List mode"),
        Cell::new(if heuristics.used_list_mode { "yes" } else { "no" }),
    ]);
    table
}

pub fn totals_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Transactions"),
        header_cell("Unique items"),
        header_cell("Frequent itemsets"),
        header_cell("Rules"),
        header_cell("Min support"),
        header_cell("Min lift"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.total_transactions),
        Cell::new(report.total_items),
        Cell::new(report.total_frequent_itemsets),
        count_cell(report.total_rules),
        Cell::new(report.meta.min_support),
        Cell::new(report.meta.min_lift),
    ]);
    table
}

/// The first `top` rules, in rank order.
pub fn rules_table(rules: &[ReportRule], top: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Antecedents"),
        header_cell("Consequents"),
        header_cell("Support"),
        header_cell("Confidence"),
        header_cell("Lift"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 3, 4, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (rank, rule) in rules.iter().take(top).enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&rule.antecedents),
            Cell::new(&rule.consequents).add_attribute(Attribute::Bold),
            metric_cell(rule.support),
            metric_cell(rule.confidence),
            metric_cell(rule.lift),
        ]);
    }
    table
}

pub fn synonyms_table(lists: &SynonymLists) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Synonyms")]);
    apply_table_style(&mut table);
    for (role, synonyms) in lists.roles() {
        table.add_row(vec![
            Cell::new(role)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(synonyms.join(", ")),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn metric_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.4}")),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count).fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
