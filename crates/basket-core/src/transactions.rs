//! Transaction building from a raw table and its detected roles.

use std::collections::{BTreeMap, BTreeSet};

use basket_model::{
    AnalysisError, CUSTOMER_DATE_KEY, CellValue, ColumnRoles, DATE_KEY, ROW_GROUP_KEY, RawColumn,
    RawTable, Result, Transaction,
};
use tracing::{debug, info, warn};

use crate::datetime::normalize_calendar_date;
use crate::options::check_group_size;

/// Characters that separate items inside a list-format cell.
pub const LIST_SEPARATORS: &[char] = &[',', ';', '|'];

/// Transactions plus the column names that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSet {
    /// One entry per basket, ordered by transaction key.
    pub transactions: Vec<Transaction>,
    /// Item column name, or the exploded placeholder in list mode.
    pub item_column: String,
    /// Transaction key column name, or one of the synthetic key names.
    pub transaction_column: String,
    /// Number of distinct items over all transactions.
    pub n_unique_items: usize,
}

impl TransactionSet {
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Where each row's transaction key comes from.
#[derive(Debug, Clone, Copy)]
enum KeySource<'a> {
    Order(&'a RawColumn),
    CustomerDate {
        customer: &'a RawColumn,
        date: &'a RawColumn,
    },
    Customer(&'a RawColumn),
    Date(&'a RawColumn),
    RowGroup(usize),
}

impl<'a> KeySource<'a> {
    fn resolve(table: &'a RawTable, roles: &ColumnRoles, group_size: usize) -> Result<Self> {
        let order = lookup(table, roles.order_col.as_deref())?;
        let customer = lookup(table, roles.customer_col.as_deref())?;
        let date = lookup(table, roles.date_col.as_deref())?;

        Ok(match (order, customer, date) {
            (Some(order), _, _) => Self::Order(order),
            (None, Some(customer), Some(date)) => Self::CustomerDate { customer, date },
            (None, Some(customer), None) => Self::Customer(customer),
            (None, None, Some(date)) => Self::Date(date),
            (None, None, None) => Self::RowGroup(group_size),
        })
    }

    fn column_name(&self) -> String {
        match self {
            Self::Order(col) | Self::Customer(col) => col.name().to_string(),
            Self::CustomerDate { .. } => CUSTOMER_DATE_KEY.to_string(),
            Self::Date(_) => DATE_KEY.to_string(),
            Self::RowGroup(_) => ROW_GROUP_KEY.to_string(),
        }
    }

    /// Key of a source row. `None` drops the row.
    fn key(&self, row: usize) -> Option<String> {
        match *self {
            Self::Order(col) | Self::Customer(col) => {
                col.get(row).and_then(CellValue::to_text_non_blank)
            }
            Self::CustomerDate { customer, date } => Some(format!(
                "{}|{}",
                customer.get(row).map(CellValue::to_text).unwrap_or_default(),
                date.get(row).map(normalize_calendar_date).unwrap_or_default()
            )),
            Self::Date(col) => col
                .get(row)
                .map(normalize_calendar_date)
                .filter(|day| !day.is_empty()),
            Self::RowGroup(size) => Some((row / size).to_string()),
        }
    }
}

fn require<'a>(table: &'a RawTable, name: &str) -> Result<&'a RawColumn> {
    table.column(name).ok_or_else(|| {
        AnalysisError::schema_detection(format!("column '{name}' not found in table"))
    })
}

fn lookup<'a>(table: &'a RawTable, name: Option<&str>) -> Result<Option<&'a RawColumn>> {
    name.map(|name| require(table, name)).transpose()
}

/// Splits a list-format cell into trimmed, non-empty items.
///
/// Any run of `,`, `;` or `|` separates two items.
///
/// # Examples
///
/// ```
/// use basket_core::transactions::split_item_list;
///
/// assert_eq!(split_item_list("milk, bread;eggs"), vec!["milk", "bread", "eggs"]);
/// assert_eq!(split_item_list(";;tea||"), vec!["tea"]);
/// ```
pub fn split_item_list(cell: &str) -> Vec<&str> {
    cell.split(LIST_SEPARATORS)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// (source row, item) pairs, exploded in list mode.
fn item_rows(table: &RawTable, roles: &ColumnRoles) -> Result<Vec<(usize, String)>> {
    if roles.used_list_mode {
        let list_col = roles.list_col.as_deref().ok_or_else(|| {
            AnalysisError::schema_detection("list mode is set but no list column was detected")
        })?;
        let column = require(table, list_col)?;
        let mut rows = Vec::new();
        for (row, cell) in column.values().iter().enumerate() {
            if cell.is_blank() {
                continue;
            }
            let text = cell.to_text();
            rows.extend(
                split_item_list(&text)
                    .into_iter()
                    .map(|item| (row, item.to_string())),
            );
        }
        debug!(list_col, exploded_rows = rows.len(), "exploded list column");
        return Ok(rows);
    }

    let item_col = roles
        .item_col
        .as_deref()
        .ok_or_else(|| AnalysisError::schema_detection("no item column was detected"))?;
    let column = require(table, item_col)?;
    Ok(column
        .values()
        .iter()
        .enumerate()
        .filter_map(|(row, cell)| cell.to_text_non_blank().map(|item| (row, item)))
        .collect())
}

/// Builds one transaction per distinct key.
///
/// The key is the order column when present, else customer and calendar
/// date combined, else the customer alone, else the calendar date alone,
/// else fixed groups of `group_size` consecutive rows. An item repeated
/// within a basket counts once.
pub fn build_transactions(
    table: &RawTable,
    roles: &ColumnRoles,
    group_size: usize,
) -> Result<TransactionSet> {
    check_group_size(group_size)?;
    let item_column = roles
        .item_col
        .clone()
        .ok_or_else(|| AnalysisError::schema_detection("no item column was detected"))?;
    if table.is_empty() {
        return Err(AnalysisError::empty_dataset("the input table has no rows"));
    }

    let source = KeySource::resolve(table, roles, group_size)?;
    if let KeySource::RowGroup(size) = source {
        warn!(
            group_size = size,
            "no order, customer or date column; grouping consecutive rows into baskets"
        );
    }

    let mut baskets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut dropped_rows = 0usize;
    for (row, item) in item_rows(table, roles)? {
        match source.key(row) {
            Some(key) => {
                baskets.entry(key).or_default().insert(item);
            }
            None => dropped_rows += 1,
        }
    }

    let transactions: Vec<Transaction> = baskets
        .into_iter()
        .filter_map(|(key, items)| Transaction::new(key, items))
        .collect();
    if transactions.is_empty() {
        return Err(AnalysisError::empty_dataset(
            "no transactions with at least one item could be built",
        ));
    }

    let n_unique_items = transactions
        .iter()
        .flat_map(|tx| tx.items.iter())
        .collect::<BTreeSet<_>>()
        .len();
    let transaction_column = source.column_name();
    info!(
        item_column = %item_column,
        transaction_column = %transaction_column,
        transactions = transactions.len(),
        unique_items = n_unique_items,
        dropped_rows,
        "built transactions"
    );

    Ok(TransactionSet {
        transactions,
        item_column,
        transaction_column,
        n_unique_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_handles_runs_and_whitespace() {
        assert_eq!(split_item_list(" a ,, b ; |c"), vec!["a", "b", "c"]);
        assert!(split_item_list(" ;, ").is_empty());
    }

    #[test]
    fn test_row_group_keys() {
        let source = KeySource::RowGroup(5);
        assert_eq!(source.key(0).as_deref(), Some("0"));
        assert_eq!(source.key(4).as_deref(), Some("0"));
        assert_eq!(source.key(5).as_deref(), Some("1"));
        assert_eq!(source.column_name(), ROW_GROUP_KEY);
    }
}
