//! Column role detection by name matching.
//!
//! Each role has a synonym list. A column matches a list when its
//! normalized name equals a normalized synonym (first pass over all
//! columns) or, failing that, when either name contains the other (second
//! pass). The first matching column in table order wins.

use basket_model::{ColumnRoles, EXPLODED_ITEM_COLUMN, RawTable};
use tracing::{debug, warn};

use crate::synonyms::SynonymLists;
use crate::utils::normalize_name;

/// A synonym list prepared for matching.
#[derive(Debug, Clone)]
struct Matcher {
    candidates: Vec<String>,
}

impl Matcher {
    fn new(synonyms: &[String]) -> Self {
        let mut candidates: Vec<String> = synonyms
            .iter()
            .map(|s| normalize_name(s))
            .filter(|s| !s.is_empty())
            .collect();
        candidates.dedup();
        Self { candidates }
    }

    fn find<'a>(&self, columns: &[&'a str]) -> Option<&'a str> {
        let normalized: Vec<String> = columns.iter().map(|c| normalize_name(c)).collect();

        let exact = columns
            .iter()
            .zip(&normalized)
            .find(|(_, norm)| !norm.is_empty() && self.candidates.contains(norm));
        if let Some((column, _)) = exact {
            return Some(column);
        }

        columns
            .iter()
            .zip(&normalized)
            .find(|(_, norm)| {
                !norm.is_empty()
                    && self
                        .candidates
                        .iter()
                        .any(|c| norm.contains(c.as_str()) || c.contains(norm.as_str()))
            })
            .map(|(column, _)| *column)
    }
}

/// Finds the first column whose name matches one of `synonyms`.
pub fn guess_column<'a>(columns: &[&'a str], synonyms: &[String]) -> Option<&'a str> {
    Matcher::new(synonyms).find(columns)
}

/// Infers column roles from names and, for items, from value shapes.
#[derive(Debug, Clone)]
pub struct RoleDetector {
    item: Matcher,
    order: Matcher,
    customer: Matcher,
    date: Matcher,
    list_format: Matcher,
}

impl Default for RoleDetector {
    fn default() -> Self {
        Self::new(&SynonymLists::default())
    }
}

impl RoleDetector {
    pub fn new(synonyms: &SynonymLists) -> Self {
        Self {
            item: Matcher::new(&synonyms.item),
            order: Matcher::new(&synonyms.order),
            customer: Matcher::new(&synonyms.customer),
            date: Matcher::new(&synonyms.date),
            list_format: Matcher::new(&synonyms.list_format),
        }
    }

    /// Detects the roles of `table`'s columns.
    ///
    /// A list-format column together with an order column switches to list
    /// mode. Otherwise, when no item column matches by name, the text column
    /// with the most distinct non-blank values is used. The item role stays
    /// `None` when the table has no text column at all.
    pub fn detect(&self, table: &RawTable) -> ColumnRoles {
        let columns = table.column_names();
        let owned = |name: Option<&str>| name.map(str::to_string);

        let list_col = self.list_format.find(&columns);
        let item_col = self.item.find(&columns);
        let order_col = owned(self.order.find(&columns));
        let customer_col = owned(self.customer.find(&columns));
        let date_col = owned(self.date.find(&columns));

        if let (Some(list_col), Some(_)) = (list_col, order_col.as_ref()) {
            debug!(list_col, "list-format column found, exploding items");
            return ColumnRoles {
                item_col: Some(EXPLODED_ITEM_COLUMN.to_string()),
                order_col,
                customer_col,
                date_col,
                list_col: Some(list_col.to_string()),
                used_list_mode: true,
            };
        }

        let item_col = match item_col {
            Some(col) => Some(col.to_string()),
            None => {
                let fallback = most_distinct_text_column(table);
                match &fallback {
                    Some(col) => warn!(
                        item_col = %col,
                        "no item column matched by name, using the text column with most distinct values"
                    ),
                    None => warn!("no item column matched by name and no text column present"),
                }
                fallback
            }
        };

        ColumnRoles {
            item_col,
            order_col,
            customer_col,
            date_col,
            list_col: None,
            used_list_mode: false,
        }
    }
}

/// Detects roles with the given synonym lists.
pub fn detect_roles(table: &RawTable, synonyms: &SynonymLists) -> ColumnRoles {
    RoleDetector::new(synonyms).detect(table)
}

/// The text-like column with the highest distinct count; first wins ties.
fn most_distinct_text_column(table: &RawTable) -> Option<String> {
    let mut best: Option<(usize, &str)> = None;
    for column in table.columns().iter().filter(|c| c.is_text_like()) {
        let distinct = column.distinct_non_blank();
        if best.is_none_or(|(count, _)| distinct > count) {
            best = Some((distinct, column.name()));
        }
    }
    best.map(|(_, name)| name.to_string())
}
