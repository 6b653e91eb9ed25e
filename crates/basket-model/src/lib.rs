//! Data model for market basket analysis.
//!
//! Every entity here is derived and immutable once produced, and is scoped
//! to a single analysis: a [`RawTable`] goes in, [`Transaction`]s,
//! [`FrequentItemsets`] and [`Rule`]s come out, and [`AnalysisOutput`] is
//! what callers render.

#![deny(unsafe_code)]

pub mod cell;
pub mod error;
pub mod itemset;
pub mod output;
pub mod roles;
pub mod rule;
pub mod table;
pub mod transaction;

pub use cell::{CellValue, format_numeric};
pub use error::{AnalysisError, ModelError, Result};
pub use itemset::{FrequentItemsets, Itemset};
pub use output::{AnalysisMeta, AnalysisOutput, Heuristics, ItemsetRow, RuleRow};
pub use roles::{
    CUSTOMER_DATE_KEY, ColumnRoles, DATE_KEY, EXPLODED_ITEM_COLUMN, ROW_GROUP_KEY,
};
pub use rule::Rule;
pub use table::{RawColumn, RawTable};
pub use transaction::Transaction;
