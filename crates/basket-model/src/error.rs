use thiserror::Error;

/// Failures that abort a basket analysis.
///
/// There is no partial-success mode: any of these ends the invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// No item column could be resolved, directly or by fallback.
    #[error("could not detect an item column: {reason}")]
    SchemaDetection { reason: String },

    /// The input table, or the transactions derived from it, are empty.
    #[error("dataset is empty: {reason}")]
    EmptyDataset { reason: String },

    /// A threshold lies outside its valid domain.
    #[error("invalid parameter {name}={value}: expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl AnalysisError {
    pub fn schema_detection(reason: impl Into<String>) -> Self {
        Self::SchemaDetection {
            reason: reason.into(),
        }
    }

    pub fn empty_dataset(reason: impl Into<String>) -> Self {
        Self::EmptyDataset {
            reason: reason.into(),
        }
    }
}

/// Invariant violations when assembling a [`RawTable`](crate::RawTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("column '{column}' has {found} values, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("selected column not found: {0}")]
    UnknownColumn(String),

    #[error("selected column index {index} is out of range, the table has {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
