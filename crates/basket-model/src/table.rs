use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::error::ModelError;

/// A named column of untyped cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    name: String,
    values: Vec<CellValue>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn get(&self, row: usize) -> Option<&CellValue> {
        self.values.get(row)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when at least one non-blank cell holds text.
    ///
    /// This is the string-column test used when no item column can be
    /// found by name: numeric, date and all-blank columns never qualify.
    pub fn is_text_like(&self) -> bool {
        self.values
            .iter()
            .any(|value| value.is_text() && !value.is_blank())
    }

    /// Number of distinct non-blank values, compared by their text form.
    pub fn distinct_non_blank(&self) -> usize {
        self.values
            .iter()
            .filter_map(CellValue::to_text_non_blank)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// An ordered collection of equally long, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    columns: Vec<RawColumn>,
}

impl RawTable {
    /// Builds a table, rejecting duplicate names and ragged columns.
    pub fn new(columns: Vec<RawColumn>) -> Result<Self, ModelError> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(ModelError::DuplicateColumn(column.name().to_string()));
            }
        }
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(ragged) = columns.iter().find(|c| c.len() != expected) {
                return Err(ModelError::RaggedColumn {
                    column: ragged.name().to_string(),
                    expected,
                    found: ragged.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Builds a table from a header row and row-major cells.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, ModelError> {
        let width = headers.len();
        let mut values: Vec<Vec<CellValue>> = vec![Vec::with_capacity(rows.len()); width];
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ModelError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            for (column, cell) in values.iter_mut().zip(row) {
                column.push(cell);
            }
        }
        let columns = headers
            .into_iter()
            .zip(values)
            .map(|(name, values)| RawColumn::new(name, values))
            .collect();
        Self::new(columns)
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&RawColumn> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(RawColumn::name).collect()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, RawColumn::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Restricts the table to the selected columns, in selection order.
    ///
    /// A selector naming a column exactly picks that column; otherwise a
    /// non-negative integer is a zero-based position. Repeated selections
    /// keep the first. An empty selection returns the whole table.
    pub fn select<S: AsRef<str>>(&self, selectors: &[S]) -> Result<Self, ModelError> {
        if selectors.is_empty() {
            return Ok(self.clone());
        }
        let mut picked: Vec<usize> = Vec::with_capacity(selectors.len());
        for selector in selectors {
            let index = self.resolve(selector.as_ref().trim())?;
            if !picked.contains(&index) {
                picked.push(index);
            }
        }
        Ok(Self {
            columns: picked
                .into_iter()
                .map(|index| self.columns[index].clone())
                .collect(),
        })
    }

    fn resolve(&self, selector: &str) -> Result<usize, ModelError> {
        if let Some(index) = self.columns.iter().position(|c| c.name() == selector) {
            return Ok(index);
        }
        match selector.parse::<usize>() {
            Ok(index) if index < self.width() => Ok(index),
            Ok(index) => Err(ModelError::ColumnOutOfRange {
                index,
                width: self.width(),
            }),
            Err(_) => Err(ModelError::UnknownColumn(selector.to_string())),
        }
    }
}
