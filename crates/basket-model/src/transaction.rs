use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One basket: a transaction key and the distinct items bought in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub items: BTreeSet<String>,
}

impl Transaction {
    /// Builds a transaction from raw item strings.
    ///
    /// Items are trimmed, blanks dropped and duplicates collapsed. Returns
    /// `None` when nothing survives.
    pub fn new<I, S>(id: impl Into<String>, items: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: BTreeSet<String> = items
            .into_iter()
            .map(|item| item.as_ref().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            items,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}
