//! Column-name vocabularies for each semantic role.
//!
//! The built-in lists cover English and Thai point-of-sale exports. They
//! are plain configuration: load a TOML file to replace any list without
//! touching the detection algorithm.
//!
//! ```toml
//! item = ["artikel", "produkt"]
//! order = ["bestellnummer", "beleg"]
//! ```
//!
//! Lists omitted from the file keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymError};

const ITEM: &[&str] = &[
    "itemdescription",
    "item",
    "items",
    "product",
    "productname",
    "product_name",
    "sku",
    "description",
    "product title",
    "ชื่อสินค้า",
    "สินค้า",
    "ชื่อ",
    "รายการ",
    "รายการสินค้า",
    "tag",
    "tags",
    "label",
    "category",
    "categories",
];

const ORDER: &[&str] = &[
    "order_id",
    "orderid",
    "invoice",
    "invoiceno",
    "invoicenumber",
    "receipt",
    "billno",
    "transaction",
    "transaction_id",
    "basketid",
    "basket",
    "single_transaction",
    "เลขที่ใบเสร็จ",
    "เลขที่คำสั่งซื้อ",
    "order",
    "orderno",
    "order no",
    "idออเดอร์",
];

const CUSTOMER: &[&str] = &[
    "membernumber",
    "member",
    "customer",
    "customerid",
    "customer_id",
    "userid",
    "buyer",
    "user",
    "client",
    "account",
    "เบอร์",
    "เบอร์โทร",
    "phone",
    "โทรศัพท์",
    "email",
    "อีเมล",
];

const DATE: &[&str] = &[
    "date",
    "datetime",
    "timestamp",
    "time",
    "created_at",
    "order_date",
    "invoicedate",
    "วันที่",
    "วันเวลา",
];

const LIST_FORMAT: &[&str] = &[
    "items",
    "order_items",
    "รายการสินค้า",
    "products",
    "tags",
    "tag",
    "categories",
    "category",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Synonym lists for the five column roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymLists {
    /// Names of columns holding one item per row.
    pub item: Vec<String>,
    /// Names of order / receipt / basket identifier columns.
    pub order: Vec<String>,
    /// Names of customer / member identifier columns.
    pub customer: Vec<String>,
    /// Names of date or timestamp columns.
    pub date: Vec<String>,
    /// Names of columns holding delimiter-joined item lists.
    pub list_format: Vec<String>,
}

impl Default for SynonymLists {
    fn default() -> Self {
        Self {
            item: owned(ITEM),
            order: owned(ORDER),
            customer: owned(CUSTOMER),
            date: owned(DATE),
            list_format: owned(LIST_FORMAT),
        }
    }
}

impl SynonymLists {
    /// Parses a TOML document; missing lists fall back to the defaults.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Appends the entries of `other` that are not already present.
    #[must_use]
    pub fn extended_with(mut self, other: &Self) -> Self {
        fn merge(into: &mut Vec<String>, from: &[String]) {
            for entry in from {
                if !into.contains(entry) {
                    into.push(entry.clone());
                }
            }
        }
        merge(&mut self.item, &other.item);
        merge(&mut self.order, &other.order);
        merge(&mut self.customer, &other.customer);
        merge(&mut self.date, &other.date);
        merge(&mut self.list_format, &other.list_format);
        self
    }

    /// Role name paired with its list, in detection order.
    pub fn roles(&self) -> [(&'static str, &[String]); 5] {
        [
            ("list_format", self.list_format.as_slice()),
            ("item", self.item.as_slice()),
            ("order", self.order.as_slice()),
            ("customer", self.customer.as_slice()),
            ("date", self.date.as_slice()),
        ]
    }
}

/// Loads synonym lists from a TOML file.
pub fn load_synonyms(path: &Path) -> Result<SynonymLists> {
    let contents = std::fs::read_to_string(path).map_err(|source| SynonymError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SynonymLists::from_toml_str(&contents).map_err(|source| SynonymError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_cover_every_role() {
        let lists = SynonymLists::default();
        for (role, list) in lists.roles() {
            assert!(!list.is_empty(), "{role} synonyms are empty");
        }
        assert!(lists.order.contains(&"invoice".to_string()));
        assert!(lists.list_format.contains(&"tags".to_string()));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let lists = SynonymLists::from_toml_str("item = [\"artikel\"]\n").unwrap();
        assert_eq!(lists.item, vec!["artikel".to_string()]);
        assert_eq!(lists.order, SynonymLists::default().order);
    }

    #[test]
    fn test_extended_with_skips_duplicates() {
        let extra = SynonymLists {
            item: vec!["artikel".to_string(), "sku".to_string()],
            order: vec![],
            customer: vec![],
            date: vec![],
            list_format: vec![],
        };
        let lists = SynonymLists::default().extended_with(&extra);
        let defaults = SynonymLists::default();
        assert_eq!(lists.item.len(), defaults.item.len() + 1);
        assert_eq!(lists.item.last().map(String::as_str), Some("artikel"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "order = [\"beleg\"]").unwrap();
        let lists = load_synonyms(file.path()).unwrap();
        assert_eq!(lists.order, vec!["beleg".to_string()]);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "order = 3").unwrap();
        let result = load_synonyms(file.path());
        assert!(matches!(result, Err(SynonymError::Toml { .. })));
    }
}
