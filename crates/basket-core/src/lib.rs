//! Market basket analysis engine.
//!
//! [`analyze`] runs the linear pipeline over a [`RawTable`]:
//!
//! 1. column role detection (via `basket-map`),
//! 2. transaction building ([`transactions`]),
//! 3. Apriori frequent itemset mining ([`apriori`]),
//! 4. association rule generation ([`rules`]).
//!
//! Each stage is also exposed on its own. Everything is synchronous and
//! in-memory; nothing persists between calls.
//!
//! [`RawTable`]: basket_model::RawTable

#![deny(unsafe_code)]

pub mod apriori;
pub mod config;
pub mod datetime;
pub mod options;
pub mod pipeline;
pub mod rules;
pub mod transactions;

pub use apriori::{generate_candidates, mine};
pub use config::{ConfigError, load_options, options_from_toml_str};
pub use datetime::{normalize_calendar_date, parse_calendar_date};
pub use options::{
    AnalysisOptions, DEFAULT_FALLBACK_GROUP_SIZE, DEFAULT_MIN_LIFT, DEFAULT_MIN_SUPPORT,
};
pub use pipeline::{BasketAnalysis, analyze};
pub use rules::{generate_rules, rank_rules};
pub use transactions::{LIST_SEPARATORS, TransactionSet, build_transactions, split_item_list};
