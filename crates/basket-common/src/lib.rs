//! Shared utilities for basket crates.
//!
//! Bridges Polars data into the basket model so callers that already hold
//! a `DataFrame` can run an analysis without going through CSV.

pub mod polars;

pub use polars::{CommonError, any_to_cell, any_to_string, table_from_dataframe};
