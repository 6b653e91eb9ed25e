//! Column role detection for schema-less purchase tables.
//!
//! Column names are matched against overridable synonym lists to find the
//! item, order, customer, date and list-format columns of a [`RawTable`].
//!
//! [`RawTable`]: basket_model::RawTable

#![deny(unsafe_code)]

pub mod detect;
pub mod error;
pub mod synonyms;
pub mod utils;

pub use detect::{RoleDetector, detect_roles, guess_column};
pub use error::{Result, SynonymError};
pub use synonyms::{SynonymLists, load_synonyms};
pub use utils::normalize_name;
