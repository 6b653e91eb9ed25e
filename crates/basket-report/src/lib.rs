//! Presentation of market basket analysis results.
//!
//! Turns an [`basket_model::AnalysisOutput`] into a JSON-safe
//! [`AnalysisReport`] and writes it as CSV and JSON artifacts.

#![deny(unsafe_code)]

pub mod error;
pub mod report;
pub mod writer;

pub use error::{ReportError, Result};
pub use report::{
    AnalysisReport, REPORT_KIND, ReportItemset, ReportMeta, ReportRule, SINGLE_ITEM_LIMIT, round6,
};
pub use writer::{
    ArtifactFormat, ArtifactPaths, artifact_paths, itemsets_csv_to_writer, report_json_to_writer,
    rules_csv_to_writer, write_artifacts, write_itemsets_csv, write_report_json, write_rules_csv,
};
