use std::path::PathBuf;

use basket_report::AnalysisReport;

/// Outcome of one `analyze` run.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub report: AnalysisReport,
    /// Artifacts written, in write order. Empty on a dry run.
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}
