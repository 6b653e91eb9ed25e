//! CSV and JSON artifact writers.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReportError, Result};
use crate::report::{AnalysisReport, ReportItemset, ReportRule};

/// UTF-8 byte order mark, so spreadsheet tools pick the right encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const RULE_HEADER: [&str; 5] = ["Antecedents", "Consequents", "Support", "Confidence", "Lift"];
const ITEMSET_HEADER: [&str; 3] = ["Itemset", "Length", "Support"];

/// Which artifacts to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl ArtifactFormat {
    pub fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    pub fn writes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }
}

/// Output file locations for one analyzed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub rules_csv: PathBuf,
    pub itemsets_csv: PathBuf,
    pub report_json: PathBuf,
}

/// Derives artifact paths in `dir` from the input file stem.
pub fn artifact_paths(dir: &Path, stem: &str) -> ArtifactPaths {
    ArtifactPaths {
        rules_csv: dir.join(format!("association_rules_{stem}.csv")),
        itemsets_csv: dir.join(format!("frequent_itemsets_{stem}.csv")),
        report_json: dir.join(format!("basket_report_{stem}.json")),
    }
}

fn write_table<W, T>(mut writer: W, header: &[&str], rows: &[T]) -> csv::Result<()>
where
    W: Write,
    T: Serialize,
{
    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // Written explicitly so an empty table still has its header line.
    csv_writer.write_record(header)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes rules as CSV (with BOM) to any writer.
pub fn rules_csv_to_writer<W: Write>(writer: W, rules: &[ReportRule]) -> csv::Result<()> {
    write_table(writer, &RULE_HEADER, rules)
}

/// Writes frequent itemsets as CSV (with BOM) to any writer.
pub fn itemsets_csv_to_writer<W: Write>(writer: W, itemsets: &[ReportItemset]) -> csv::Result<()> {
    write_table(writer, &ITEMSET_HEADER, itemsets)
}

/// Writes the report as pretty JSON followed by a newline.
pub fn report_json_to_writer<W: Write>(mut writer: W, report: &AnalysisReport) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

pub fn write_rules_csv(path: &Path, rules: &[ReportRule]) -> Result<()> {
    let writer = create(path)?;
    rules_csv_to_writer(writer, rules).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_itemsets_csv(path: &Path, itemsets: &[ReportItemset]) -> Result<()> {
    let writer = create(path)?;
    itemsets_csv_to_writer(writer, itemsets).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_report_json(path: &Path, report: &AnalysisReport) -> Result<()> {
    let writer = create(path)?;
    report_json_to_writer(writer, report).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the selected artifacts and returns the paths written.
pub fn write_artifacts(
    dir: &Path,
    stem: &str,
    report: &AnalysisReport,
    format: ArtifactFormat,
) -> Result<Vec<PathBuf>> {
    let paths = artifact_paths(dir, stem);
    let mut written = Vec::new();

    if format.writes_csv() {
        write_rules_csv(&paths.rules_csv, &report.rules_table)?;
        written.push(paths.rules_csv);
        write_itemsets_csv(&paths.itemsets_csv, &report.frequent_itemsets_table)?;
        written.push(paths.itemsets_csv);
    }
    if format.writes_json() {
        write_report_json(&paths.report_json, report)?;
        written.push(paths.report_json);
    }

    info!(
        dir = %dir.display(),
        files = written.len(),
        rules = report.total_rules,
        "artifacts written"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rules_still_have_header() {
        let mut buffer = Vec::new();
        rules_csv_to_writer(&mut buffer, &[]).unwrap();
        assert!(buffer.starts_with(UTF8_BOM));
        let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "Antecedents,Consequents,Support,Confidence,Lift\n");
    }

    #[test]
    fn test_paths_follow_input_stem() {
        let paths = artifact_paths(Path::new("out"), "sales");
        assert_eq!(paths.rules_csv, Path::new("out/association_rules_sales.csv"));
        assert_eq!(paths.itemsets_csv, Path::new("out/frequent_itemsets_sales.csv"));
        assert_eq!(paths.report_json, Path::new("out/basket_report_sales.json"));
    }

    #[test]
    fn test_format_selection() {
        assert!(ArtifactFormat::Both.writes_csv() && ArtifactFormat::Both.writes_json());
        assert!(!ArtifactFormat::Json.writes_csv());
        assert!(!ArtifactFormat::Csv.writes_json());
    }
}
