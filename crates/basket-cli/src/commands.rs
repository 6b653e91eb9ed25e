use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use basket_core::{AnalysisOptions, analyze, load_options};
use basket_ingest::{IngestOptions, read_raw_table};
use basket_map::{SynonymLists, load_synonyms};
use basket_report::{AnalysisReport, write_artifacts};
use tracing::{info, info_span};

use crate::cli::{AnalyzeArgs, SynonymsArgs};
use crate::types::AnalyzeResult;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let span = info_span!("basket", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = resolve_options(args)?;
    options.validate().context("invalid analysis options")?;

    let table = read_raw_table(&args.input, &ingest_options(args))
        .with_context(|| format!("read {}", args.input.display()))?;
    let table = if args.columns.is_empty() {
        table
    } else {
        let selected = table.select(&args.columns).context("select columns")?;
        info!(columns = ?selected.column_names(), "restricted analysis to selected columns");
        selected
    };
    let analysis = analyze(&table, &options)
        .with_context(|| format!("analyze {}", args.input.display()))?;
    let report = AnalysisReport::new(&analysis.to_output(), options.min_support, options.min_lift);

    let output_dir = output_dir(args);
    let written = if args.dry_run {
        info!("dry run, skipping artifacts");
        Vec::new()
    } else {
        let stem = file_stem(&args.input);
        write_artifacts(&output_dir, &stem, &report, args.format.into())
            .context("write artifacts")?
    };

    info!(
        rules = report.total_rules,
        files = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "done"
    );
    Ok(AnalyzeResult {
        input: args.input.clone(),
        output_dir,
        report,
        written,
        dry_run: args.dry_run,
    })
}

/// Loads the synonym lists `synonyms` would use.
pub fn run_synonyms(args: &SynonymsArgs) -> Result<SynonymLists> {
    match &args.synonyms {
        Some(path) => load_synonyms(path).context("load synonyms"),
        None => Ok(SynonymLists::default()),
    }
}

/// Options from the config file (or defaults), then the synonym file,
/// then individual flags. Later sources win.
pub fn resolve_options(args: &AnalyzeArgs) -> Result<AnalysisOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path).context("load config")?,
        None => AnalysisOptions::default(),
    };
    if let Some(path) = &args.synonyms {
        options = options.with_synonyms(load_synonyms(path).context("load synonyms")?);
    }
    if let Some(min_support) = args.min_support {
        options = options.with_min_support(min_support);
    }
    if let Some(min_lift) = args.min_lift {
        options = options.with_min_lift(min_lift);
    }
    if let Some(size) = args.group_size {
        options = options.with_fallback_group_size(size);
    }
    Ok(options)
}

fn ingest_options(args: &AnalyzeArgs) -> IngestOptions {
    let mut options = IngestOptions::default();
    if let Some(delimiter) = args.delimiter {
        options = options.with_delimiter(delimiter);
    }
    if let Some(label) = &args.encoding {
        options = options.with_fallback_encoding(label.clone());
    }
    options
}

fn output_dir(args: &AnalyzeArgs) -> PathBuf {
    if let Some(dir) = &args.output_dir {
        return dir.clone();
    }
    match args.input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_falls_back() {
        assert_eq!(file_stem(Path::new("data/sales.csv")), "sales");
        assert_eq!(file_stem(Path::new("/")), "input");
    }
}
