//! Header normalization and delimiter sniffing.

use std::collections::{BTreeMap, BTreeSet};

use csv::ReaderBuilder;

/// Delimiters tried when none is configured, in tie-break order.
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Trims a header cell and strips a stray BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Makes header names unique.
///
/// Empty names become `Unnamed: <index>`. Repeats of a name get `.1`,
/// `.2`, ... appended; the first occurrence keeps the bare name.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut suffixes: BTreeMap<String, usize> = BTreeMap::new();
    let mut out = Vec::with_capacity(headers.len());

    for (index, raw) in headers.into_iter().enumerate() {
        let name = normalize_header(&raw);
        let name = if name.is_empty() {
            format!("Unnamed: {index}")
        } else {
            name
        };
        if used.insert(name.clone()) {
            out.push(name);
            continue;
        }
        let suffix = suffixes.entry(name.clone()).or_insert(0);
        loop {
            *suffix += 1;
            let candidate = format!("{name}.{suffix}");
            if used.insert(candidate.clone()) {
                out.push(candidate);
                break;
            }
        }
    }
    out
}

fn field_count(line: &str, delimiter: u8) -> usize {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(|record| record.ok())
        .map_or(0, |record| record.len())
}

/// Picks the delimiter that splits the first non-blank line into the most
/// fields. Earlier candidates win ties; `,` when nothing splits.
pub fn sniff_delimiter(text: &str) -> u8 {
    let Some(line) = text.lines().find(|line| !line.trim().is_empty()) else {
        return b',';
    };
    let mut best = (b',', 1usize);
    for delimiter in DELIMITER_CANDIDATES {
        let fields = field_count(line, delimiter);
        if fields > best.1 {
            best = (delimiter, fields);
        }
    }
    best.0
}
