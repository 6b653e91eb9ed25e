//! Utility functions for column name matching.

/// Normalizes a column name or synonym for comparison.
///
/// Lower-cases and keeps only alphanumeric characters, so `Order ID`,
/// `order_id` and `ORDER-ID` all become `orderid`. Non-Latin letters are
/// alphanumeric too and survive, which keeps Thai synonyms meaningful.
/// This departs from ASCII-only matching, where `idออเดอร์` reduces to `id`
/// and then matches any column containing `id` by containment.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}
