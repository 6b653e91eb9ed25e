//! Byte-level decoding of source files.
//!
//! UTF-8 is tried first (a leading BOM is dropped). Anything that is not
//! valid UTF-8 is decoded with a configurable single-byte fallback such as
//! `windows-1252` or `windows-874`. UTF-16 files are rejected.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Looks up an encoding by its WHATWG label, e.g. `latin1` or `tis-620`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Name of the UTF-16 variant whose BOM starts `bytes`, if any.
pub fn utf16_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xFE, ..] => Some("UTF-16 LE"),
        [0xFE, 0xFF, ..] => Some("UTF-16 BE"),
        _ => None,
    }
}

/// Decodes `bytes` as UTF-8, falling back to `fallback`.
///
/// Returns the text and the encoding that produced it. Callers must check
/// [`utf16_bom`] first.
pub fn decode_bytes<'a>(
    bytes: &'a [u8],
    fallback: &'static Encoding,
) -> (Cow<'a, str>, &'static Encoding) {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) => (Cow::Borrowed(text), UTF_8),
        Err(_) => {
            let (text, had_errors) = fallback.decode_without_bom_handling(body);
            if had_errors {
                tracing::warn!(
                    encoding = fallback.name(),
                    "input contained bytes the fallback encoding cannot map"
                );
            }
            (text, fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use encoding_rs::WINDOWS_1252;

    use super::*;

    #[test]
    fn test_utf8_with_bom() {
        let (text, encoding) = decode_bytes(b"\xEF\xBB\xBFitem\nmilk", WINDOWS_1252);
        assert_eq!(text, "item\nmilk");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn test_falls_back_for_invalid_utf8() {
        // 0xE9 is "é" in windows-1252 and invalid on its own in UTF-8.
        let (text, encoding) = decode_bytes(b"caf\xE9", WINDOWS_1252);
        assert_eq!(text, "café");
        assert_eq!(encoding, WINDOWS_1252);
    }

    #[test]
    fn test_detects_utf16_boms() {
        assert_eq!(utf16_bom(b"\xFF\xFEa\0"), Some("UTF-16 LE"));
        assert_eq!(utf16_bom(b"\xFE\xFF\0a"), Some("UTF-16 BE"));
        assert_eq!(utf16_bom(b"abc"), None);
    }

    #[test]
    fn test_resolves_labels() {
        assert_eq!(resolve_encoding("latin1").unwrap(), WINDOWS_1252);
        assert!(resolve_encoding("tis-620").is_ok());
        assert!(matches!(
            resolve_encoding("klingon"),
            Err(IngestError::UnknownEncoding { .. })
        ));
    }
}
