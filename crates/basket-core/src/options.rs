//! Thresholds and heuristics that parameterize an analysis.

use basket_map::SynonymLists;
use basket_model::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.001;
pub const DEFAULT_MIN_LIFT: f64 = 1.0;
pub const DEFAULT_FALLBACK_GROUP_SIZE: usize = 5;

/// Options for one analysis invocation.
///
/// Every field may be omitted when deserializing; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Minimum fraction of transactions an itemset must appear in.
    /// Must lie in `(0, 1]`. Default: 0.001.
    pub min_support: f64,

    /// Minimum lift a rule must reach. Must be `>= 0`. Default: 1.0.
    pub min_lift: f64,

    /// Rows per synthetic basket when no order, customer or date column
    /// exists. This grouping has no semantic basis and is a last resort.
    /// Default: 5.
    pub fallback_group_size: usize,

    /// Column-name vocabularies used for role detection.
    pub synonyms: SynonymLists,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_lift: DEFAULT_MIN_LIFT,
            fallback_group_size: DEFAULT_FALLBACK_GROUP_SIZE,
            synonyms: SynonymLists::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = min_lift;
        self
    }

    pub fn with_fallback_group_size(mut self, size: usize) -> Self {
        self.fallback_group_size = size;
        self
    }

    pub fn with_synonyms(mut self, synonyms: SynonymLists) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Checks every threshold against its valid domain.
    pub fn validate(&self) -> Result<()> {
        check_min_support(self.min_support)?;
        check_min_lift(self.min_lift)?;
        check_group_size(self.fallback_group_size)
    }
}

pub(crate) fn check_min_support(value: f64) -> Result<()> {
    // Written so that NaN fails too.
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter {
            name: "min_support",
            value: value.to_string(),
            expected: "a number in (0, 1]",
        })
    }
}

pub(crate) fn check_min_lift(value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter {
            name: "min_lift",
            value: value.to_string(),
            expected: "a number >= 0",
        })
    }
}

pub(crate) fn check_group_size(value: usize) -> Result<()> {
    if value == 0 {
        return Err(AnalysisError::InvalidParameter {
            name: "fallback_group_size",
            value: value.to_string(),
            expected: "a positive integer",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = AnalysisOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.fallback_group_size, 5);
    }

    #[test]
    fn test_support_domain() {
        assert!(check_min_support(1.0).is_ok());
        assert!(check_min_support(0.0).is_err());
        assert!(check_min_support(1.5).is_err());
        assert!(check_min_support(f64::NAN).is_err());
    }

    #[test]
    fn test_lift_domain() {
        assert!(check_min_lift(0.0).is_ok());
        assert!(check_min_lift(-0.1).is_err());
        assert!(check_min_lift(f64::NAN).is_err());
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = AnalysisOptions::new()
            .with_min_support(0.2)
            .with_min_lift(1.5)
            .with_fallback_group_size(3);
        assert_eq!(options.min_support, 0.2);
        assert_eq!(options.min_lift, 1.5);
        assert_eq!(options.fallback_group_size, 3);
    }

    #[test]
    fn test_zero_group_size_is_rejected() {
        let err = AnalysisOptions::new()
            .with_fallback_group_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InvalidParameter {
                name: "fallback_group_size",
                ..
            }
        ));
    }
}
