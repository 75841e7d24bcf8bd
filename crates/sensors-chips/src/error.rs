//! Error types for catalog lookups

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, ChipError>;

/// Errors returned by catalog lookups
///
/// Both kinds are caller errors: the catalog itself is static and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipError {
    /// No chip model is registered under this prefix
    #[error("Unknown chip prefix: {prefix:?}")]
    UnknownChip {
        /// Prefix that was requested
        prefix: String,
    },

    /// The chip exists but does not declare this feature
    #[error("Chip {prefix:?} has no feature {feature:?}")]
    UnknownFeature {
        /// Prefix of the chip that was searched
        prefix: String,
        /// Feature name that was requested
        feature: String,
    },
}

impl ChipError {
    /// Create an unknown chip error
    pub fn unknown_chip(prefix: impl Into<String>) -> Self {
        Self::UnknownChip {
            prefix: prefix.into(),
        }
    }

    /// Create an unknown feature error
    pub fn unknown_feature(prefix: impl Into<String>, feature: impl Into<String>) -> Self {
        Self::UnknownFeature {
            prefix: prefix.into(),
            feature: feature.into(),
        }
    }
}
