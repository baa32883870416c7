//! Storage errors for sign records.

use std::path::Path;

use super::error_code::{self, SignErrorCode};

/// Errors raised while reading or writing sign records.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid sign name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid feature {feature:?}: {reason}")]
    InvalidFeature { feature: String, reason: String },

    #[error("Sign not found: {name}")]
    NotFound { name: String },

    #[error("Feature {feature:?} not found on sign {sign}")]
    FeatureNotFound { sign: String, feature: String },

    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },
}

impl StorageError {
    /// Wraps an I/O failure that is not an absence.
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// True for both "sign missing" and "feature missing".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::FeatureNotFound { .. })
    }
}

impl SignErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => error_code::INVALID_NAME,
            Self::InvalidFeature { .. } => error_code::INVALID_FEATURE,
            Self::NotFound { .. } | Self::FeatureNotFound { .. } => error_code::NOT_FOUND,
            Self::Io { .. } => error_code::STORAGE_ERROR,
        }
    }
}
