//! Similarity errors.

use super::error_code::{self, SignErrorCode};
use super::StorageError;

/// Errors that can occur while comparing feature sets.
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    /// Both sides are empty, so neither metric is defined.
    #[error("Nothing to compare: both feature sets are empty")]
    NoFeatures,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SignErrorCode for SimilarityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoFeatures => error_code::NO_FEATURES,
            Self::Storage(e) => e.error_code(),
        }
    }
}
