//! Error handling for the sign feature store.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod similarity_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::SignErrorCode;
pub use similarity_error::SimilarityError;
pub use storage_error::StorageError;

/// Top-level error for callers driving several subsystems at once.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SignErrorCode for SignError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Similarity(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
