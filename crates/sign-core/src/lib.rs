//! Core types, errors, configuration, and tracing for the sign feature store.
//!
//! A sign is a name (the signifier) plus an ordered list of free-text
//! features, persisted as one flat `;`-terminated text record per sign.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::SignConfig;
pub use errors::{ConfigError, SignError, SignErrorCode, SimilarityError, StorageError};
pub use types::{FeatureInput, FeatureSetState};
