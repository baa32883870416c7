//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STORAGE_DIR;

/// Where sign records live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage directory. Default: `sc_files`.
    pub dir: Option<String>,
}

impl StorageConfig {
    /// Returns the effective storage directory.
    pub fn effective_dir(&self) -> PathBuf {
        PathBuf::from(self.dir.as_deref().unwrap_or(DEFAULT_STORAGE_DIR))
    }
}
