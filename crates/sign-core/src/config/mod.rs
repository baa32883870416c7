//! Configuration for the sign feature store.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod output_config;
pub mod sign_config;
pub mod storage_config;

pub use output_config::{OutputConfig, OutputFormat};
pub use sign_config::{CliOverrides, SignConfig};
pub use storage_config::StorageConfig;
