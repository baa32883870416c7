//! Application state handed to every command.

use sign_core::config::{OutputFormat, SignConfig};
use sign_storage::SignStore;

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct App {
    pub store: SignStore,
    pub format: OutputFormat,
}

impl App {
    pub fn new(config: &SignConfig) -> Self {
        Self {
            store: SignStore::from_config(config),
            format: config.output.effective_format(),
        }
    }
}
