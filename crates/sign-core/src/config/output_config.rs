//! Output configuration for the presentation layer.

use serde::{Deserialize, Serialize};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parses `"text"` or `"json"`, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// `"text"` or `"json"`. Default: text.
    pub format: Option<String>,
}

impl OutputConfig {
    /// Returns the effective format, falling back to text for unknown values.
    pub fn effective_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .and_then(OutputFormat::parse)
            .unwrap_or_default()
    }
}
