//! Rendering of command results.

use serde_json::Value;
use sign_core::config::OutputFormat;

use crate::app::App;

/// Prints `text()` in text mode, `json` in JSON mode.
pub fn emit(app: &App, text: impl FnOnce() -> String, json: Value) {
    match app.format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{json:#}"),
    }
}
