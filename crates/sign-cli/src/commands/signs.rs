//! `list`, `new`, `show`.

use serde_json::json;
use sign_core::{FeatureSetState, SignError};

use crate::app::App;
use crate::output::emit;

pub fn list(app: &App) -> Result<(), SignError> {
    let signs = app.store.list_signs()?;
    emit(
        app,
        || {
            if signs.is_empty() {
                "There are no signs saved!".to_string()
            } else {
                signs.join("\n")
            }
        },
        json!({ "signs": signs }),
    );
    Ok(())
}

pub fn new(app: &App, name: &str) -> Result<(), SignError> {
    app.store.create_sign(name)?;
    emit(
        app,
        || format!("Saved sign \"{name}\""),
        json!({ "sign": name, "saved": true }),
    );
    Ok(())
}

pub fn show(app: &App, name: &str) -> Result<(), SignError> {
    let features = app.store.read_sign(name)?;
    let state = FeatureSetState::from_count(features.len());
    emit(
        app,
        || {
            if state.is_empty() {
                format!("There are no features saved for the sign \"{name}\"!")
            } else {
                features.join("\n")
            }
        },
        json!({ "sign": name, "features": features, "state": state }),
    );
    Ok(())
}
