//! `add`, `remove`.

use serde_json::json;
use sign_core::{FeatureInput, FeatureSetState, SignError};

use crate::app::App;
use crate::output::emit;

pub fn add(app: &App, sign: &str, input: &str) -> Result<(), SignError> {
    let parsed = FeatureInput::parse(input);
    sign_storage::add_input(&app.store, sign, &parsed)?;
    let state = app.store.feature_state(sign)?;

    let added = match parsed.referenced_sign() {
        Some(source) => format!("features of \"{source}\""),
        None => format!("\"{input}\""),
    };
    emit(
        app,
        || format!("Added {added} to \"{sign}\" ({} features)", state.len()),
        json!({ "sign": sign, "input": input, "state": state }),
    );
    Ok(())
}

pub fn remove(app: &App, sign: &str, feature: &str) -> Result<(), SignError> {
    let state = sign_storage::remove_feature(&app.store, sign, feature)?;
    emit(
        app,
        || match state {
            FeatureSetState::Empty => format!(
                "Removed \"{feature}\" from \"{sign}\"; there are no features left"
            ),
            FeatureSetState::NonEmpty(n) => {
                format!("Removed \"{feature}\" from \"{sign}\" ({n} features left)")
            }
        },
        json!({ "sign": sign, "removed": feature, "state": state }),
    );
    Ok(())
}
