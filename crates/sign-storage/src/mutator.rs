//! Feature mutator: add a feature or merge another sign, remove a feature.

use sign_core::constants::FEATURE_DELIMITER;
use sign_core::errors::StorageError;
use sign_core::{FeatureInput, FeatureSetState};

use crate::codec;
use crate::store::{validate_name, SignStore};

/// Adds to `target` whatever `input` denotes.
///
/// `cat.txt` and `cat.sign` both merge the full record of sign `cat`
/// verbatim; any other text is appended as a single feature.
pub fn add_feature(store: &SignStore, target: &str, input: &str) -> Result<(), StorageError> {
    add_input(store, target, &FeatureInput::parse(input))
}

/// Same as [`add_feature`] for an already classified input.
pub fn add_input(
    store: &SignStore,
    target: &str,
    input: &FeatureInput,
) -> Result<(), StorageError> {
    validate_name(target)?;

    let content = match input {
        FeatureInput::Literal(feature) => {
            codec::validate_feature(feature)?;
            codec::encode(&[feature])
        }
        FeatureInput::SignFileRef(source) | FeatureInput::SignRef(source) => {
            // Merged verbatim; only a missing final `;` is supplied.
            let mut raw = store.read_raw(source)?;
            if !raw.is_empty() && !raw.ends_with(FEATURE_DELIMITER) {
                raw.push(FEATURE_DELIMITER);
            }
            raw
        }
    };

    store.append_raw(target, &content)?;
    tracing::info!(sign = %target, input = ?input, bytes = content.len(), "feature added");
    Ok(())
}

/// Removes the first occurrence of `feature` from `target` and rewrites the
/// record. Returns the state left behind; `Empty` is not an error.
pub fn remove_feature(
    store: &SignStore,
    target: &str,
    feature: &str,
) -> Result<FeatureSetState, StorageError> {
    let mut features = store.read_sign(target)?;
    let position = features
        .iter()
        .position(|f| f == feature)
        .ok_or_else(|| StorageError::FeatureNotFound {
            sign: target.to_string(),
            feature: feature.to_string(),
        })?;
    features.remove(position);

    store.write_features(target, &features)?;
    let state = FeatureSetState::from_count(features.len());
    tracing::info!(sign = %target, feature = %feature, remaining = state.len(), "feature removed");
    Ok(state)
}
