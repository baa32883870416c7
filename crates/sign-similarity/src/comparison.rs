//! Store-backed comparison of two named signs.

use serde::Serialize;
use sign_core::errors::SimilarityError;
use sign_storage::SignStore;

use crate::metrics::{compare, Similarity};

/// Result of comparing two stored signs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    #[serde(flatten)]
    pub similarity: Similarity,
}

/// Reads both records and compares their feature sets.
pub fn compare_signs(
    store: &SignStore,
    left: &str,
    right: &str,
) -> Result<Comparison, SimilarityError> {
    let features_left = store.read_sign(left)?;
    let features_right = store.read_sign(right)?;
    let similarity = compare(&features_left, &features_right)?;
    tracing::debug!(
        left = %left,
        right = %right,
        dice = similarity.dice,
        jaccard = similarity.jaccard,
        "signs compared"
    );
    Ok(Comparison {
        left: left.to_string(),
        right: right.to_string(),
        similarity,
    })
}
