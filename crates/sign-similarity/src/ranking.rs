//! Rank every stored sign by similarity to one target sign.

use serde::Serialize;
use sign_core::errors::SimilarityError;
use sign_storage::SignStore;

use crate::metrics::{compare, Similarity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub sign: String,
    #[serde(flatten)]
    pub similarity: Similarity,
}

/// Compares `target` against every other stored sign.
///
/// Pairs with nothing to compare are skipped. Sorted by Dice coefficient,
/// highest first, ties broken by name.
pub fn rank_against(store: &SignStore, target: &str) -> Result<Vec<RankedMatch>, SimilarityError> {
    let target_features = store.read_sign(target)?;
    let mut matches = Vec::new();

    for sign in store.list_signs()? {
        if sign == target {
            continue;
        }
        let features = store.read_sign(&sign)?;
        match compare(&target_features, &features) {
            Ok(similarity) => matches.push(RankedMatch { sign, similarity }),
            Err(SimilarityError::NoFeatures) => {
                tracing::debug!(against = %target, sign = %sign, "skipping featureless pair");
            }
            Err(e) => return Err(e),
        }
    }

    matches.sort_by(|a, b| {
        b.similarity
            .dice
            .total_cmp(&a.similarity.dice)
            .then_with(|| a.sign.cmp(&b.sign))
    });
    Ok(matches)
}
