//! Dice coefficient and Jaccard index over feature sets.
//!
//! With `x = |A ∩ B|` and `y = |A| + |B|`:
//! - Dice    = 2x / y
//! - Jaccard = x / (y - x) = |A ∩ B| / |A ∪ B|

use serde::Serialize;
use sign_core::errors::SimilarityError;
use sign_core::types::FxHashSet;

/// Both metrics plus the counts they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    pub dice: f64,
    pub jaccard: f64,
    /// `|A ∩ B|`
    pub shared: usize,
    /// `|A| + |B|`
    pub combined: usize,
}

/// Compares two feature lists as sets.
///
/// Fails with `NoFeatures` only when both sets are empty. One empty side
/// yields `0.0` for both metrics.
pub fn compare<S: AsRef<str>>(
    features_a: &[S],
    features_b: &[S],
) -> Result<Similarity, SimilarityError> {
    let a: FxHashSet<&str> = features_a.iter().map(|f| f.as_ref()).collect();
    let b: FxHashSet<&str> = features_b.iter().map(|f| f.as_ref()).collect();

    let shared = a.intersection(&b).count();
    let combined = a.len() + b.len();
    if combined == 0 {
        return Err(SimilarityError::NoFeatures);
    }

    // combined - shared = |A ∪ B| > 0 whenever combined > 0.
    let dice = (2 * shared) as f64 / combined as f64;
    let jaccard = shared as f64 / (combined - shared) as f64;

    Ok(Similarity {
        dice,
        jaccard,
        shared,
        combined,
    })
}
