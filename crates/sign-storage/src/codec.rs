//! Record codec: feature list <-> `;`-terminated text.
//!
//! `["red", "round"]` encodes to `red;round;`; `[]` encodes to `""`.

use sign_core::constants::FEATURE_DELIMITER;
use sign_core::errors::StorageError;

/// Concatenates `feature;` for every feature, in order.
pub fn encode<S: AsRef<str>>(features: &[S]) -> String {
    let mut out = String::with_capacity(features.iter().map(|f| f.as_ref().len() + 1).sum());
    for feature in features {
        out.push_str(feature.as_ref());
        out.push(FEATURE_DELIMITER);
    }
    out
}

/// Splits a record on `;`, dropping the one empty segment left by the final
/// separator. Duplicates are kept.
pub fn decode(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let mut features: Vec<String> = raw.split(FEATURE_DELIMITER).map(str::to_string).collect();
    // Tolerate a hand-edited record whose last feature lacks its separator.
    if features.last().is_some_and(String::is_empty) {
        features.pop();
    }
    features
}

/// Rejects values that cannot survive an encode/decode cycle.
pub fn validate_feature(feature: &str) -> Result<(), StorageError> {
    if feature.is_empty() {
        return Err(StorageError::InvalidFeature {
            feature: feature.to_string(),
            reason: "feature must not be empty".to_string(),
        });
    }
    if feature.contains(FEATURE_DELIMITER) {
        return Err(StorageError::InvalidFeature {
            feature: feature.to_string(),
            reason: format!("feature must not contain {FEATURE_DELIMITER:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_terminates_every_feature() {
        assert_eq!(encode(&["red", "round"]), "red;round;");
        assert_eq!(encode::<&str>(&[]), "");
    }

    #[test]
    fn decode_drops_only_the_trailing_segment() {
        assert_eq!(decode("red;round;"), vec!["red", "round"]);
        assert_eq!(decode(""), Vec::<String>::new());
        assert_eq!(decode("a;;b;"), vec!["a", "", "b"]);
        assert_eq!(decode(";"), vec![""]);
    }

    #[test]
    fn decode_keeps_duplicates_and_order() {
        assert_eq!(decode("b;a;b;"), vec!["b", "a", "b"]);
    }

    #[test]
    fn decode_unterminated_record() {
        assert_eq!(decode("a;b"), vec!["a", "b"]);
    }

    #[test]
    fn validate_feature_rules() {
        assert!(validate_feature("has_fur").is_ok());
        assert!(validate_feature("has fur, sometimes").is_ok());
        assert!(matches!(
            validate_feature(""),
            Err(StorageError::InvalidFeature { .. })
        ));
        assert!(matches!(
            validate_feature("a;b"),
            Err(StorageError::InvalidFeature { .. })
        ));
    }
}
