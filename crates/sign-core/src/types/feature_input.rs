//! Parsed form of the text a user submits when adding to a sign.

use crate::constants::{RECORD_FILE_SUFFIX, SIGN_REF_SUFFIX};

/// What an `add` input refers to, decided by its literal suffix.
///
/// | Input | Variant |
/// |---|---|
/// | `cat.txt` | `SignFileRef("cat")`: merge the record file `cat.txt` |
/// | `cat.sign` | `SignRef("cat")`: merge the record of sign `cat` |
/// | anything else | `Literal(input)`: one new feature |
///
/// Both reference variants resolve to the same record file. There is no
/// separate `.sign` file type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureInput {
    Literal(String),
    SignFileRef(String),
    SignRef(String),
}

impl FeatureInput {
    /// Classifies `input` by suffix. `.txt` is checked before `.sign`.
    pub fn parse(input: &str) -> Self {
        if let Some(name) = input.strip_suffix(RECORD_FILE_SUFFIX) {
            Self::SignFileRef(name.to_string())
        } else if let Some(name) = input.strip_suffix(SIGN_REF_SUFFIX) {
            Self::SignRef(name.to_string())
        } else {
            Self::Literal(input.to_string())
        }
    }

    /// The sign whose record should be merged, if this is a reference.
    pub fn referenced_sign(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::SignFileRef(name) | Self::SignRef(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_suffix_is_file_ref() {
        assert_eq!(
            FeatureInput::parse("cat.txt"),
            FeatureInput::SignFileRef("cat".into())
        );
    }

    #[test]
    fn sign_suffix_is_sign_ref() {
        let input = FeatureInput::parse("big.cat.sign");
        assert_eq!(input, FeatureInput::SignRef("big.cat".into()));
        assert_eq!(input.referenced_sign(), Some("big.cat"));
    }

    #[test]
    fn other_text_is_literal() {
        let input = FeatureInput::parse("has_fur");
        assert_eq!(input, FeatureInput::Literal("has_fur".into()));
        assert_eq!(input.referenced_sign(), None);
        // Suffix must be literal and at the very end.
        assert!(matches!(FeatureInput::parse("txt"), FeatureInput::Literal(_)));
        assert!(matches!(FeatureInput::parse("a.sign "), FeatureInput::Literal(_)));
    }
}
