//! Whether a sign currently carries any features.

use serde::Serialize;

/// Feature-set state of a sign after a read or mutation.
///
/// `Empty` is a normal, displayable state ("no features saved"),
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "count")]
pub enum FeatureSetState {
    Empty,
    NonEmpty(usize),
}

impl FeatureSetState {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::NonEmpty(count)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::NonEmpty(n) => *n,
        }
    }
}
