//! Set similarity between the feature lists of two signs.
//!
//! Duplicates collapse and order is ignored here, and only here: storage
//! keeps lists as written.

pub mod comparison;
pub mod metrics;
pub mod ranking;

pub use comparison::{compare_signs, Comparison};
pub use metrics::{compare, Similarity};
pub use ranking::{rank_against, RankedMatch};
