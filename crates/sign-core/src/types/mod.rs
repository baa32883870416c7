//! Domain types shared across the workspace.

pub mod collections;
pub mod feature_input;
pub mod feature_state;

pub use collections::FxHashSet;
pub use feature_input::FeatureInput;
pub use feature_state::FeatureSetState;
