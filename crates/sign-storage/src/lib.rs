//! Flat-file persistence for signs.
//!
//! One record per sign at `<storage dir>/<name>.txt`, holding each feature
//! followed by `;`. An empty file is a sign with no features.
//!
//! Every operation is a blocking call that opens, uses, and closes its file
//! handle before returning. There is no locking: concurrent multi-process
//! mutation of the same sign record is not safe.

pub mod codec;
pub mod mutator;
pub mod store;

pub use codec::{decode, encode};
pub use mutator::{add_feature, add_input, remove_feature};
pub use store::SignStore;
