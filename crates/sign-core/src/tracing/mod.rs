//! Observability for the sign feature store.
//! `tracing` crate with `EnvFilter`, configured through `SIGN_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter};
