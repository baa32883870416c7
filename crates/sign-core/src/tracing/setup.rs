//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging from the `SIGN_LOG` environment variable.
///
/// Format: `SIGN_LOG=sign_storage=debug,sign_similarity=info`.
/// Falls back to `sign=info` if `SIGN_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize logging with an explicit filter directive, e.g. from `-vv`.
/// `SIGN_LOG` still wins when it is set and valid.
pub fn init_tracing_with_filter(directive: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(directive));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // Logs go to stderr so command output on stdout stays parseable.
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
