//! Shared constants for the sign feature store.

/// Separator written after every feature in a record.
pub const FEATURE_DELIMITER: char = ';';

/// Extension of every sign record file, without the dot.
pub const RECORD_EXTENSION: &str = "txt";

/// Suffix that marks an `add` input as a record filename (`cat.txt`).
pub const RECORD_FILE_SUFFIX: &str = ".txt";

/// Suffix that marks an `add` input as a sign reference (`cat.sign`).
pub const SIGN_REF_SUFFIX: &str = ".sign";

/// Default storage directory, relative to the working directory.
pub const DEFAULT_STORAGE_DIR: &str = "sc_files";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "sign_compare.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "SIGN_LOG";

/// Default tracing filter when `SIGN_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "sign=info";

/// Characters a sign name may not contain.
pub const RESERVED_NAME_CHARS: [char; 4] = ['/', '\\', '\0', FEATURE_DELIMITER];
