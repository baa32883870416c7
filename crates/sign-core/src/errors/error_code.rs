//! SignErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so a presentation layer can branch on
/// a stable code instead of matching message text.
pub trait SignErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_NAME: &str = "INVALID_NAME";
pub const INVALID_FEATURE: &str = "INVALID_FEATURE";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const NO_FEATURES: &str = "NO_FEATURES";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
