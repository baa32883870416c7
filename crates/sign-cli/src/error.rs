//! Exit codes.

use std::process::ExitCode;

use sign_core::SignError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    /// Bad input, missing sign, nothing to compare, I/O failure.
    Recoverable = 1,
    /// Configuration could not be loaded.
    Config = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&SignError> for CliExitCode {
    fn from(err: &SignError) -> Self {
        match err {
            SignError::Config(_) => CliExitCode::Config,
            SignError::Storage(_) | SignError::Similarity(_) => CliExitCode::Recoverable,
        }
    }
}
