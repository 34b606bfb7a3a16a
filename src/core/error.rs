use std::env;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundfishError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Org config source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] env::VarError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl FundfishError {
    /// Source-side failures are recoverable by falling back to the embedded
    /// profile template; everything else is a hard failure for the caller.
    pub fn is_source_degradation(&self) -> bool {
        matches!(
            self,
            FundfishError::SourceUnavailable(_) | FundfishError::NotFound(_)
        )
    }
}
