use thiserror::Error;

use shelfcheck_lib::{PassError, SettingsError};
use shelfcheck_source::SourceError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Pass(#[from] PassError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Bad combination of flags
    #[error("Usage error: {0}")]
    Usage(String),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
