use thiserror::Error;

use tradelens_core::{FetchError, SourceError, ValidationError, WindowError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error("provider error: {0}")]
    Source(#[from] SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<FetchError> for CliError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Validation(inner) => Self::Validation(inner),
            FetchError::Window(inner) => Self::Window(inner),
            FetchError::Source(inner) => Self::Source(inner),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Window(_) => 3,
            Self::Source(_) => 4,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
