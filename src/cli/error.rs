//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Infra(InfraError::Io { .. }) => crate::exitcode::IOERR,
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::Domain(DomainError::InvalidTarget { .. }) => {
                    crate::exitcode::USAGE
                }
                ApplicationError::KeyNotFound(_) => crate::exitcode::FAILURE,
                ApplicationError::ClientUnavailable { .. } => crate::exitcode::UNAVAILABLE,
                ApplicationError::RemoteCommandFailed { exit_code, .. } => {
                    exit_code.unwrap_or(crate::exitcode::SOFTWARE)
                }
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }

    /// Extra text shown below the error line, if any.
    pub fn details(&self) -> Option<String> {
        match self {
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::KeyNotFound(_) => {
                    Some("Generate one with: ssh-keygen".to_string())
                }
                ApplicationError::RemoteCommandFailed { stderr, .. } => {
                    let stderr = stderr.trim_end();
                    (!stderr.is_empty()).then(|| stderr.to_string())
                }
                _ => None,
            },
            _ => None,
        }
    }
}
