//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("public key not found: {}", .0.display())]
    KeyNotFound(PathBuf),

    #[error("could not start ssh client '{program}': {source}")]
    ClientUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ssh command failed for {destination}{}", exit_suffix(.exit_code))]
    RemoteCommandFailed {
        destination: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn exit_suffix(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated by signal)".to_string(),
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
