//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// Which half of a `user@host` target is being talked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    User,
    Host,
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetField::User => f.write_str("username"),
            TargetField::Host => f.write_str("host"),
        }
    }
}

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// A target field was still blank after parsing and prompting.
    #[error("invalid target: {field} must not be empty")]
    InvalidTarget { field: TargetField },
}
