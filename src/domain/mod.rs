//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod remote;
pub mod target;

pub use entities::*;
pub use error::{DomainError, TargetField};
pub use remote::{install_command, quote_remote_path, shell_quote, SshInvocation};
pub use target::parse_target_spec;
