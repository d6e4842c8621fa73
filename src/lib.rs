//! Copy a local public key into a remote `authorized_keys` file over ssh.
//!
//! The flow is resolve target → load key → install (or print, for a dry run).
//! The ssh protocol itself is left to an external ssh client.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

/// Version printed by `-v`, fixed at build time.
pub const VERSION: &str = match option_env!("CARGO_PKG_VERSION") {
    Some(version) => version,
    None => "unknown",
};
