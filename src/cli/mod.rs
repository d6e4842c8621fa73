//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{wants_version, Cli};
pub use error::{CliError, CliResult};
