//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, Prompter)
//! but are themselves concrete structs, not traits.

mod installer;
mod key_loader;
mod resolver;

pub use installer::RemoteInstaller;
pub use key_loader::KeyLoader;
pub use resolver::{TargetResolver, HOST_PROMPT, USER_PROMPT};
