//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{KeyLoader, RemoteInstaller, TargetResolver};
use crate::config::Settings;
use crate::infrastructure::traits::{
    CommandRunner, FileSystem, Prompter, RealCommandRunner, RealFileSystem, StdinPrompter,
};

/// Container holding the I/O dependencies; services are built on demand.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Interactive prompt abstraction
    pub prompter: Arc<dyn Prompter>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
            Arc::new(StdinPrompter),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            cmd,
            prompter,
        }
    }

    pub fn resolver(&self) -> TargetResolver {
        TargetResolver::new(Arc::clone(&self.prompter))
    }

    pub fn key_loader(&self) -> KeyLoader {
        KeyLoader::new(Arc::clone(&self.fs))
    }

    pub fn installer(&self) -> RemoteInstaller {
        RemoteInstaller::new(Arc::clone(&self.cmd))
    }
}
