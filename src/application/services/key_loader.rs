//! Loading of the local public key.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::PublicKey;
use crate::infrastructure::traits::FileSystem;

/// Reads the identity file; content is trimmed but otherwise taken as is.
pub struct KeyLoader {
    fs: Arc<dyn FileSystem>,
}

impl KeyLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    #[instrument(skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<PublicKey> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::KeyNotFound(path.to_path_buf()));
        }

        let raw = self
            .fs
            .read_to_string(path)
            .with_path_context("read public key", path)?;
        let key = PublicKey::from_contents(&raw);
        debug!("load: {} bytes from {}", key.as_str().len(), path.display());
        Ok(key)
    }
}
