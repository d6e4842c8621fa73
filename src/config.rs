//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ssh-copy-id/ssh-copy-id.toml`
//! 3. Environment variables: `SSH_COPY_ID_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{DEFAULT_IDENTITY_FILE, DEFAULT_PORT, DEFAULT_REMOTE_PATH, DEFAULT_SSH_PROGRAM};
use crate::util::path::expand_path;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SSH_COPY_ID";

/// Unified configuration for ssh-copy-id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// ssh port (default: 22)
    pub port: u16,
    /// Local public key file (default: ~/.ssh/id_rsa.pub)
    pub identity_file: PathBuf,
    /// authorized_keys path on the remote host (default: ~/.ssh/authorized_keys)
    pub remote_path: String,
    /// ssh client executable (default: ssh)
    pub ssh_program: String,
    /// Extra `ssh -o` options, prepended to the ones given on the command line
    pub ssh_options: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            identity_file: PathBuf::from(DEFAULT_IDENTITY_FILE),
            remote_path: DEFAULT_REMOTE_PATH.to_string(),
            ssh_program: DEFAULT_SSH_PROGRAM.to_string(),
            ssh_options: Vec::new(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub port: Option<u16>,
    pub identity_file: Option<PathBuf>,
    pub remote_path: Option<String>,
    pub ssh_program: Option<String>,
    pub ssh_options: Option<Vec<String>>,
}

/// Get the XDG config directory for ssh-copy-id.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ssh-copy-id").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ssh-copy-id.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand `~` and `$VAR` in the local identity file path.
    ///
    /// `remote_path` is left alone: its `~` belongs to the remote shell.
    fn expand_paths(&mut self) {
        self.identity_file = expand_path(&self.identity_file);
    }

    /// Overlay a config file: every field it specifies replaces the current one.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            port: overlay.port.unwrap_or(self.port),
            identity_file: overlay
                .identity_file
                .clone()
                .unwrap_or_else(|| self.identity_file.clone()),
            remote_path: overlay
                .remote_path
                .clone()
                .unwrap_or_else(|| self.remote_path.clone()),
            ssh_program: overlay
                .ssh_program
                .clone()
                .unwrap_or_else(|| self.ssh_program.clone()),
            ssh_options: overlay
                .ssh_options
                .clone()
                .unwrap_or_else(|| self.ssh_options.clone()),
        }
    }

    /// Load settings from defaults, the global config file and the environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_with(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file instead of the global one.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_with(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                debug!("load_with: reading {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply SSH_COPY_ID_* environment variables as explicit overrides.
    ///
    /// `SSH_COPY_ID_SSH_OPTIONS` is a comma separated list; empty entries are rejected.
    /// A variable that is set but unusable is an error, never skipped.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ssh_options"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Some(val) = env_value::<String>(&config, "port")? {
            settings.port = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("{ENV_PREFIX}_PORT={val}: {e}"),
            })?;
        }
        if let Some(val) = env_value::<String>(&config, "identity_file")? {
            settings.identity_file = PathBuf::from(val);
        }
        if let Some(val) = env_value::<String>(&config, "remote_path")? {
            settings.remote_path = val;
        }
        if let Some(val) = env_value::<String>(&config, "ssh_program")? {
            settings.ssh_program = val;
        }
        if let Some(val) = env_value::<Vec<String>>(&config, "ssh_options")? {
            if val.iter().any(|option| option.trim().is_empty()) {
                return Err(ApplicationError::Config {
                    message: format!("{ENV_PREFIX}_SSH_OPTIONS: empty option in list {val:?}"),
                });
            }
            settings.ssh_options = val;
        }

        Ok(settings)
    }
}

/// Read `key` from the environment source; `None` only when it is not set.
fn env_value<T: serde::de::DeserializeOwned>(
    config: &Config,
    key: &str,
) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{ENV_PREFIX}_{}: {e}", key.to_uppercase()),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
