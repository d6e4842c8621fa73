//! Domain entities for installing a public key on a remote host.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{DomainError, TargetField};

/// Default ssh port.
pub const DEFAULT_PORT: u16 = 22;

/// Default local public key, before tilde expansion.
pub const DEFAULT_IDENTITY_FILE: &str = "~/.ssh/id_rsa.pub";

/// Default authorized_keys location on the remote host.
pub const DEFAULT_REMOTE_PATH: &str = "~/.ssh/authorized_keys";

/// Default ssh client executable.
pub const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// Fully resolved remote account: both fields are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    user: String,
    host: String,
}

impl Target {
    /// Build a target, rejecting blank user or host (user checked first).
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Result<Self, DomainError> {
        let user = user.into();
        let host = host.into();
        if user.trim().is_empty() {
            return Err(DomainError::InvalidTarget {
                field: TargetField::User,
            });
        }
        if host.trim().is_empty() {
            return Err(DomainError::InvalidTarget {
                field: TargetField::Host,
            });
        }
        Ok(Self { user, host })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}

/// Target as parsed from the command line, before any prompting.
///
/// `None` means the field was not given (or given empty) and must be asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialTarget {
    pub user: Option<String>,
    pub host: Option<String>,
}

impl PartialTarget {
    pub fn user(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            host: None,
        }
    }

    pub fn host(host: impl Into<String>) -> Self {
        Self {
            user: None,
            host: Some(host.into()),
        }
    }
}

/// Public key text, trimmed of surrounding whitespace.
///
/// The content is not validated: whatever the identity file holds is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn from_contents(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key as a single authorized_keys line, newline terminated.
    pub fn to_line(&self) -> String {
        format!("{}\n", self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything that shapes a single run, merged from settings and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Port passed to `ssh -p`
    pub port: u16,
    /// Local public key file (already expanded)
    pub identity_file: PathBuf,
    /// authorized_keys path on the remote host, `~/` relative to the remote home
    pub remote_path: String,
    /// Print the key instead of contacting the host
    pub dry_run: bool,
    /// Print the assembled ssh command line before running it
    pub debug: bool,
    /// ssh client executable
    pub ssh_program: String,
    /// Extra `-o` options for the ssh client
    pub ssh_options: Vec<String>,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            identity_file: PathBuf::from(DEFAULT_IDENTITY_FILE),
            remote_path: DEFAULT_REMOTE_PATH.to_string(),
            dry_run: false,
            debug: false,
            ssh_program: DEFAULT_SSH_PROGRAM.to_string(),
            ssh_options: Vec::new(),
        }
    }
}
