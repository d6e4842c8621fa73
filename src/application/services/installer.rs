//! Installation of a public key through an external ssh client.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{InstallOptions, PublicKey, SshInvocation, Target};
use crate::infrastructure::traits::CommandRunner;

/// Runs the ssh client once to append a key to the remote authorized_keys.
pub struct RemoteInstaller {
    cmd: Arc<dyn CommandRunner>,
}

impl RemoteInstaller {
    pub fn new(cmd: Arc<dyn CommandRunner>) -> Self {
        Self { cmd }
    }

    /// Assemble the ssh invocation for `target` without running it.
    pub fn plan(&self, target: &Target, options: &InstallOptions) -> SshInvocation {
        SshInvocation::new(target, options)
    }

    /// Run `invocation`, feeding the key line on stdin.
    ///
    /// Returns the captured stdout on success. A non-zero exit becomes
    /// [`ApplicationError::RemoteCommandFailed`] carrying the exit code and stderr.
    #[instrument(skip(self, key), fields(destination = %invocation.destination))]
    pub fn execute(&self, invocation: &SshInvocation, key: &PublicKey) -> ApplicationResult<String> {
        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        debug!("execute: {}", invocation.command_line());

        let output = self
            .cmd
            .run_with_stdin(&invocation.program, &args, &key.to_line())
            .map_err(|e| ApplicationError::ClientUnavailable {
                program: invocation.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!("execute: failed with {:?}: {}", output.status.code(), stderr.trim());
            return Err(ApplicationError::RemoteCommandFailed {
                destination: invocation.destination.clone(),
                exit_code: output.status.code(),
                stderr,
            });
        }

        info!("key installed on {}", invocation.destination);
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
