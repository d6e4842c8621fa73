//! Resolution of the `user@host` argument into a complete target.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{parse_target_spec, Target};
use crate::infrastructure::traits::Prompter;

pub const USER_PROMPT: &str = "Enter SSH username:";
pub const HOST_PROMPT: &str = "Enter SSH host (IP or hostname):";

/// Turns an optional target spec into a [`Target`], prompting for missing parts.
pub struct TargetResolver {
    prompter: Arc<dyn Prompter>,
}

impl TargetResolver {
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Parse `spec`, then ask for the username and the host, in that order,
    /// if they are still unknown. Blank answers are rejected, not retried.
    #[instrument(skip(self))]
    pub fn resolve(&self, spec: Option<&str>) -> ApplicationResult<Target> {
        let partial = parse_target_spec(spec);
        debug!("resolve: parsed user={:?}, host={:?}", partial.user, partial.host);

        let user = match partial.user {
            Some(user) => user,
            None => self.ask(USER_PROMPT)?,
        };
        let host = match partial.host {
            Some(host) => host,
            None => self.ask(HOST_PROMPT)?,
        };

        Ok(Target::new(user, host)?)
    }

    fn ask(&self, message: &str) -> ApplicationResult<String> {
        let answer = self
            .prompter
            .prompt(message)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("read answer to '{}'", message),
                source: Box::new(e),
            })?;
        Ok(answer.trim().to_string())
    }
}
