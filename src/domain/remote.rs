//! Remote command construction for the ssh client.
//!
//! The key itself never appears in the command line: the remote side appends
//! its standard input, and the key is fed to the ssh client's stdin.

use std::fmt;

use crate::domain::{InstallOptions, Target};

/// Remote ssh directory; always relative to the remote home.
pub const REMOTE_SSH_DIR: &str = "~/.ssh";

/// Single-quote `s` for a POSIX shell.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

/// Quote a remote path, leaving a leading `~/` bare so the remote shell expands it.
pub fn quote_remote_path(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some("") => "~/".to_string(),
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None if path == "~" => path.to_string(),
        None => shell_quote(path),
    }
}

/// Remote shell line: create `~/.ssh` (700), append stdin to `remote_path`, chmod it 600.
pub fn install_command(remote_path: &str) -> String {
    let path = quote_remote_path(remote_path);
    format!(
        "umask 077 && mkdir -p {dir} && chmod 700 {dir} && cat >> {path} && chmod 600 {path}",
        dir = REMOTE_SSH_DIR,
    )
}

/// A fully assembled ssh client invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// `user@host` this invocation connects to
    pub destination: String,
}

impl SshInvocation {
    /// `<program> -p <port> [-o <option>]... <user@host> <remote command>`
    pub fn new(target: &Target, options: &InstallOptions) -> Self {
        let destination = target.to_string();
        let mut args = vec!["-p".to_string(), options.port.to_string()];
        for option in &options.ssh_options {
            args.push("-o".to_string());
            args.push(option.clone());
        }
        args.push(destination.clone());
        args.push(install_command(&options.remote_path));

        Self {
            program: options.ssh_program.clone(),
            args,
            destination,
        }
    }

    /// Program and arguments joined with single spaces, unquoted.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SshInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
