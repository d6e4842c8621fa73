//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Output, Stdio};

use colored::Colorize;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments, feeding `stdin` and capturing stdout/stderr.
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output>;
}

/// Interactive line prompt abstraction.
pub trait Prompter: Send + Sync {
    /// Show `message` and block until one line is read.
    /// Returns the raw line; end of input yields an empty string.
    fn prompt(&self, message: &str) -> io::Result<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Real command runner using `std::process`.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output> {
        let mut child = std::process::Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut child_stdin) = child.stdin.take() {
            // The child may exit before reading (auth failure, unreachable host);
            // its exit status is what gets reported then.
            match child_stdin.write_all(stdin.as_bytes()) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }

        child.wait_with_output()
    }
}

/// Prompter reading answers from the terminal's stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", message.cyan())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}
