//! Mock I/O implementations shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use ssh_copy_id::config::Settings;
use ssh_copy_id::infrastructure::di::ServiceContainer;
use ssh_copy_id::infrastructure::traits::{CommandRunner, FileSystem, Prompter};

/// In-memory filesystem keyed by path.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn with_file(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(path.into(), content.to_string());
        Self { files }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// One recorded `run_with_stdin` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin: String,
}

/// Command runner that records calls and answers with a canned result.
pub struct RecordingCommandRunner {
    calls: Mutex<Vec<RecordedCall>>,
    exit_code: i32,
    stdout: String,
    stderr: String,
    spawn_error: bool,
}

impl RecordingCommandRunner {
    pub fn succeeding() -> Self {
        Self::exiting(0, "")
    }

    pub fn exiting(exit_code: i32, stderr: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
            spawn_error: false,
        }
    }

    pub fn not_installed() -> Self {
        Self {
            spawn_error: true,
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run_with_stdin(&self, cmd: &str, args: &[&str], stdin: &str) -> io::Result<Output> {
        self.calls.lock().unwrap().push(RecordedCall {
            cmd: cmd.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            stdin: stdin.to_string(),
        });
        if self.spawn_error {
            return Err(io::Error::new(io::ErrorKind::NotFound, "ssh: not found"));
        }
        Ok(Output {
            status: exit_status(self.exit_code),
            stdout: self.stdout.clone().into_bytes(),
            stderr: self.stderr.clone().into_bytes(),
        })
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Prompter answering from a queue and remembering what it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&self, message: &str) -> io::Result<String> {
        self.asked.lock().unwrap().push(message.to_string());
        // Running out of answers behaves like end of input.
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or_default())
    }
}

/// Container over the given mocks with default settings.
pub fn container(
    fs: Arc<MemoryFileSystem>,
    cmd: Arc<RecordingCommandRunner>,
    prompter: Arc<ScriptedPrompter>,
) -> ServiceContainer {
    ServiceContainer::with_deps(Settings::default(), fs, cmd, prompter)
}
