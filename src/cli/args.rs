//! CLI argument definitions using clap

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Copy a local public key into a remote authorized_keys file
#[derive(Parser, Debug)]
#[command(name = "ssh-copy-id")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// REMOTE_USER@REMOTE_HOST; missing parts are prompted for
    #[arg(value_name = "USER@HOST")]
    pub user_at_host: Option<String>,

    /// SSH port [default: 22]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Public key file [default: ~/.ssh/id_rsa.pub]
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub identity_file: Option<PathBuf>,

    /// authorized_keys path on the remote host [default: ~/.ssh/authorized_keys]
    #[arg(short = 't', long = "target-path", value_name = "PATH")]
    pub target_path: Option<String>,

    /// Extra ssh option, passed as `-o OPTION` (repeatable)
    #[arg(short = 'o', long = "ssh-option", value_name = "OPTION")]
    pub ssh_options: Vec<String>,

    /// Print the key that would be installed and exit
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the ssh command line before running it
    #[arg(short = 'x', long)]
    pub debug: bool,

    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Log verbosity on stderr (repeat up to 3 times)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Whether raw arguments ask for the version.
///
/// Used when clap rejects the rest of the command line, so `-v` still wins.
/// Recognizes `--version`, `-v` and short flag clusters like `-nv`.
pub fn wants_version<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    for arg in args {
        let arg = arg.as_ref().to_string_lossy();
        if arg == "--" {
            return false;
        }
        if arg == "--version" {
            return true;
        }
        if let Some(cluster) = arg.strip_prefix('-') {
            if !cluster.starts_with('-')
                && cluster.contains('v')
                && cluster.chars().all(|c| matches!(c, 'n' | 'x' | 'v'))
            {
                return true;
            }
        }
    }
    false
}
