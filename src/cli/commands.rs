//! Command dispatch: resolve target → load key → dry run or install.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::InstallOptions;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::util::path::expand_path;

/// Load settings, wire real dependencies and run.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);
    execute_with(cli, &container, &mut io::stdout())
}

/// Run against an explicit container; a dry run writes the key to `out`.
#[instrument(skip_all)]
pub fn execute_with<W: Write>(
    cli: &Cli,
    container: &ServiceContainer,
    out: &mut W,
) -> CliResult<()> {
    let options = install_options(cli, &container.settings)?;
    debug!("options: {:?}", options);

    let target = container.resolver().resolve(cli.user_at_host.as_deref())?;
    let key = container.key_loader().load(&options.identity_file)?;

    if options.dry_run {
        return output::raw(out, key.as_str())
            .map_err(|e| InfraError::io("write key to stdout", e).into());
    }

    let installer = container.installer();
    let invocation = installer.plan(&target, &options);
    if options.debug {
        output::info(&invocation);
    }

    output::action("Copying key to", &target);
    installer.execute(&invocation, &key)?;
    output::success("Public key added successfully.");
    Ok(())
}

/// Merge flags over settings; flags win, `-o` options are appended.
pub fn install_options(cli: &Cli, settings: &Settings) -> CliResult<InstallOptions> {
    let port = cli.port.unwrap_or(settings.port);
    if port == 0 {
        return Err(CliError::InvalidArgs("port must be between 1 and 65535".into()));
    }

    let identity_file = cli
        .identity_file
        .as_deref()
        .map(expand_path)
        .unwrap_or_else(|| settings.identity_file.clone());

    let mut ssh_options = settings.ssh_options.clone();
    ssh_options.extend(cli.ssh_options.iter().cloned());

    Ok(InstallOptions {
        port,
        identity_file,
        remote_path: cli
            .target_path
            .clone()
            .unwrap_or_else(|| settings.remote_path.clone()),
        dry_run: cli.dry_run,
        debug: cli.debug,
        ssh_program: settings.ssh_program.clone(),
        ssh_options,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ssh-copy-id").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn given_no_flags_when_install_options_then_settings_used() {
        let settings = Settings {
            port: 2200,
            identity_file: PathBuf::from("/keys/me.pub"),
            remote_path: "~/.ssh/ak".into(),
            ssh_program: "/usr/bin/ssh".into(),
            ssh_options: vec!["BatchMode=yes".into()],
        };

        let options = install_options(&parse(&[]), &settings).unwrap();

        assert_eq!(options.port, 2200);
        assert_eq!(options.identity_file, PathBuf::from("/keys/me.pub"));
        assert_eq!(options.remote_path, "~/.ssh/ak");
        assert_eq!(options.ssh_program, "/usr/bin/ssh");
        assert_eq!(options.ssh_options, vec!["BatchMode=yes".to_string()]);
        assert!(!options.dry_run);
        assert!(!options.debug);
    }

    #[test]
    fn given_flags_when_install_options_then_flags_win_and_options_append() {
        let settings = Settings {
            ssh_options: vec!["BatchMode=yes".into()],
            ..Settings::default()
        };
        let cli = parse(&[
            "-p", "2222", "-i", "/tmp/k.pub", "-t", "/srv/ak", "-o", "ConnectTimeout=5", "-n", "-x",
        ]);

        let options = install_options(&cli, &settings).unwrap();

        assert_eq!(options.port, 2222);
        assert_eq!(options.identity_file, PathBuf::from("/tmp/k.pub"));
        assert_eq!(options.remote_path, "/srv/ak");
        assert_eq!(
            options.ssh_options,
            vec!["BatchMode=yes".to_string(), "ConnectTimeout=5".to_string()]
        );
        assert!(options.dry_run);
        assert!(options.debug);
    }

    #[test]
    fn given_port_zero_when_install_options_then_invalid_args() {
        let err = install_options(&parse(&["-p", "0"]), &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }
}
