//! The dispatcher: from parsed arguments to a finished HTTPie run.
//!
//! [`dispatch`] wires in the real `PATH`, home directory and stdout, then
//! defers to [`run`]. The order of checks is fixed: client installed,
//! config readable, arguments valid, environment known. Argument errors
//! from clap are carried in and only surfaced after the config has loaded.

use std::io::Write;
use std::path::Path;

use crate::cli::Cli;
use crate::client::{self, args, HttpClient};
use crate::config;
use crate::error::FastcliError;

pub fn dispatch(parsed: Result<Cli, clap::Error>) -> Result<(), FastcliError> {
    let client = HttpClient::locate(client::PROGRAM)?;
    let config_path = config::default_path()?;
    let stdout = std::io::stdout();
    run(parsed, &client, &config_path, &mut stdout.lock())
}

pub fn run<W: Write>(
    parsed: Result<Cli, clap::Error>,
    client: &HttpClient,
    config_path: &Path,
    out: &mut W,
) -> Result<(), FastcliError> {
    let config = config::load_from(config_path)?;

    let cli = parsed?;
    let (print_command, dry_run) = (cli.print_command, cli.dry_run);
    let request = cli.into_request()?;

    let env = config.find(&request.environment).ok_or_else(|| {
        FastcliError::EnvironmentNotFound {
            name: request.environment.clone(),
            available: config.names(),
        }
    })?;
    tracing::debug!(name = %env.name, id = %env.id, "selected environment");

    let argv = args::build(&request, env);
    tracing::debug!(
        command = %args::render_command_line(client.name(), &args::redacted(&argv)),
        "assembled command"
    );

    if dry_run {
        writeln!(out, "{}", args::render_command_line(client.name(), &argv))?;
        return Ok(());
    }
    if print_command {
        eprintln!("{}", args::render_command_line(client.name(), &argv));
    }

    let captured = client.execute(&argv)?;
    out.write_all(&captured.output)?;
    out.flush()?;

    if !captured.status.success() {
        return Err(FastcliError::Execution {
            program: client.name().to_string(),
            status: captured.status,
        });
    }
    Ok(())
}
