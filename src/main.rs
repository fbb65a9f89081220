use clap::error::ErrorKind;
use clap::Parser;
use console::style;

use fastcli::cli::{Cli, LogLevel};
use fastcli::error::FastcliError;

fn main() {
    let parsed = Cli::try_parse();
    if let Err(ref e) = parsed {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
    }

    let (level, json) = parsed
        .as_ref()
        .map_or((LogLevel::Warn, false), |cli| (cli.log_level, cli.log_json));
    fastcli::logging::init(&level, fastcli::logging::resolve_format(json));

    if let Err(e) = fastcli::cmd::dispatch(parsed) {
        tracing::debug!(kind = e.kind(), "invocation failed");
        match e {
            FastcliError::Usage(err) => {
                let _ = err.print();
            }
            other => eprintln!("{} {other}", style("Error:").red().bold().for_stderr()),
        }
        std::process::exit(1);
    }
}
