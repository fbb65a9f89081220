//! Structured logging setup using the `tracing` ecosystem.
//!
//! Logs always go to stderr; stdout belongs to the relayed client output.
//! Output is compact text when stderr is a terminal and JSON otherwise,
//! unless `--log-json` forces JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

#[must_use]
pub fn resolve_format(json: bool) -> LogFormat {
    if json || !std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    }
}

pub fn init(level: &LogLevel, format: LogFormat) {
    let filter = tracing_subscriber::filter::Targets::new().with_default(level.to_tracing_level());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}
