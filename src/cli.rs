//! Command-line interface definitions using clap derive macros.
//!
//! The short flags (`-e`, `-v`, `-p`) mirror the original HTTPie wrapper.
//! Everything from the first positional argument onward is forwarded to
//! the client untouched, including values that start with `-`. Ambient
//! options (logging, command echo) are long-only so they never collide
//! with forwarded arguments.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::client::args::Request;
use crate::error::FastcliError;

#[derive(Parser, Debug)]
#[command(
    name = "fastcli",
    version,
    about = "Call the Fastly API through HTTPie using named environments from ~/.fastcli",
    after_help = "\x1b[1mExamples:\x1b[0m\n  \
        fastcli -e prod version/active              GET the active version\n  \
        fastcli -e prod -p none domain              Unformatted output\n  \
        fastcli -e stage -v purge_all X-Force:1     Verbose, extra header\n\n  \
        Config: ~/.fastcli  [{\"Name\": \"prod\", \"ID\": \"<service id>\", \"Token\": \"<api token>\"}]"
)]
pub struct Cli {
    /// Environment name to use from ~/.fastcli
    #[arg(short = 'e', long = "env", value_name = "ENV", overrides_with = "env")]
    pub env: Option<String>,

    /// Ask HTTPie for verbose output (request and response)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// HTTPie output formatting mode, passed through as --pretty=<MODE>
    #[arg(
        short = 'p',
        long = "pretty",
        value_name = "MODE",
        default_value = "all",
        overrides_with = "pretty"
    )]
    pub pretty: String,

    /// API path under /service/<id>/, followed by extra HTTPie arguments
    #[arg(
        value_name = "PATH [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,

    /// Print the assembled command line to stderr before running it
    #[arg(long, help_heading = "Diagnostics")]
    pub print_command: bool,

    /// Print the assembled command line and exit without running it
    #[arg(long, help_heading = "Diagnostics")]
    pub dry_run: bool,

    /// Log level
    #[arg(long, default_value = "warn", help_heading = "Diagnostics")]
    pub log_level: LogLevel,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, help_heading = "Diagnostics")]
    pub log_json: bool,
}

impl Cli {
    /// Check the parts clap cannot: a non-empty environment and a path.
    pub fn into_request(self) -> Result<Request, FastcliError> {
        let environment = match self.env {
            Some(env) if !env.is_empty() => env,
            _ => {
                return Err(usage_error(
                    ErrorKind::MissingRequiredArgument,
                    "an environment is required: -e <ENV>",
                ))
            }
        };

        let mut args = self.args.into_iter();
        let Some(path) = args.next() else {
            return Err(usage_error(
                ErrorKind::MissingRequiredArgument,
                "missing httpie arguments: expected an API path",
            ));
        };

        Ok(Request {
            environment,
            verbose: self.verbose,
            pretty: self.pretty,
            path,
            extra: args.collect(),
        })
    }
}

fn usage_error(kind: ErrorKind, message: &str) -> FastcliError {
    FastcliError::Usage(Cli::command().error(kind, message))
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
