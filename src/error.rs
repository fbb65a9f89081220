//! Unified error type for fastcli.
//!
//! Every failure path of the dispatcher maps to exactly one
//! [`FastcliError`] variant. All of them are terminal: `main` prints the
//! message and exits with status 1. Messages include a hint where one
//! helps the user fix the problem.

use std::path::PathBuf;
use std::process::ExitStatus;

fn format_available(names: &[String]) -> String {
    if names.is_empty() {
        "no environments are configured".to_string()
    } else {
        format!("available: {}", names.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FastcliError {
    #[error("{program} is not installed (HTTPie must be on your PATH)")]
    DependencyMissing { program: String },

    #[error("cannot determine the user's home directory")]
    HomeUnavailable,

    #[error("no config file at {}", path.display())]
    ConfigMissing { path: PathBuf },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error in {}:\n  {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}", .0.to_string().trim_start_matches("error: ").trim_end())]
    Usage(#[from] clap::Error),

    #[error("environment '{name}' not found ({})", format_available(.available))]
    EnvironmentNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed: {status}")]
    Execution { program: String, status: ExitStatus },
}

impl FastcliError {
    /// Short taxonomy name, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DependencyMissing { .. } => "dependency_missing",
            Self::HomeUnavailable => "environment_error",
            Self::ConfigMissing { .. } => "config_missing",
            Self::Io(_) => "io_error",
            Self::ConfigParse { .. } => "parse_error",
            Self::Usage(_) => "usage_error",
            Self::EnvironmentNotFound { .. } => "environment_not_found",
            Self::Spawn { .. } | Self::Execution { .. } => "execution_error",
        }
    }
}
