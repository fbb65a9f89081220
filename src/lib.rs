//! fastcli calls the Fastly API through HTTPie.
//!
//! It reads a list of named environments (service id plus API token) from
//! `~/.fastcli`, picks one with `-e`, and runs `http` against
//! `https://api.fastly.com/service/<id>/<path>` with the `Fastly-Key`
//! header filled in. The child's combined output is relayed verbatim.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- The dispatcher that runs one invocation end to end.
//! - [`client`] -- Locating and running the external HTTP client, and
//!   building its argument vector.
//! - [`config`] -- Loading the environment list from `~/.fastcli`.
//! - [`error`] -- Unified error type using `thiserror`.
//! - [`logging`] -- Structured tracing setup on stderr.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod client;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
