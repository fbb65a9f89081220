//! Building the HTTPie argument vector.
//!
//! [`build`] produces, in order: an optional `-v`, `--ignore-stdin`,
//! `--pretty=<mode>`, the target URL, the caller's extra arguments, and
//! finally the `Fastly-Key` auth header.

use crate::config::model::Environment;

pub const BASE_URL: &str = "https://api.fastly.com";
pub const AUTH_HEADER: &str = "Fastly-Key";

/// A validated invocation, produced from the parsed CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub environment: String,
    pub verbose: bool,
    /// HTTPie `--pretty` mode, forwarded verbatim.
    pub pretty: String,
    /// Path fragment appended after `/service/<id>/`.
    pub path: String,
    pub extra: Vec<String>,
}

/// `<BASE_URL>/service/<id>/<path>`, with the path taken verbatim.
#[must_use]
pub fn target_url(env: &Environment, path: &str) -> String {
    format!("{BASE_URL}/service/{}/{path}", env.id)
}

#[must_use]
pub fn auth_header(env: &Environment) -> String {
    format!("{AUTH_HEADER}:{}", env.token)
}

#[must_use]
pub fn build(request: &Request, env: &Environment) -> Vec<String> {
    let mut args = Vec::with_capacity(request.extra.len() + 5);
    if request.verbose {
        args.push("-v".to_string());
    }
    args.push("--ignore-stdin".to_string());
    args.push(format!("--pretty={}", request.pretty));
    args.push(target_url(env, &request.path));
    args.extend(request.extra.iter().cloned());
    args.push(auth_header(env));
    args
}

/// Copy of `args` with the auth header value masked, for logging.
#[must_use]
pub fn redacted(args: &[String]) -> Vec<String> {
    let prefix = format!("{AUTH_HEADER}:");
    args.iter()
        .map(|arg| {
            if arg.starts_with(&prefix) {
                format!("{prefix}****")
            } else {
                arg.clone()
            }
        })
        .collect()
}

/// Render a command line the way a POSIX shell would accept it back.
#[must_use]
pub fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
