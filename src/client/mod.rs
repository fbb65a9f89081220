//! The external HTTP client (HTTPie's `http`).
//!
//! [`HttpClient::locate`] resolves the program on `PATH` up front so a
//! missing install is reported before anything else happens.
//! [`HttpClient::execute`] runs it to completion with stdout and stderr
//! joined on a single pipe, so the captured bytes keep the order the
//! child wrote them in.

pub mod args;

use std::ffi::OsStr;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::FastcliError;

/// HTTPie's executable name.
pub const PROGRAM: &str = "http";

#[derive(Debug, Clone)]
pub struct HttpClient {
    name: String,
    path: PathBuf,
}

/// Everything the child wrote, plus how it exited.
#[derive(Debug)]
pub struct Captured {
    pub output: Vec<u8>,
    pub status: ExitStatus,
}

impl HttpClient {
    /// Find `name` on the current `PATH`.
    pub fn locate(name: &str) -> Result<Self, FastcliError> {
        let path_var = std::env::var_os("PATH");
        let path = find_executable(name, path_var.as_deref()).ok_or_else(|| {
            FastcliError::DependencyMissing {
                program: name.to_string(),
            }
        })?;
        tracing::debug!(program = name, path = %path.display(), "found http client");
        Ok(Self::new(name, path))
    }

    #[must_use]
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the client and buffer its combined output.
    ///
    /// A non-zero exit is not an error here; the caller decides what to do
    /// with the output first.
    pub fn execute(&self, args: &[String]) -> Result<Captured, FastcliError> {
        let spawn_error = |source: std::io::Error| FastcliError::Spawn {
            program: self.name.clone(),
            source,
        };

        let (mut reader, writer) = std::io::pipe().map_err(spawn_error)?;

        // The Command temporary (and its copies of the write end) is dropped
        // at the end of this statement, so the read below sees EOF once the
        // child exits.
        let mut child = Command::new(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone().map_err(spawn_error)?)
            .stderr(writer)
            .spawn()
            .map_err(spawn_error)?;

        let mut output = Vec::new();
        if let Err(e) = reader.read_to_end(&mut output) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(FastcliError::Io(e));
        }

        let status = child.wait()?;
        tracing::debug!(
            program = %self.name,
            status = %status,
            bytes = output.len(),
            "http client finished"
        );
        Ok(Captured { output, status })
    }
}

/// Resolve an executable the way a shell would.
///
/// Names containing a path separator are checked as given. Otherwise each
/// entry of `path_var` is searched in order; an empty entry means the
/// current directory.
#[must_use]
pub fn find_executable(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return candidates(Path::new(name))
            .into_iter()
            .find(|c| is_executable(c));
    }

    std::env::split_paths(path_var?)
        .map(|dir| {
            if dir.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                dir
            }
        })
        .flat_map(|dir| candidates(&dir.join(name)))
        .find(|c| is_executable(c))
}

fn candidates(path: &Path) -> Vec<PathBuf> {
    #[cfg(windows)]
    if path.extension().is_none() {
        return vec![path.with_extension("exe"), path.to_path_buf()];
    }
    vec![path.to_path_buf()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, name: &str, body: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn finds_executable_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "http", "exit 0", 0o755);
        let found = find_executable("http", Some(dir.path().as_os_str())).unwrap();
        assert_eq!(found, script);
    }

    #[test]
    fn first_path_entry_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let expected = write_script(first.path(), "http", "exit 0", 0o755);
        write_script(second.path(), "http", "exit 0", 0o755);
        let path_var = std::env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(find_executable("http", Some(path_var.as_os_str())), Some(expected));
    }

    #[test]
    fn skips_non_executable_files_and_directories() {
        let plain = tempfile::tempdir().unwrap();
        write_script(plain.path(), "http", "exit 0", 0o644);
        let with_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(with_dir.path().join("http")).unwrap();
        let path_var = std::env::join_paths([plain.path(), with_dir.path()]).unwrap();
        assert_eq!(find_executable("http", Some(path_var.as_os_str())), None);
    }

    #[test]
    fn unset_path_finds_nothing() {
        assert_eq!(find_executable("http", None), None);
    }

    #[test]
    fn explicit_path_is_checked_directly() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "http", "exit 0", 0o755);
        let name = script.to_str().unwrap();
        assert_eq!(find_executable(name, None), Some(script.clone()));
    }

    #[test]
    fn locate_reports_dependency_missing() {
        let err = HttpClient::locate("fastcli-test-no-such-program").unwrap_err();
        assert!(matches!(err, FastcliError::DependencyMissing { .. }));
    }

    #[test]
    fn execute_captures_both_streams_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "http", "echo out\necho err >&2\necho done", 0o755);
        let client = HttpClient::new("http", script);
        let captured = client.execute(&[]).unwrap();
        assert!(captured.status.success());
        assert_eq!(String::from_utf8(captured.output).unwrap(), "out\nerr\ndone\n");
    }

    #[test]
    fn execute_passes_arguments_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "http", r#"printf '%s\n' "$@""#, 0o755);
        let client = HttpClient::new("http", script);
        let args = vec!["a b".to_string(), "Fastly-Key:tok".to_string()];
        let captured = client.execute(&args).unwrap();
        assert_eq!(String::from_utf8(captured.output).unwrap(), "a b\nFastly-Key:tok\n");
    }

    #[test]
    fn execute_keeps_output_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "http", "echo 'http: error: 404'\nexit 4", 0o755);
        let captured = HttpClient::new("http", script).execute(&[]).unwrap();
        assert_eq!(captured.status.code(), Some(4));
        assert_eq!(captured.output, b"http: error: 404\n");
    }

    #[test]
    fn execute_reports_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let client = HttpClient::new("http", dir.path().join("missing"));
        let err = client.execute(&[]).unwrap_err();
        assert!(matches!(err, FastcliError::Spawn { .. }));
    }
}
