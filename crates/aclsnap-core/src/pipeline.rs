//! Retrieval and serialization of a single ACL.
//!
//! `fetch` asks the device for one ACL, `persist` writes it to disk, and
//! `export` runs both against a freshly opened session. Each stage returns
//! its own result; the caller decides what to print and how to exit.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ConnectionConfig;
use crate::error::CoreError;
use crate::payload::Payload;
use crate::session::Session;

/// EOS command that returns ACL definitions.
pub const SHOW_ACL_COMMAND: &str = "show ip access-lists";

/// Build the query for one named ACL.
pub fn show_acl_command(acl_name: &str) -> String {
    format!("{SHOW_ACL_COMMAND} {acl_name}")
}

/// The device's explanation for refusing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub code: i64,
    pub message: String,
    pub errors: Vec<String>,
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error [{}]: {}", self.code, self.message)?;
        if !self.errors.is_empty() {
            write!(f, " [{}]", self.errors.join("; "))?;
        }
        Ok(())
    }
}

/// Result of querying the device for an ACL.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// The device answered; the payload may still be empty.
    Payload(Payload),
    /// The device refused the query (unknown name, bad syntax, privilege).
    Rejected(CommandFailure),
}

impl Fetched {
    /// The payload, or `None` if the device refused the query.
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Payload(payload) => Some(payload),
            Self::Rejected(_) => None,
        }
    }
}

/// What `persist` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    Written { path: PathBuf, bytes: usize },
    NothingToWrite,
}

/// Final outcome of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The payload was written.
    Written { path: PathBuf, bytes: usize },
    /// The device answered with no data; nothing was written.
    Empty,
    /// The device refused the query; nothing was written.
    Rejected(CommandFailure),
}

/// Query the device for `acl_name` and return the `result` of the first reply.
///
/// A command the device refuses comes back as `Fetched::Rejected`, not as
/// an error. Errors are reserved for failures to talk to the device at all.
pub async fn fetch(session: &Session, acl_name: &str) -> Result<Fetched, CoreError> {
    let command = show_acl_command(acl_name);
    debug!(acl = acl_name, endpoint = %session.endpoint(), "querying ACL");

    let responses = match session.enable(&[command]).await {
        Ok(responses) => responses,
        Err(aclsnap_api::Error::Command {
            code,
            message,
            errors,
        }) => {
            let failure = CommandFailure {
                code,
                message,
                errors,
            };
            warn!(acl = acl_name, %failure, "device rejected ACL query");
            return Ok(Fetched::Rejected(failure));
        }
        Err(other) => return Err(session.classify(other)),
    };

    let first = responses
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::UnexpectedResponse {
            message: "device returned no results".into(),
        })?;

    Ok(Fetched::Payload(Payload::new(first.result)))
}

/// Write `payload` to `path` as 4-space indented JSON.
///
/// Absent or empty payloads leave the filesystem untouched. An existing
/// file at `path` is replaced.
pub fn persist(payload: Option<&Payload>, path: &Path) -> Result<Persisted, CoreError> {
    let Some(payload) = payload.filter(|p| !p.is_empty()) else {
        debug!(path = %path.display(), "no ACL data, skipping write");
        return Ok(Persisted::NothingToWrite);
    };

    let bytes = payload.to_pretty_vec()?;
    let io_err = |source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    info!(path = %path.display(), bytes = bytes.len(), "ACL written");
    Ok(Persisted::Written {
        path: path.to_path_buf(),
        bytes: bytes.len(),
    })
}

/// Open a session, fetch `acl_name`, and persist it to `path`.
pub async fn export(
    config: &ConnectionConfig,
    acl_name: &str,
    path: &Path,
) -> Result<ExportOutcome, CoreError> {
    let session = Session::open(config)?;

    match fetch(&session, acl_name).await? {
        Fetched::Rejected(failure) => Ok(ExportOutcome::Rejected(failure)),
        Fetched::Payload(payload) => match persist(Some(&payload), path)? {
            Persisted::Written { path, bytes } => Ok(ExportOutcome::Written { path, bytes }),
            Persisted::NothingToWrite => Ok(ExportOutcome::Empty),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn command_embeds_acl_name() {
        assert_eq!(show_acl_command("edge-in"), "show ip access-lists edge-in");
    }

    #[test]
    fn failure_display_lists_device_errors() {
        let failure = CommandFailure {
            code: 1002,
            message: "CLI command 2 of 2 'show ip access-lists a b' failed: invalid command"
                .into(),
            errors: vec!["Invalid input (at token 4: 'b')".into()],
        };
        assert_eq!(
            failure.to_string(),
            "Error [1002]: CLI command 2 of 2 'show ip access-lists a b' failed: invalid command \
             [Invalid input (at token 4: 'b')]"
        );
    }

    #[test]
    fn persist_skips_absent_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.json");

        assert_eq!(persist(None, &path).unwrap(), Persisted::NothingToWrite);
        assert!(!path.exists());
    }

    #[test]
    fn persist_skips_empty_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        let payload = Payload::new(json!({}));

        assert_eq!(persist(Some(&payload), &path).unwrap(), Persisted::NothingToWrite);
        assert!(!path.exists());
    }

    #[test]
    fn persist_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edge-in.json");
        std::fs::write(&path, "stale contents that are longer than the new payload").unwrap();

        let payload = Payload::new(json!({ "a": 1 }));
        let persisted = persist(Some(&payload), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n    \"a\": 1\n}");
        assert_eq!(
            persisted,
            Persisted::Written {
                path,
                bytes: written.len()
            }
        );
    }

    #[test]
    fn persist_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("edge-in.json");
        let payload = Payload::new(json!({ "a": 1 }));

        let err = persist(Some(&payload), &path).unwrap_err();
        assert!(
            matches!(err, CoreError::Io { path: ref p, .. } if *p == path),
            "expected Io error, got {err:?}"
        );
    }
}
