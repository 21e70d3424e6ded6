// ── Core error types ──
//
// User-facing errors from aclsnap-core. Consumers never see raw HTTP
// statuses or JSON-RPC envelopes; the `From<aclsnap_api::Error>` impl
// translates transport-layer errors into domain variants.
//
// A device refusing the ACL query is *not* an error here: `fetch`
// reports it as `Fetched::Rejected`.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to device at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Device did not answer within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Device errors ────────────────────────────────────────────────
    #[error("Command failed on device [{code}]: {message}")]
    CommandFailed { code: i64, message: String },

    #[error("Unexpected response from device: {message}")]
    UnexpectedResponse { message: String },

    // ── Output errors ────────────────────────────────────────────────
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<aclsnap_api::Error> for CoreError {
    fn from(err: aclsnap_api::Error) -> Self {
        match err {
            aclsnap_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            aclsnap_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() || e.is_request() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: error_chain(e),
                    }
                } else {
                    CoreError::UnexpectedResponse {
                        message: error_chain(e),
                    }
                }
            }
            aclsnap_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid device address: {e}"),
            },
            aclsnap_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            aclsnap_api::Error::Http { status, body } => CoreError::UnexpectedResponse {
                message: format!("HTTP {status}: {body}"),
            },
            aclsnap_api::Error::Command { code, message, .. } => {
                CoreError::CommandFailed { code, message }
            }
            aclsnap_api::Error::Deserialization { message, body: _ } => {
                CoreError::UnexpectedResponse { message }
            }
            aclsnap_api::Error::UnexpectedResponse(message) => {
                CoreError::UnexpectedResponse { message }
            }
        }
    }
}

/// reqwest's top-level message is generic ("error sending request");
/// the useful part (refused, DNS, certificate) sits further down the chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

impl CoreError {
    /// Returns `true` if nothing reached the device.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout { .. })
    }
}
