use thiserror::Error;

/// Top-level error type for the `aclsnap-api` crate.
///
/// Covers every failure mode of a single eAPI exchange: building the HTTP
/// client, reaching the device, authenticating, and decoding the JSON-RPC
/// envelope. `aclsnap-core` maps these into domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The device rejected the basic-auth credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Non-success HTTP status other than 401.
    #[error("HTTP {status} from command API: {body}")]
    Http { status: u16, body: String },

    // ── JSON-RPC ────────────────────────────────────────────────────
    /// The device answered with a JSON-RPC error object.
    ///
    /// `errors` holds the per-command messages EOS puts in the last
    /// element of `error.data`.
    #[error("Command error [{code}]: {message}")]
    Command {
        code: i64,
        message: String,
        errors: Vec<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body was not a JSON-RPC envelope, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Envelope parsed but does not match the request.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Returns `true` if the credentials were rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if the device could not be reached at all.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect(),
            Self::Tls(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
