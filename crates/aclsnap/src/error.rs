//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use aclsnap_config::ConfigError;
use aclsnap_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(unused_assignments)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to device at {url}")]
    #[diagnostic(
        code(aclsnap::connection_failed),
        help(
            "Check that the device is reachable and eAPI is enabled:\n\
             \n  management api http-commands\n     no shutdown\n\
             \nURL: {url}"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS certificate verification failed for {url}")]
    #[diagnostic(
        code(aclsnap::tls_error),
        help(
            "EOS ships with a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or set ca_cert in your profile."
        )
    )]
    TlsError {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Device did not answer within {seconds}s")]
    #[diagnostic(
        code(aclsnap::timeout),
        help("Increase the timeout with --timeout or check the device's load.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(aclsnap::auth_failed),
        help("Verify the username and password, and that the user may run eAPI commands.")
    )]
    AuthFailed { message: String },

    #[error("No password configured for profile '{profile}'")]
    #[diagnostic(
        code(aclsnap::no_credentials),
        help(
            "Pass --password, set ACLSNAP_PASSWORD, run: aclsnap config set-password\n\
             or use: aclsnap interactive"
        )
    )]
    NoCredentials { profile: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No device host configured")]
    #[diagnostic(
        code(aclsnap::no_host),
        help(
            "Pass --host, set ACLSNAP_HOST, or create a profile with: aclsnap config init\n\
             Config file: {path}"
        )
    )]
    NoHost { path: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(aclsnap::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: aclsnap config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(aclsnap::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(aclsnap::config))]
    Config { message: String },

    // ── Device ───────────────────────────────────────────────────────
    #[error("Device error: {message}")]
    #[diagnostic(code(aclsnap::device_error))]
    Device { message: String },

    // ── Output ───────────────────────────────────────────────────────
    #[error("Failed to write {path}")]
    #[diagnostic(
        code(aclsnap::write_failed),
        help("Check that the directory exists and is writable, or pick another path with --output.")
    )]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NoHost { .. } | Self::ProfileNotFound { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => {
                if reason.to_ascii_lowercase().contains("certificate") {
                    CliError::TlsError {
                        url,
                        source: reason.into(),
                    }
                } else {
                    CliError::ConnectionFailed {
                        url,
                        source: reason.into(),
                    }
                }
            }

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::CommandFailed { code, message } => CliError::Device {
                message: format!("[{code}] {message}"),
            },

            CoreError::UnexpectedResponse { message } => CliError::Device { message },

            CoreError::Io { path, source } => CliError::WriteFailed {
                path: path.display().to_string(),
                source,
            },

            CoreError::Serialization(e) => CliError::Device {
                message: format!("could not serialize payload: {e}"),
            },

            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
