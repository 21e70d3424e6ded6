// ── Runtime connection configuration ──
//
// These types describe *how* to reach one EOS device. They carry credential
// data and connection tuning, but never touch disk. The CLI constructs a
// `ConnectionConfig` (from flags, a profile, or prompts) and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use aclsnap_api::{Credentials, Scheme, TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs, the EOS factory default).
    DangerAcceptInvalid,
}

/// Everything needed to open a session to a single device.
///
/// Built by the CLI, passed to `Session::open` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// `https` (default) or `http`.
    pub scheme: Scheme,
    /// Hostname or IP address of the management interface.
    pub host: String,
    /// Port override. `None` means the scheme's default.
    pub port: Option<u16>,
    pub username: String,
    pub password: SecretString,
    /// Answer to the `enable` prompt, if the device requires one.
    pub enable_secret: Option<SecretString>,
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            host: String::new(),
            port: None,
            username: "admin".into(),
            password: SecretString::from(String::new()),
            enable_secret: None,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ConnectionConfig {
    pub(crate) fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            enable_secret: self.enable_secret.clone(),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

/// `<acl_name>.json`, relative to the working directory.
pub fn default_output_path(acl_name: &str) -> PathBuf {
    PathBuf::from(format!("{acl_name}.json"))
}
