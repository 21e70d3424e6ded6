//! CLI configuration — thin wrapper around `aclsnap_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--host, --password, etc.).

use std::time::Duration;

use secrecy::SecretString;

use aclsnap_core::{ConnectionConfig, Scheme, TlsVerification};

use crate::cli::{GlobalOpts, TransportArg};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use aclsnap_config::{
    Config, Defaults, Profile, config_path, load_config, load_config_or_default, save_config,
};

impl From<TransportArg> for Scheme {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Https => Scheme::Https,
            TransportArg::Http => Scheme::Http,
        }
    }
}

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for diagnostics.
pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Build a `ConnectionConfig` from the config file, profile, and CLI overrides.
///
/// A missing profile is only an error when it was asked for by name; otherwise
/// flags and environment alone must describe the device.
pub fn build_connection_config(global: &GlobalOpts) -> Result<ConnectionConfig, CliError> {
    let mut cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    let profile = match cfg.profiles.remove(&profile_name) {
        Some(profile) => profile,
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                available: available_profiles(&cfg),
                name: profile_name,
            });
        }
        None => Profile::default(),
    };

    resolve_profile(&profile, &profile_name, &cfg.defaults, global)
}

/// Translate a `Profile` + global flags into a `ConnectionConfig`.
///
/// CLI flag overrides take priority over profile values, which take
/// priority over `[defaults]`.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ConnectionConfig, CliError> {
    // 1. Host (flag > env > profile)
    let host = global.host.as_deref().unwrap_or(&profile.host).trim();
    if host.is_empty() {
        return Err(CliError::NoHost {
            path: config_path().display().to_string(),
        });
    }

    // 2. Transport
    let scheme = match global.transport {
        Some(arg) => Scheme::from(arg),
        None => aclsnap_config::parse_transport(
            profile.transport.as_deref().unwrap_or(&defaults.transport),
        )?,
    };

    // 3. Credentials
    let username = global
        .username
        .clone()
        .unwrap_or_else(|| aclsnap_config::resolve_username(profile));

    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => aclsnap_config::resolve_password(profile, profile_name)?,
    };

    let enable_secret = global
        .enable_secret
        .clone()
        .map(SecretString::from)
        .or_else(|| aclsnap_config::resolve_enable_secret(profile));

    // 4. TLS verification
    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        aclsnap_config::profile_tls(profile, defaults.insecure)
    };

    // 5. Timeout
    let timeout = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(defaults.timeout);

    Ok(ConnectionConfig {
        scheme,
        host: host.to_owned(),
        port: global.port.or(profile.port),
        username,
        password,
        enable_secret,
        tls,
        timeout: Duration::from_secs(timeout),
    })
}
