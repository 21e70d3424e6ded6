// Device session
//
// One authenticated eAPI client bound to one device. Opening a session does
// not touch the network; reachability problems surface on the first command.

use std::time::Duration;

use tracing::debug;
use url::Url;

use aclsnap_api::{CommandResponse, EapiClient, Encoding};

use crate::config::ConnectionConfig;
use crate::error::CoreError;

/// An open handle to a device's command API.
pub struct Session {
    client: EapiClient,
    timeout: Duration,
}

impl Session {
    /// Build the endpoint and HTTP client described by `config`.
    pub fn open(config: &ConnectionConfig) -> Result<Self, CoreError> {
        let endpoint = EapiClient::endpoint_url(config.scheme, &config.host, config.port)?;
        let client = EapiClient::new(endpoint.clone(), config.credentials(), &config.transport())
            .map_err(|e| match e {
                aclsnap_api::Error::Tls(reason) => CoreError::ConnectionFailed {
                    url: endpoint.to_string(),
                    reason: format!("TLS error: {reason}"),
                },
                other => other.into(),
            })?;

        debug!(endpoint = %endpoint, user = %config.username, "session opened");
        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// The command API URL this session talks to.
    pub fn endpoint(&self) -> &Url {
        self.client.endpoint()
    }

    /// Run commands in privileged mode, asking for structured replies.
    ///
    /// Returns the raw API error so callers can tell a refused command apart
    /// from a broken connection; see [`Session::classify`].
    pub async fn enable(&self, cmds: &[String]) -> Result<Vec<CommandResponse>, aclsnap_api::Error> {
        self.client.enable(cmds, Encoding::Json).await
    }

    /// Translate an API error into a `CoreError`, filling in what only the
    /// session knows (endpoint, configured timeout).
    pub fn classify(&self, err: aclsnap_api::Error) -> CoreError {
        match CoreError::from(err) {
            CoreError::Timeout { .. } => CoreError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            },
            CoreError::ConnectionFailed { url, reason } if url.is_empty() => {
                CoreError::ConnectionFailed {
                    url: self.endpoint().to_string(),
                    reason,
                }
            }
            other => other,
        }
    }
}
