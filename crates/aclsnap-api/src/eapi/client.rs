// eAPI HTTP client
//
// Wraps `reqwest::Client` with endpoint construction, basic auth, and
// JSON-RPC envelope unwrapping. Callers get one `Value` per command back,
// or a typed error describing where the exchange broke.

use std::net::Ipv6Addr;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::eapi::models::{Command, CommandResponse, Encoding, JsonRpcRequest, JsonRpcResponse};
use crate::error::Error;
use crate::transport::{Scheme, TransportConfig};

/// Path the command API is served from.
pub const COMMAND_API_PATH: &str = "/command-api";

/// Login material for one device.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    /// Answer to the `enable` password prompt, if the device asks for one.
    pub enable_secret: Option<SecretString>,
}

/// Raw HTTP client for a single device's command API.
pub struct EapiClient {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
}

impl EapiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// No request is made here; connection problems surface on the first
    /// command.
    pub fn new(
        endpoint: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url, credentials: Credentials) -> Self {
        Self {
            http,
            endpoint,
            credentials,
        }
    }

    /// Build `{scheme}://{host}[:{port}]/command-api`.
    ///
    /// Bare IPv6 literals are bracketed. A missing port means the scheme's
    /// default.
    pub fn endpoint_url(scheme: Scheme, host: &str, port: Option<u16>) -> Result<Url, Error> {
        let host = host.trim();
        if host.is_empty() {
            return Err(Error::InvalidUrl(url::ParseError::EmptyHost));
        }
        if host.contains('/') {
            return Err(Error::InvalidUrl(url::ParseError::InvalidDomainCharacter));
        }

        let host = if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let port = port.unwrap_or_else(|| scheme.default_port());

        Ok(Url::parse(&format!(
            "{scheme}://{host}:{port}{COMMAND_API_PATH}"
        ))?)
    }

    /// The command API URL this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Run commands exactly as given and pair each reply with its command.
    pub async fn execute<S: AsRef<str>>(
        &self,
        cmds: &[S],
        encoding: Encoding,
    ) -> Result<Vec<CommandResponse>, Error> {
        let commands: Vec<Command> = cmds.iter().map(|c| Command::from(c.as_ref())).collect();
        let results = self.run_commands(&commands, encoding).await?;
        Ok(pair(&commands, results, encoding))
    }

    /// Run commands in privileged mode.
    ///
    /// `enable` is prepended (answering the password prompt when an enable
    /// secret is configured) and its own result is dropped, so index 0 of the
    /// returned vector belongs to `cmds[0]`.
    pub async fn enable<S: AsRef<str>>(
        &self,
        cmds: &[S],
        encoding: Encoding,
    ) -> Result<Vec<CommandResponse>, Error> {
        let mut commands = Vec::with_capacity(cmds.len() + 1);
        commands.push(self.enable_command());
        commands.extend(cmds.iter().map(|c| Command::from(c.as_ref())));

        let results = self.run_commands(&commands, encoding).await?;
        let mut responses = pair(&commands, results, encoding);
        responses.remove(0);
        Ok(responses)
    }

    /// Send one `runCmds` request and return the raw per-command results.
    pub async fn run_commands(
        &self,
        cmds: &[Command],
        encoding: Encoding,
    ) -> Result<Vec<Value>, Error> {
        let request = JsonRpcRequest::run_cmds(cmds, encoding);
        debug!(
            endpoint = %self.endpoint,
            id = %request.id,
            commands = cmds.len(),
            "POST runCmds"
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .basic_auth(
                &self.credentials.username,
                Some(self.credentials.password.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_response(resp, cmds.len()).await
    }

    fn enable_command(&self) -> Command {
        match &self.credentials.enable_secret {
            Some(secret) => Command::WithInput {
                cmd: "enable".into(),
                input: secret.expose_secret().to_owned(),
            },
            None => Command::from("enable"),
        }
    }

    /// Unwrap the JSON-RPC envelope, returning `result` on success or the
    /// matching `Error` variant otherwise.
    async fn parse_response(
        &self,
        resp: reqwest::Response,
        expected: usize,
    ) -> Result<Vec<Value>, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: format!(
                    "device rejected credentials for user '{}'",
                    self.credentials.username
                ),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: JsonRpcResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if let Some(err) = envelope.error {
            return Err(Error::Command {
                code: err.code,
                errors: err.command_errors(),
                message: err.message,
            });
        }

        let results = envelope.result.ok_or_else(|| {
            Error::UnexpectedResponse("response carried neither result nor error".into())
        })?;

        if results.len() != expected {
            return Err(Error::UnexpectedResponse(format!(
                "expected {expected} results, got {}",
                results.len()
            )));
        }

        Ok(results)
    }
}

fn pair(commands: &[Command], results: Vec<Value>, encoding: Encoding) -> Vec<CommandResponse> {
    commands
        .iter()
        .zip(results)
        .map(|(command, result)| CommandResponse {
            command: command.text().to_owned(),
            result,
            encoding,
        })
        .collect()
}
