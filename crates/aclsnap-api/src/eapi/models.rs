// JSON-RPC envelope types for the EOS command API.
//
// Results are kept as raw `serde_json::Value`: the shape of each reply
// depends on the command and is not modelled here.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output encoding requested from the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Structured reply (the CLI's `| json` view).
    #[default]
    Json,
    /// Raw CLI text, wrapped as `{ "output": "..." }`.
    Text,
}

/// One CLI command as sent in `params.cmds`.
///
/// Plain commands serialize as bare strings; commands that need to answer a
/// prompt (e.g. `enable` with a secret) serialize as `{ cmd, input }`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Command {
    Plain(String),
    WithInput { cmd: String, input: String },
}

impl Command {
    /// The command line itself, without any prompt input.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(cmd) | Self::WithInput { cmd, .. } => cmd,
        }
    }
}

// Prompt input is usually a secret.
impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(cmd) => f.debug_tuple("Plain").field(cmd).finish(),
            Self::WithInput { cmd, .. } => f
                .debug_struct("WithInput")
                .field("cmd", cmd)
                .field("input", &"****")
                .finish(),
        }
    }
}

impl From<&str> for Command {
    fn from(cmd: &str) -> Self {
        Self::Plain(cmd.to_owned())
    }
}

impl From<String> for Command {
    fn from(cmd: String) -> Self {
        Self::Plain(cmd)
    }
}

/// A single command's reply, paired with the command that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResponse {
    pub command: String,
    pub result: Value,
    pub encoding: Encoding,
}

// ── Request ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: RunCmdsParams<'a>,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RunCmdsParams<'a> {
    pub version: u32,
    pub cmds: &'a [Command],
    pub format: Encoding,
}

impl<'a> JsonRpcRequest<'a> {
    pub(crate) fn run_cmds(cmds: &'a [Command], format: Encoding) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "runCmds",
            params: RunCmdsParams {
                version: 1,
                cmds,
                format,
            },
            id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

// ── Response ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Vec<Value>,
}

impl JsonRpcError {
    /// EOS reports per-command diagnostics in `data[-1].errors`.
    pub(crate) fn command_errors(&self) -> Vec<String> {
        self.data
            .last()
            .and_then(|last| last.get("errors"))
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}
