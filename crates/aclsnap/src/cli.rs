//! Clap derive structures for the `aclsnap` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// aclsnap -- snapshot Arista EOS access lists to JSON
#[derive(Debug, Parser)]
#[command(
    name = "aclsnap",
    version,
    about = "Snapshot Arista EOS access lists to JSON",
    long_about = "Fetch an IP access list from an Arista EOS device over eAPI\n\
        (JSON-RPC at /command-api) and write the device's structured reply\n\
        to <ACL>.json with 4-space indentation.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "ACLSNAP_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Device hostname or IP (overrides profile)
    #[arg(long, short = 'H', env = "ACLSNAP_HOST", global = true)]
    pub host: Option<String>,

    /// Login username
    #[arg(long, short = 'u', env = "ACLSNAP_USERNAME", global = true)]
    pub username: Option<String>,

    /// Login password
    #[arg(long, env = "ACLSNAP_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Enable-mode secret, if the device asks for one
    #[arg(
        long,
        env = "ACLSNAP_ENABLE_SECRET",
        global = true,
        hide_env_values = true
    )]
    pub enable_secret: Option<String>,

    /// Transport scheme for eAPI
    #[arg(long, short = 't', env = "ACLSNAP_TRANSPORT", global = true)]
    pub transport: Option<TransportArg>,

    /// eAPI port (defaults to 443 for https, 80 for http)
    #[arg(long, env = "ACLSNAP_PORT", global = true)]
    pub port: Option<u16>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ACLSNAP_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 60]
    #[arg(long, env = "ACLSNAP_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    /// HTTPS (default)
    Https,
    /// Plain HTTP
    Http,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one ACL and write it as JSON
    #[command(alias = "x")]
    Export(ExportArgs),

    /// Prompt for device, credentials, and ACL name, then export
    #[command(alias = "i")]
    Interactive(InteractiveArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Write roff man pages for every command into a directory
    Manpages(ManpagesArgs),
}

// ── Export ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Name of the IP access list on the device
    pub acl: String,

    /// Output file [default: <ACL>.json in the working directory]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Output file [default: <ACL>.json in the working directory]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive profile setup wizard
    Init,

    /// Show the current configuration (secrets masked)
    Show,

    /// List configured profiles
    Profiles,

    /// Make a profile the default
    Use {
        /// Profile name
        name: String,
    },

    /// Store the active profile's password in the system keyring
    SetPassword,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

// ── Man pages ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ManpagesArgs {
    /// Directory to write `aclsnap.1`, `aclsnap-export.1`, ... into
    pub dir: PathBuf,
}
