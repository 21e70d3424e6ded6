//! Command handlers: bridge CLI args -> core pipeline -> operator output.

pub mod config_cmd;
pub mod export;
pub mod interactive;
pub mod manpages;

use crate::error::CliError;

/// Map a dialoguer / interactive I/O failure into CliError.
pub(crate) fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
