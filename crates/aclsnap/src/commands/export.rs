//! `aclsnap export <ACL>`: fetch one ACL with stored or flag credentials.

use std::path::PathBuf;

use tracing::debug;

use aclsnap_core::{ConnectionConfig, default_output_path};

use crate::cli::{ExportArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: ExportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let acl_name = args.acl.trim();
    validate_acl_name(acl_name)?;
    let connection = config::build_connection_config(global)?;
    run_export(&connection, acl_name, args.output, global).await
}

/// Run the export pipeline and print its outcome.
///
/// A rejected or empty ACL is reported and counts as success; only failures
/// to reach the device or to write the file become errors.
pub(crate) async fn run_export(
    connection: &ConnectionConfig,
    acl_name: &str,
    output_path: Option<PathBuf>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| default_output_path(acl_name));

    let bar = output::spinner(
        &format!("Fetching ACL '{acl_name}' from {}", connection.host),
        global.quiet,
    );
    let result = aclsnap_core::export(connection, acl_name, &path).await;
    bar.finish_and_clear();

    let outcome = result?;
    debug!(?outcome, "export finished");

    let text = output::render_outcome(&outcome, acl_name, output::should_color(&global.color));
    output::print_output(&text, global.quiet);
    Ok(())
}

/// Reject blank names (callers pass the name already trimmed); the device
/// judges everything else.
pub(crate) fn validate_acl_name(acl_name: &str) -> Result<(), CliError> {
    if acl_name.is_empty() {
        return Err(CliError::Validation {
            field: "acl".into(),
            reason: "ACL name cannot be empty".into(),
        });
    }
    Ok(())
}
