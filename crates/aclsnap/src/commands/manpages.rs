//! `aclsnap manpages`: render the clap command tree as roff man pages.

use std::fs;
use std::path::Path;

use clap::CommandFactory;
use tracing::debug;

use crate::cli::{Cli, GlobalOpts, ManpagesArgs};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ManpagesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    fs::create_dir_all(&args.dir).map_err(|source| CliError::WriteFailed {
        path: args.dir.display().to_string(),
        source,
    })?;

    let written = write_manpages(&Cli::command(), &args.dir)?;
    output::print_output(
        &format!("Wrote {written} man pages to '{}'", args.dir.display()),
        global.quiet,
    );
    Ok(())
}

/// One page per command, named `<parent>-<sub>.1` for subcommands.
/// Returns the number of pages written.
fn write_manpages(cmd: &clap::Command, dir: &Path) -> Result<usize, CliError> {
    let name = cmd.get_name().to_owned();
    let path = dir.join(format!("{name}.1"));

    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buf)?;
    fs::write(&path, buf).map_err(|source| CliError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "man page written");

    let mut written = 1;
    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        written += write_manpages(&sub, dir)?;
    }
    Ok(written)
}
