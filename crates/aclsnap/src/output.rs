//! Operator-facing output: outcome messages, color, progress spinner.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use aclsnap_core::ExportOutcome;

use crate::cli::ColorMode;

pub const NO_DATA_MESSAGE: &str = "No ACL data to write.";

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// A spinner on stderr, hidden when quiet or when stderr is not a terminal.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_owned());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Render the operator message for an export outcome.
pub fn render_outcome(outcome: &ExportOutcome, acl_name: &str, color: bool) -> String {
    match outcome {
        ExportOutcome::Written { path, .. } => {
            let line = format!("ACL data written to '{}'", path.display());
            if color {
                line.green().to_string()
            } else {
                line
            }
        }
        ExportOutcome::Empty => paint_warning(NO_DATA_MESSAGE, color),
        ExportOutcome::Rejected(failure) => {
            let line = format!("Error retrieving ACL '{acl_name}': {failure}");
            let line = if color { line.red().to_string() } else { line };
            format!("{line}\n{}", paint_warning(NO_DATA_MESSAGE, color))
        }
    }
}

fn paint_warning(text: &str, color: bool) -> String {
    if color {
        text.yellow().to_string()
    } else {
        text.to_owned()
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use aclsnap_core::CommandFailure;

    use super::*;

    #[test]
    fn written_names_the_file() {
        let outcome = ExportOutcome::Written {
            path: PathBuf::from("edge-in.json"),
            bytes: 42,
        };
        assert_eq!(
            render_outcome(&outcome, "edge-in", false),
            "ACL data written to 'edge-in.json'"
        );
    }

    #[test]
    fn empty_says_nothing_to_write() {
        assert_eq!(
            render_outcome(&ExportOutcome::Empty, "unused", false),
            "No ACL data to write."
        );
    }

    #[test]
    fn rejected_reports_device_error_then_no_data() {
        let outcome = ExportOutcome::Rejected(CommandFailure {
            code: 1002,
            message: "invalid command".into(),
            errors: vec!["% Access list not found".into()],
        });
        assert_eq!(
            render_outcome(&outcome, "doesnotexist", false),
            "Error retrieving ACL 'doesnotexist': Error [1002]: invalid command \
             [% Access list not found]\nNo ACL data to write."
        );
    }

    #[test]
    fn color_wraps_in_escape_codes() {
        let rendered = render_outcome(&ExportOutcome::Empty, "unused", true);
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains(NO_DATA_MESSAGE));
    }
}
