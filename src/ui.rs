//! Human-facing status lines

use console::style;

use crate::domain::Resolution;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One-line summary of a resolved version and its channel.
pub fn format_resolution(resolution: &Resolution) -> String {
    match (resolution.version(), resolution.dist_tag(), resolution.error()) {
        (Some(version), Some(dist_tag), _) => format!("{} ({})", version, dist_tag),
        (Some(version), None, _) => version.to_string(),
        (None, _, Some(error)) => error.to_string(),
        (None, _, None) => String::new(),
    }
}
