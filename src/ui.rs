//! Console output for a release run.
//!
//! These lines are informational only; nothing downstream parses them.

use console::style;

use crate::boundary::BoundaryWarning;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the tag the run starts from.
pub fn display_current_tag(tag: &str) {
    println!("Current: {}", tag);
}

/// Print the tag the run produced.
pub fn display_new_tag(tag: &str) {
    println!("New: {}", style(tag).green().bold());
}

/// Print a non-fatal warning in yellow.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("⚠").yellow(), warning);
}

/// Show which pull request decided the bump.
pub fn display_pull_labels(number: u64, labels: &[String]) {
    if labels.is_empty() {
        display_status(&format!("PR #{} has no labels", number));
    } else {
        display_status(&format!("PR #{} labels: {}", number, labels.join(", ")));
    }
}
