//! Pure formatting functions for console output.
//!
//! Status and success lines go to stdout; warnings and errors go to stderr
//! so they stay visible when stdout is captured by CI.

use console::style;
use std::path::PathBuf;

use crate::domain::ReleasePlan;
use crate::warning::ReleaseWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// First seven characters of a commit hash.
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(7) {
        Some((end, _)) => &hash[..end],
        None => hash,
    }
}

/// Display the releases that will be published for a tag.
///
/// Aliases that get recreated are marked `(update)`.
///
/// # Arguments
/// * `reference` - The tag being released
/// * `target` - Commit the releases point at
/// * `plan` - Releases in publishing order
/// * `files` - Attachments uploaded to every release
pub fn display_release_plan(reference: &str, target: &str, plan: &ReleasePlan, files: &[PathBuf]) {
    let short_target = short_hash(target);

    println!(
        "\n{}",
        style(format!("Releasing {} at {}", reference, short_target)).bold()
    );
    for release in plan.releases() {
        if release.update {
            println!("  - {} {}", release.id, style("(update)").dim());
        } else {
            println!("  - {}", release.id);
        }
    }

    if files.is_empty() {
        println!("{}", style("No attachments").underlined());
    } else {
        println!("{}", style(format!("{} attachments:", files.len())).underlined());
        for file in files {
            println!("  {}", file.display());
        }
    }
}
