//! Formatting functions for UI output.
//!
//! `format_*` functions build the text and are unit tested; `display_*`
//! functions print it.

use console::style;

use crate::boundary::ReleaseWarning;

/// The summary line shown before writing, e.g. "2.4.9 -> 2.5.0".
pub fn format_version_change(old: &str, new: &str) -> String {
    format!("{} -> {}", old, new)
}

/// "v2.5.0 => 2.5.0", or just the version when the tag needed no cleanup.
pub fn format_derived_version(tag: &str, candidate: &str) -> String {
    if tag == candidate {
        candidate.to_string()
    } else {
        format!("{} => {}", tag, candidate)
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a release warning in yellow.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("WARNING:").yellow(), warning);
}

/// Print the version derived from the latest tag.
pub fn display_derived_version(tag: &str, candidate: &str) {
    println!("{}", format_derived_version(tag, candidate));
}

/// Print the validation failure line on stdout, with detail on stderr.
pub fn display_invalid_version(detail: &str) {
    println!("invalid version number");
    eprintln!("{} {}", style("→").yellow(), detail);
    eprintln!("  expected MAJOR.MINOR.PATCH with no zero in MAJOR");
}

/// Print "old -> new".
pub fn display_version_change(old: &str, new: &str) {
    println!("{}", format_version_change(old, new));
}

pub fn display_release_creating(version: &str) {
    println!("creating release {}", version);
}

pub fn display_release_created(version: &str) {
    println!("{} release {} created", style("✓").green(), version);
}

/// Report what a dry run would have written.
pub fn display_dry_run(path: &str, version: &str) {
    println!(
        "{} dry run: would set version {} in {}",
        style("→").yellow(),
        version,
        path
    );
}
