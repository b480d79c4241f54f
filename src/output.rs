//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Build
//!
//! ```text
//! Wrote 3 entries to manifest.json
//! ```
//!
//! ## Check
//!
//! ```text
//! photos-cat
//!     https://example.com/app/photos/cat.jpg?v=1000
//! root-logo
//!     https://example.com/app/logo.png?v=1200
//!
//! 2 entries (dry run, nothing written)
//! ```

use crate::manifest::{MANIFEST_FILE, Manifest};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn entry_noun(count: usize) -> &'static str {
    if count == 1 { "entry" } else { "entries" }
}

/// Summary line for a completed build.
pub fn format_build_output(manifest: &Manifest) -> Vec<String> {
    vec![format!(
        "Wrote {} {} to {MANIFEST_FILE}",
        manifest.len(),
        entry_noun(manifest.len())
    )]
}

/// Full entry listing for `check`, identifier first, URL indented below.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    for (id, url) in manifest.iter() {
        lines.push(id.to_string());
        lines.push(format!("{}{url}", indent(1)));
    }
    if !manifest.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "{} {} (dry run, nothing written)",
        manifest.len(),
        entry_noun(manifest.len())
    ));
    lines
}

pub fn print_build_output(manifest: &Manifest) {
    for line in format_build_output(manifest) {
        println!("{line}");
    }
}

pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{line}");
    }
}
