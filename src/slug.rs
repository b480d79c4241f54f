//! Centralized slug normalization and identifier derivation.
//!
//! Every identifier in the manifest passes through [`slug`], whether it comes
//! from a sidecar override or is derived from the file's location. This module
//! is the single place where arbitrary text becomes a URL-safe token.
//!
//! ## Identifier Convention
//!
//! Default identifiers combine the parent directory name and the file stem:
//! - `photos/cat.jpg` → `photos-cat`
//! - `2024 Trips/Day One.jpeg` → `2024-trips-day-one`
//! - `logo.png` (at the scan root) → `root-logo`

use std::path::Path;

/// Token used in place of the parent segment for files at the scan root.
pub const ROOT_SEGMENT: &str = "root";

/// Normalize arbitrary text into a URL/identifier-safe token.
///
/// Lowercases alphanumerics and collapses every run of non-alphanumeric
/// characters to a single hyphen, with no leading or trailing hyphen:
/// - `"My Custom ID!!"` → `"my-custom-id"`
/// - `"Day --- One"` → `"day-one"`
/// - `"... "` → `""`
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_sep = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Derive the default identifier for a root-relative path.
///
/// Produces `<parent-slug>-<stem-slug>`, where the parent segment is the
/// immediate parent directory name. Files directly at the scan root (or under
/// a parent whose name slugs to nothing) use [`ROOT_SEGMENT`] instead.
pub fn derive_id(rel_path: &Path) -> String {
    let parent = rel_path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| slug(&n.to_string_lossy()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| ROOT_SEGMENT.to_string());

    let stem = rel_path
        .file_stem()
        .map(|s| slug(&s.to_string_lossy()))
        .unwrap_or_default();

    format!("{parent}-{stem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slug("My Custom ID!!"), "my-custom-id");
    }

    #[test]
    fn collapses_long_separator_runs() {
        assert_eq!(slug("a --- b"), "a-b");
        assert_eq!(slug("a____//__b"), "a-b");
    }

    #[test]
    fn strips_leading_and_trailing_separators() {
        assert_eq!(slug("  hello  "), "hello");
        assert_eq!(slug("--wip--"), "wip");
    }

    #[test]
    fn empty_when_no_alphanumerics() {
        assert_eq!(slug("!!! .. ---"), "");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(slug("2024 Trips"), "2024-trips");
    }

    #[test]
    fn output_is_safe_for_arbitrary_input() {
        for input in ["héllo wörld", "a\tb\nc", "ドキュメント", "x%20y?z=1"] {
            let s = slug(input);
            assert!(
                s.chars().all(|c| c == '-' || c.is_alphanumeric()),
                "unsafe char in {s:?}"
            );
            assert!(
                !s.starts_with('-') && !s.ends_with('-'),
                "edge hyphen in {s:?}"
            );
        }
    }

    #[test]
    fn derive_uses_parent_and_stem() {
        assert_eq!(derive_id(Path::new("photos/cat.jpg")), "photos-cat");
        assert_eq!(
            derive_id(Path::new("2024 Trips/Day One.jpeg")),
            "2024-trips-day-one"
        );
    }

    #[test]
    fn derive_uses_only_immediate_parent() {
        assert_eq!(derive_id(Path::new("a/b/c/dusk.png")), "c-dusk");
    }

    #[test]
    fn derive_at_root_uses_root_segment() {
        assert_eq!(derive_id(Path::new("logo.png")), "root-logo");
    }

    #[test]
    fn derive_falls_back_to_root_for_unsluggable_parent() {
        assert_eq!(derive_id(Path::new("___/logo.png")), "root-logo");
    }
}
