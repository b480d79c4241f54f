//! # Lensmap
//!
//! Builds an ID-to-URL manifest for image assets on a static site. Point it
//! at a directory tree and it writes `manifest.json` mapping a stable
//! symbolic identifier to a public, cache-busted URL for every image found:
//!
//! ```json
//! {
//!   "photos-cat": "https://example.github.io/imagesWeb/photos/cat.jpg?v=1736164512",
//!   "root-logo": "https://example.github.io/imagesWeb/logo.png?v=1735926001"
//! }
//! ```
//!
//! The site then references images by ID instead of raw path, so files can
//! be renamed or reorganized without touching page content — only the
//! manifest changes.
//!
//! # Pipeline
//!
//! One pass, three small stages:
//!
//! ```text
//! 1. Scan      walk the tree, prune skip-dirs, filter by extension
//! 2. Resolve   sidecar override or <parent>-<stem> ID, dedupe with -2, -3, …
//! 3. Write     manifest.json at the scan root + console report
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | directory walk, pruning, extension filter, mtime capture |
//! | [`slug`] | slug normalization and default identifier derivation |
//! | [`manifest`] | identifier resolution, collision suffixing, JSON output |
//! | [`url`] | percent-encoded URL construction with `?v=<mtime>` cache-buster |
//! | [`config`] | `lensmap.toml` loading, stock defaults, validation |
//! | [`output`] | CLI output formatting — pure `format_*` fns + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## IDs From Location, Overrides From Sidecars
//!
//! The default identifier is `<parent-dir>-<file-stem>`, slugged. That covers
//! the common case with zero configuration. When a file needs a permanent
//! name decoupled from its location, a sidecar file (`cat.jpg.id`) pins it.
//! No database, no front-matter: the filesystem is the source of truth.
//!
//! ## Deterministic Output
//!
//! Filesystem enumeration order varies by platform, and collision suffixes
//! depend on traversal order. The scan sorts assets by relative path and the
//! manifest keeps keys sorted, so an unchanged tree always produces a
//! byte-identical `manifest.json` — diff-friendly and safe to commit.
//!
//! ## Mtime As Cache-Buster
//!
//! The `?v=` token is the file's modification time in Unix seconds. It is
//! stable while the file is untouched and changes whenever the file does,
//! which is exactly the invalidation granularity a static host needs. No
//! content hashing, no cache state between runs.
//!
//! ## Fail Loud
//!
//! Any I/O error aborts the run with a nonzero status. A manifest silently
//! missing entries is worse than no manifest, so nothing is caught and
//! papered over.

pub mod config;
pub mod manifest;
pub mod output;
pub mod scan;
pub mod slug;
pub mod url;
