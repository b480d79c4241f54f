//! Public URL construction for assets.
//!
//! Every manifest value has the shape:
//!
//! ```text
//! <base>/<url-encoded-relative-path>?v=<mtime>
//! ```
//!
//! The relative path is normalized to forward slashes and each segment is
//! percent-encoded independently, so the separators themselves never get
//! encoded. The `?v=` query parameter carries the file's modification time
//! in Unix seconds: any change to the file changes the URL, forcing clients
//! past their cache.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::path::{Component, Path};

/// Everything except alphanumerics and the unreserved marks `-_.~` gets
/// percent-encoded within a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a root-relative path for embedding in a URL.
///
/// Separators are normalized to `/` regardless of platform; each segment is
/// percent-encoded on its own.
pub fn encode_rel_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(
                utf8_percent_encode(&seg.to_string_lossy(), SEGMENT).to_string(),
            ),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the full public URL for an asset: base, encoded path, cache-buster.
///
/// `base` must not end with a slash (config loading guarantees this).
pub fn asset_url(base: &str, rel_path: &Path, mtime: u64) -> String {
    format!("{base}/{}?v={mtime}", encode_rel_path(rel_path))
}
