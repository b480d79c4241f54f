//! Filesystem scanning.
//!
//! Walks the scan root and produces the list of [`Asset`]s the manifest is
//! built from. The walk prunes unwanted directories before descending into
//! them, so a `node_modules` full of package images never costs any I/O.
//!
//! ## Pruning Rules
//!
//! A directory is pruned (with its whole subtree) when its name is in the
//! configured skip-set or starts with a dot. Files are kept only when their
//! extension matches the configured set, case-insensitively. Everything else
//! — sidecars, config files, the previous `manifest.json` — falls out of the
//! extension filter naturally.
//!
//! ## Ordering
//!
//! Filesystem enumeration order is not stable across platforms, and the
//! manifest's collision suffixes (`-2`, `-3`, …) depend on the order assets
//! are seen. [`scan`] therefore sorts the result lexicographically by
//! relative path, making reruns over an unchanged tree byte-identical.

use crate::config::BuildConfig;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A discovered image file.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Absolute (or root-joined) path, used for stat and sidecar lookup.
    pub path: PathBuf,
    /// Path relative to the scan root, used for identifiers and URLs.
    pub rel_path: PathBuf,
    /// Last modification time in integer Unix seconds (cache-buster value).
    pub mtime: u64,
}

/// Enumerate all image assets under `root`, sorted by relative path.
pub fn scan(root: &Path, config: &BuildConfig) -> Result<Vec<Asset>, ScanError> {
    let mut assets = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if !entry.file_type().is_dir() || entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !config.skips_dir(&name)
    });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_image_extension(entry.path(), config) {
            continue;
        }

        let path = entry.path().to_path_buf();
        // strip_prefix cannot fail: the walk started at root
        let rel_path = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_path_buf();
        let mtime = modified_unix_secs(&entry.metadata()?);

        assets.push(Asset { path, rel_path, mtime });
    }

    assets.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(assets)
}

fn has_image_extension(path: &Path, config: &BuildConfig) -> bool {
    path.extension()
        .map(|e| config.matches_extension(&e.to_string_lossy()))
        .unwrap_or(false)
}

/// Modification time as whole Unix seconds; pre-epoch mtimes clamp to 0.
fn modified_unix_secs(metadata: &std::fs::Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn rel_paths(assets: &[Asset]) -> Vec<String> {
        assets
            .iter()
            .map(|a| a.rel_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn finds_images_recursively() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("photos/trips")).unwrap();
        fs::write(tmp.path().join("logo.png"), "img").unwrap();
        fs::write(tmp.path().join("photos/cat.jpg"), "img").unwrap();
        fs::write(tmp.path().join("photos/trips/rome.webp"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(
            rel_paths(&assets),
            vec!["logo.png", "photos/cat.jpg", "photos/trips/rome.webp"]
        );
    }

    #[test]
    fn non_image_files_excluded() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("cat.jpg"), "img").unwrap();
        fs::write(tmp.path().join("cat.jpg.id"), "custom").unwrap();
        fs::write(tmp.path().join("notes.txt"), "text").unwrap();
        fs::write(tmp.path().join("manifest.json"), "{}").unwrap();
        fs::write(tmp.path().join("noext"), "data").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(rel_paths(&assets), vec!["cat.jpg"]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("SHOUT.JPG"), "img").unwrap();
        fs::write(tmp.path().join("mixed.PnG"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(assets.len(), 2);
    }

    #[test]
    fn skip_dirs_pruned_at_any_depth() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/node_modules/pkg")).unwrap();
        fs::create_dir_all(tmp.path().join(".git/objects")).unwrap();
        fs::write(tmp.path().join("a/node_modules/pkg/icon.png"), "img").unwrap();
        fs::write(tmp.path().join(".git/objects/logo.jpg"), "img").unwrap();
        fs::write(tmp.path().join("a/keep.jpg"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(rel_paths(&assets), vec!["a/keep.jpg"]);
    }

    #[test]
    fn dot_dirs_pruned_even_when_not_in_skip_set() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".cache")).unwrap();
        fs::write(tmp.path().join(".cache/thumb.jpg"), "img").unwrap();
        fs::write(tmp.path().join("photo.jpg"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(rel_paths(&assets), vec!["photo.jpg"]);
    }

    #[test]
    fn dot_files_at_root_still_filtered_by_extension() {
        // Only directories are pruned by the dot rule; a dot-prefixed image
        // file passes the extension filter like any other file.
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden.jpg"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(assets.len(), 1);
    }

    #[test]
    fn result_sorted_by_relative_path() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("z")).unwrap();
        fs::create_dir_all(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("z/1.jpg"), "img").unwrap();
        fs::write(tmp.path().join("a/2.jpg"), "img").unwrap();
        fs::write(tmp.path().join("m.jpg"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert_eq!(rel_paths(&assets), vec!["a/2.jpg", "m.jpg", "z/1.jpg"]);
    }

    #[test]
    fn mtime_is_plausible_unix_seconds() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("cat.jpg"), "img").unwrap();

        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        // Written just now — anything past 2020 is fine
        assert!(assets[0].mtime > 1_577_836_800);
    }

    #[test]
    fn empty_tree_yields_no_assets() {
        let tmp = TempDir::new().unwrap();
        let assets = scan(tmp.path(), &BuildConfig::default()).unwrap();
        assert!(assets.is_empty());
    }
}
