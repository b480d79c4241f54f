//! Manifest construction and serialization.
//!
//! Ties the stages together: takes the scanned [`Asset`] list, resolves one
//! unique identifier per asset, pairs it with the asset's public URL, and
//! writes the result as indented JSON to `manifest.json` at the scan root.
//!
//! ## Identifier Resolution
//!
//! First available wins:
//! 1. Sidecar override — a file at `<asset-path>.id` whose trimmed content,
//!    slugged, is non-empty
//! 2. Derived — `<parent-dir-slug>-<stem-slug>` (see [`crate::slug`])
//!
//! ## Collisions
//!
//! Two assets can resolve to the same identifier (`photos/cat.jpg` and
//! `photos/cat.png`, or two sidecars with the same text). The second and
//! later takers get `-2`, `-3`, … appended — the smallest unused integer.
//! Assets arrive sorted by relative path, so suffix assignment is stable
//! across runs.
//!
//! ## Lifecycle
//!
//! The manifest is rebuilt from scratch on every run. There is no merging
//! with a previously written `manifest.json`; the file is overwritten.

use crate::config::BuildConfig;
use crate::scan::{self, Asset, ScanError};
use crate::slug::{derive_id, slug};
use crate::url::asset_url;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Output filename, written at the scan root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Extension appended to an asset path to locate its sidecar override.
const SIDECAR_SUFFIX: &str = ".id";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The identifier → URL mapping produced by one build run.
///
/// Serializes as a flat JSON object. Keys are unique by construction; the
/// map keeps them sorted, which together with the sorted scan makes the
/// written file deterministic.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pretty-printed JSON, as written to disk.
    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Write `manifest.json` into `root`, overwriting any existing file.
    pub fn write(&self, root: &Path) -> Result<(), BuildError> {
        fs::write(root.join(MANIFEST_FILE), self.to_json()?)?;
        Ok(())
    }
}

/// Scan `root` and build the full manifest.
pub fn build(root: &Path, config: &BuildConfig) -> Result<Manifest, BuildError> {
    let assets = scan::scan(root, config)?;

    let mut entries = BTreeMap::new();
    let mut seen = BTreeSet::new();

    for asset in &assets {
        let candidate = resolve_id(asset)?;
        let id = disambiguate(candidate, &seen);
        seen.insert(id.clone());
        entries.insert(id, asset_url(&config.base_url, &asset.rel_path, asset.mtime));
    }

    Ok(Manifest { entries })
}

/// Sidecar override if present and non-empty after slugging, else derived.
fn resolve_id(asset: &Asset) -> Result<String, BuildError> {
    let mut sidecar = asset.path.clone().into_os_string();
    sidecar.push(SIDECAR_SUFFIX);
    let sidecar = Path::new(&sidecar);

    if sidecar.exists() {
        let custom = slug(fs::read_to_string(sidecar)?.trim());
        if !custom.is_empty() {
            return Ok(custom);
        }
    }
    Ok(derive_id(&asset.rel_path))
}

/// Append `-2`, `-3`, … until the identifier is unused.
fn disambiguate(candidate: String, seen: &BTreeSet<String>) -> String {
    if !seen.contains(&candidate) {
        return candidate;
    }
    let mut n = 2u64;
    loop {
        let suffixed = format!("{candidate}-{n}");
        if !seen.contains(&suffixed) {
            return suffixed;
        }
        n += 1;
    }
}
