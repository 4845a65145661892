use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use super::{AssetListing, AssetStore, StoreError};

/// Asset store backed by a packaged asset directory on the local filesystem.
///
/// This is the desktop rendition of the bundle the build step packages into
/// the application. The directory is treated as read-only; nothing here
/// creates, modifies, or caches entries.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Opens the store rooted at `root`.
    ///
    /// Fails if `root` does not exist or is not a directory. This runs in
    /// host-shell startup code, before any bridge is constructed, so the
    /// error is surfaced to the caller rather than absorbed.
    pub fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        let meta = fs::metadata(&root)
            .with_context(|| format!("failed to open asset root {}", root.display()))?;
        if !meta.is_dir() {
            anyhow::bail!("asset root {} is not a directory", root.display());
        }
        Ok(Self { root })
    }

    fn resolve(&self, path: &str) -> PathBuf {
        // Asset paths are forward-slash-delimited regardless of platform.
        path.split('/')
            .filter(|seg| !seg.is_empty())
            .fold(self.root.clone(), |p, seg| p.join(seg))
    }
}

impl AssetStore for DirStore {
    fn list(&self, path: &str) -> Result<AssetListing, StoreError> {
        let dir = self.resolve(path);
        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| StoreError::from_io(path, e))? {
            let entry = entry.map_err(|e| StoreError::from_io(path, e))?;
            entries.push(entry.file_name().to_string_lossy().into_owned());
        }
        // Provider order: lexicographic. The OS returns directory entries in
        // an arbitrary order; sorting keeps repeated queries deterministic.
        entries.sort();
        Ok(entries)
    }
}
