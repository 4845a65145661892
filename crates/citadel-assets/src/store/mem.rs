use std::collections::{BTreeMap, BTreeSet};

use super::{AssetListing, AssetStore, StoreError};

/// In-memory asset store built from a flat manifest of bundled file paths.
///
/// Models the index an asset-packing step produces: hosts that carry their
/// asset manifest inside the binary register each bundled path once, and
/// intermediate directories come into existence implicitly. Listing order
/// is lexicographic and stable.
pub struct MemStore {
    /// Directory path (`""` is the root) mapped to its direct children.
    dirs: BTreeMap<String, BTreeSet<String>>,
}

impl MemStore {
    pub fn new() -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert(String::new(), BTreeSet::new());
        Self { dirs }
    }

    /// Builds a store from an iterator of bundled file paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for path in paths {
            store.add(path.as_ref());
        }
        store
    }

    /// Registers one bundled file path, such as `images/logo.png`.
    ///
    /// Every intermediate segment becomes a listable directory.
    pub fn add(&mut self, path: &str) -> &mut Self {
        let mut dir = String::new();
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        while let Some(segment) = segments.next() {
            self.dirs
                .entry(dir.clone())
                .or_default()
                .insert(segment.to_string());
            if segments.peek().is_some() {
                if !dir.is_empty() {
                    dir.push('/');
                }
                dir.push_str(segment);
                self.dirs.entry(dir.clone()).or_default();
            }
        }
        self
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetStore for MemStore {
    fn list(&self, path: &str) -> Result<AssetListing, StoreError> {
        match self.dirs.get(path) {
            Some(children) => Ok(children.iter().cloned().collect()),
            None => Err(StoreError::not_found(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> MemStore {
        MemStore::from_paths(["images/logo.png", "images/bg.png", "sounds/theme.ogg"])
    }

    #[test]
    fn empty_store_has_empty_root() {
        assert!(MemStore::new().list("").unwrap().is_empty());
    }

    #[test]
    fn root_lists_top_level_entries() {
        assert_eq!(scenario().list("").unwrap(), vec!["images", "sounds"]);
    }

    #[test]
    fn lists_direct_children_only() {
        let store = MemStore::from_paths(["a/b/c.txt", "a/d.txt"]);
        assert_eq!(store.list("a").unwrap(), vec!["b", "d.txt"]);
        assert_eq!(store.list("a/b").unwrap(), vec!["c.txt"]);
    }

    #[test]
    fn intermediate_directories_are_implicit() {
        let store = MemStore::from_paths(["deep/er/est/file.bin"]);
        assert_eq!(store.list("deep").unwrap(), vec!["er"]);
        assert_eq!(store.list("deep/er").unwrap(), vec!["est"]);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(matches!(
            scenario().list("missing").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        // Only directories are listable; a file's full path is unknown.
        assert!(scenario().list("images/logo.png").is_err());
    }

    #[test]
    fn duplicate_registration_is_idempotent() {
        let mut store = scenario();
        store.add("images/logo.png");
        assert_eq!(store.list("images").unwrap(), vec!["bg.png", "logo.png"]);
    }

    #[test]
    fn order_is_lexicographic_and_stable() {
        let store = MemStore::from_paths(["z.txt", "a.txt", "m.txt"]);
        assert_eq!(store.list("").unwrap(), vec!["a.txt", "m.txt", "z.txt"]);
        assert_eq!(store.list("").unwrap(), store.list("").unwrap());
    }
}
