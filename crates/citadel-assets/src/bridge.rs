//! The listing bridge between engine code and the host's asset store.
//!
//! Engine code runs across an interop boundary where error values are
//! neither expected nor handled, so the bridge converts every provider
//! failure into a logged diagnostic plus an empty listing. The cost is that
//! "path has no assets" and "query failed" look the same to the caller;
//! that trade is part of the contract engine code relies on.

use std::sync::Arc;

use crate::store::{AssetListing, AssetStore};

/// Capability consumed by engine code: something that can list assets by path.
///
/// The engine host acquires this at startup through its dependency-injection
/// point rather than reaching for any ambient global.
pub trait ListAssets {
    /// Lists the entries directly under `path`.
    ///
    /// Never fails from the caller's perspective; an unanswerable query
    /// yields an empty listing.
    fn list_assets(&self, path: &str) -> AssetListing;
}

/// Bridge adapter over the host's asset-store query facility.
///
/// Stateless across calls: each query is one synchronous pass through the
/// injected store handle, with no caching and no retries. The call may block
/// for the duration of the store query, which is acceptable against a
/// packaged local read-only store.
pub struct AssetPathLister {
    store: Arc<dyn AssetStore + Send + Sync>,
}

impl AssetPathLister {
    /// Creates a lister over the injected store handle.
    pub fn new(store: Arc<dyn AssetStore + Send + Sync>) -> Self {
        Self { store }
    }
}

impl ListAssets for AssetPathLister {
    fn list_assets(&self, path: &str) -> AssetListing {
        match self.store.list(path) {
            Ok(entries) => entries,
            Err(err) => {
                // Callers across the boundary receive no error values; the
                // failure is recorded here and degrades to an empty listing.
                log::warn!("asset listing failed for {path:?}: {err}");
                AssetListing::new()
            }
        }
    }
}
