//! Asset-store provider seam.
//!
//! The host runtime owns a read-only, hierarchical asset store packaged at
//! build time. This module defines the query facility the bridge consumes
//! ([`AssetStore`]) and the two shipped providers: [`DirStore`] over a
//! packaged asset directory and [`MemStore`] over an in-binary manifest.

mod dir;
mod error;
mod mem;

pub use dir::DirStore;
pub use error::StoreError;
pub use mem::MemStore;

use std::sync::Arc;

/// Ordered sequence of entry names returned for one listing query.
///
/// Entries are plain names (no path prefix, no metadata) of the files and
/// subdirectories directly under the queried path. Order is whatever the
/// provider returns.
pub type AssetListing = Vec<String>;

/// Read-only, hierarchical asset-store query facility.
///
/// Implementors must be safe to query from multiple threads; both shipped
/// providers are immutable once constructed.
pub trait AssetStore {
    /// Lists the entries directly under `path`.
    ///
    /// `path` is relative and forward-slash-delimited; the empty string
    /// denotes the store root. No `.`/`..` traversal semantics are defined —
    /// behavior for such input is provider-dependent. A path with no entries
    /// is a success with an empty listing, distinct from a failed query.
    fn list(&self, path: &str) -> Result<AssetListing, StoreError>;
}

/// Shared handle to the process-wide asset store.
///
/// The host runtime creates one of these at startup and keeps it alive for
/// the application lifetime; see [`crate::handle`].
pub type SharedStore = Arc<dyn AssetStore + Send + Sync>;
