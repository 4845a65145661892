//! Read-only asset-store listing bridge for the **Citadel** engine host.
//!
//! The host application shell packages assets at build time into a
//! read-only store; natively-executing engine code needs exactly one query
//! against it — "what entries exist directly under this asset path?" —
//! answered across the host/engine boundary. This crate is that bridge and
//! nothing else: no content loading, no caching, no write access.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`store`] | `AssetStore` seam, `DirStore`, `MemStore`, `StoreError` |
//! | [`bridge`] | `ListAssets` capability, `AssetPathLister` adapter |
//! | [`handle`] | process-wide store handle installed by the shell |
//! | [`logging`] | diagnostic-channel (`env_logger`) initialization |
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use citadel_assets::{AssetPathLister, ListAssets, MemStore};
//!
//! let store = Arc::new(MemStore::from_paths([
//!     "images/logo.png",
//!     "sounds/theme.ogg",
//! ]));
//! let lister = AssetPathLister::new(store);
//!
//! assert_eq!(lister.list_assets("images"), vec!["logo.png"]);
//! assert!(lister.list_assets("no/such/path").is_empty());
//! ```

pub mod bridge;
pub mod handle;
pub mod logging;
pub mod store;

pub use bridge::{AssetPathLister, ListAssets};
pub use store::{AssetListing, AssetStore, DirStore, MemStore, SharedStore, StoreError};
