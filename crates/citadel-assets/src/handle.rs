//! Process-wide asset-store handle.
//!
//! The host runtime owns a single shared handle to the packaged asset store
//! for the lifetime of the application process. The shell installs it once
//! at startup and passes it to [`AssetPathLister::new`](crate::AssetPathLister::new)
//! when wiring the bridge; bridge code never looks the handle up ambiently.

use state::InitCell;

use crate::store::SharedStore;

static STORE: InitCell<SharedStore> = InitCell::new();

/// Installs the process-wide store handle.
///
/// The first install wins and stays in place until process exit. Returns
/// `false` if a handle was already installed; the existing handle is kept
/// and the attempt is logged.
pub fn install(store: SharedStore) -> bool {
    let installed = STORE.set(store);
    if !installed {
        log::warn!("asset store handle already installed; keeping the existing one");
    }
    installed
}

/// Returns the installed handle, if any.
///
/// Startup wiring clones this into the bridge; `None` means the shell has
/// not installed a store yet.
pub fn get() -> Option<&'static SharedStore> {
    STORE.try_get()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::bridge::{AssetPathLister, ListAssets};
    use crate::store::MemStore;

    // One test covers the whole lifecycle: the cell is process-global, so
    // install order across multiple tests would be nondeterministic.
    #[test]
    fn install_once_then_wire_bridge() {
        let store: SharedStore = Arc::new(MemStore::from_paths(["fonts/mono.ttf"]));
        assert!(install(store));

        // Second install is rejected, first handle kept.
        let other: SharedStore = Arc::new(MemStore::new());
        assert!(!install(other));

        let handle = get().expect("handle installed above");
        let lister = AssetPathLister::new(handle.clone());
        assert_eq!(lister.list_assets("fonts"), vec!["mono.ttf"]);
    }
}
