use std::fmt;
use std::io;

/// An I/O-style failure raised by an asset-store provider.
///
/// This is the single error kind in the system. It never crosses the
/// bridge boundary; [`AssetPathLister`](crate::AssetPathLister) absorbs it
/// into a logged diagnostic plus an empty listing.
#[derive(Debug)]
pub enum StoreError {
    /// The queried path does not exist in the store.
    NotFound { path: String },
    /// The path exists (or could not be checked) but the listing query failed.
    Io { path: String, source: io::Error },
}

impl StoreError {
    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Classifies an `io::Error` from a listing query against `path`.
    pub(crate) fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::Io { path: path.into(), source }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "asset path {path:?} not found"),
            Self::Io { path, source } => write!(f, "asset query for {path:?} failed: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_classifies_not_found() {
        let err = StoreError::from_io("missing", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn from_io_keeps_other_kinds() {
        let err = StoreError::from_io("locked", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn io_variant_chains_source() {
        use std::error::Error;
        let err = StoreError::from_io("x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.source().is_some());
    }
}
