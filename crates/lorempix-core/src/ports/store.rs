//! Image store port: the storage surface the core depends on.
//!
//! Implementations cover the read-only source catalog and the read-write
//! variant cache. The cache has no index; the filesystem (or whatever backs
//! the store) is the sole source of truth for which variants exist.

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};

/// Readable byte stream for a source image.
pub type SourceReader = Box<dyn AsyncRead + Send + Unpin>;

/// Writable byte stream for a freshly created artifact.
pub type ArtifactWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Storage abstraction over the source catalog and the variant cache.
///
/// Exactly three capabilities: enumerate the source directory, open one
/// source for reading, create one artifact with create-if-absent semantics.
/// There is deliberately no `exists()`; presence is learned from the result
/// of [`create_artifact`](ImageStore::create_artifact), which keeps
/// check-then-act races out of every implementation.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// List the raw entries of the source directory.
    ///
    /// No filtering happens here; hidden-entry rules belong to the selector.
    async fn list_sources(&self) -> Result<Vec<String>, StoreError>;

    /// Open the named source image for reading.
    async fn open_source(&self, name: &str) -> Result<SourceReader, StoreError>;

    /// Exclusively create the named artifact in the variant cache.
    ///
    /// Must fail with [`StoreError::AlreadyExists`] when the artifact is
    /// already present (complete or still being written by someone else),
    /// and must never truncate or overwrite it.
    async fn create_artifact(&self, name: &str) -> Result<ArtifactWriter, StoreError>;
}

/// Errors surfaced by [`ImageStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Enumerating the source directory failed.
    #[error("cannot read source directory: {0}")]
    ListDir(#[source] std::io::Error),

    /// A source image could not be opened for reading.
    #[error("cannot open source '{name}': {source}")]
    OpenSource {
        /// Source filename as listed in the catalog.
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The artifact already exists, so exclusive creation was refused.
    ///
    /// Not a fault: callers treat this as "another request created (or is
    /// creating) the same variant".
    #[error("artifact '{0}' already exists")]
    AlreadyExists(String),

    /// Exclusive creation failed for a reason other than pre-existence.
    #[error("cannot create artifact '{name}': {source}")]
    CreateArtifact {
        /// Artifact filename in the variant cache.
        name: String,
        /// Underlying I/O failure, forwarded untouched.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Build an [`StoreError::OpenSource`] for `name`.
    pub fn open_source(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::OpenSource {
            name: name.into(),
            source,
        }
    }

    /// Build a [`StoreError::CreateArtifact`] for `name`.
    pub fn create_artifact(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::CreateArtifact {
            name: name.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_open_source_carries_cause() {
        let err = StoreError::open_source(
            "missing.png",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.png"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_create_artifact_preserves_io_kind() {
        let err = StoreError::create_artifact(
            "a-1_1.png",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        match err {
            StoreError::CreateArtifact { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
