//! Filesystem-backed image store.
//!
//! Sources are opened read-only; artifacts are created with `create_new`, so
//! the open call itself refuses to touch an existing file and the filesystem
//! arbitrates concurrent creators. There is no exists-check anywhere in this
//! adapter.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};

use lorempix_core::ports::{ArtifactWriter, ImageStore, SourceReader, StoreError};

/// [`ImageStore`] over a source directory and a variant cache directory.
pub struct FsImageStore {
    source_dir: PathBuf,
    variants_dir: PathBuf,
}

impl FsImageStore {
    /// Create a store over the two directories.
    ///
    /// Neither directory is created here; bootstrap owns that.
    pub fn new(source_dir: impl Into<PathBuf>, variants_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            variants_dir: variants_dir.into(),
        }
    }

    /// The directory sources are read from.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// The directory artifacts are created in.
    pub fn variants_dir(&self) -> &Path {
        &self.variants_dir
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn list_sources(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = tokio::fs::read_dir(&self.source_dir)
            .await
            .map_err(StoreError::ListDir)?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(StoreError::ListDir)? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // read_dir order is platform-dependent; sort for stable output.
        names.sort();
        Ok(names)
    }

    async fn open_source(&self, name: &str) -> Result<SourceReader, StoreError> {
        let path = self.source_dir.join(name);
        let file = File::open(&path)
            .await
            .map_err(|e| StoreError::open_source(name, e))?;

        // On Unix a directory opens fine and only fails at first read.
        let metadata = file
            .metadata()
            .await
            .map_err(|e| StoreError::open_source(name, e))?;
        if metadata.is_dir() {
            return Err(StoreError::open_source(
                name,
                io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            ));
        }

        Ok(Box::new(file))
    }

    async fn create_artifact(&self, name: &str) -> Result<ArtifactWriter, StoreError> {
        let path = self.variants_dir.join(name);
        let result = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;

        match result {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(StoreError::AlreadyExists(name.to_string()))
            }
            Err(e) => Err(StoreError::create_artifact(name, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn store_in(root: &Path) -> FsImageStore {
        let source_dir = root.join("source_images");
        let variants_dir = root.join("loremimages");
        std::fs::create_dir_all(&source_dir).unwrap();
        std::fs::create_dir_all(&variants_dir).unwrap();
        FsImageStore::new(source_dir, variants_dir)
    }

    #[tokio::test]
    async fn test_listing_is_raw_and_sorted() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());
        for name in ["b.png", "a.png", ".hidden"] {
            std::fs::write(store.source_dir().join(name), b"x").unwrap();
        }

        let names = store.list_sources().await.unwrap();

        // Hidden entries are listed here; filtering them is the selector's job.
        assert_eq!(names, vec![".hidden", "a.png", "b.png"]);
    }

    #[tokio::test]
    async fn test_listing_missing_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(root.path().join("absent"), root.path().join("loremimages"));

        let err = store.list_sources().await.unwrap_err();

        assert!(matches!(err, StoreError::ListDir(_)));
    }

    #[tokio::test]
    async fn test_open_source_streams_the_file() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());
        std::fs::write(store.source_dir().join("photo.png"), b"pixel-data").unwrap();

        let mut reader = store.open_source("photo.png").await.unwrap();
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await.unwrap();

        assert_eq!(bytes, b"pixel-data");
    }

    #[tokio::test]
    async fn test_open_missing_source_fails_with_cause() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        let err = store.open_source("absent.png").await.map(|_| ()).unwrap_err();

        match err {
            StoreError::OpenSource { name, source } => {
                assert_eq!(name, "absent.png");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_directory_entry_is_not_openable() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());
        std::fs::create_dir(store.source_dir().join("nested")).unwrap();

        let err = store.open_source("nested").await.map(|_| ()).unwrap_err();

        assert!(matches!(err, StoreError::OpenSource { .. }));
    }

    #[tokio::test]
    async fn test_create_artifact_writes_a_new_file() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        let mut writer = store.create_artifact("photo-2_3.png").await.unwrap();
        writer.write_all(b"variant-bytes").await.unwrap();
        writer.shutdown().await.unwrap();

        let on_disk = std::fs::read(store.variants_dir().join("photo-2_3.png")).unwrap();
        assert_eq!(on_disk, b"variant-bytes");
    }

    #[tokio::test]
    async fn test_second_create_conflicts_and_preserves_content() {
        let root = tempfile::tempdir().unwrap();
        let store = store_in(root.path());

        let mut writer = store.create_artifact("photo-2_3.png").await.unwrap();
        writer.write_all(b"first-writer").await.unwrap();
        writer.shutdown().await.unwrap();
        drop(writer);

        let err = store.create_artifact("photo-2_3.png").await.map(|_| ()).unwrap_err();

        assert!(matches!(err, StoreError::AlreadyExists(name) if name == "photo-2_3.png"));
        // The losing create never truncated the existing artifact.
        let on_disk = std::fs::read(store.variants_dir().join("photo-2_3.png")).unwrap();
        assert_eq!(on_disk, b"first-writer");
    }

    #[tokio::test]
    async fn test_create_in_missing_directory_is_a_real_failure() {
        let root = tempfile::tempdir().unwrap();
        let store =
            FsImageStore::new(root.path().join("source_images"), root.path().join("absent"));

        let err = store.create_artifact("photo-2_3.png").await.map(|_| ()).unwrap_err();

        match err {
            StoreError::CreateArtifact { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_creates_admit_exactly_one_writer() {
        let root = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(root.path()));

        let first = {
            let store = store.clone();
            tokio::spawn(async move { store.create_artifact("race-9_9.png").await.map(|_| ()) })
        };
        let second = {
            let store = store.clone();
            tokio::spawn(async move { store.create_artifact("race-9_9.png").await.map(|_| ()) })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let created = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::AlreadyExists(_))))
            .count();

        assert_eq!(created, 1, "exactly one creator must win: {results:?}");
        assert_eq!(conflicts, 1, "the loser must see the conflict: {results:?}");
    }
}
