//! Source image selection.
//!
//! Picks one candidate from the source catalog, optionally narrowed by a
//! subject keyword. The catalog is re-enumerated on every call; nothing is
//! cached between requests, so additions to the source directory show up
//! immediately.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{ImageStore, RandomSource, StoreError};

/// Filename prefix that marks a catalog entry as hidden.
const HIDDEN_PREFIX: char = '.';

/// Selection failures; both are terminal for the request.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The source directory could not be enumerated.
    #[error("cannot read the source catalog")]
    CatalogUnavailable(#[source] StoreError),

    /// The catalog holds no visible entries.
    #[error("the source catalog is empty")]
    CatalogEmpty,
}

/// Picks one source image from the catalog.
pub struct SourceSelector {
    store: Arc<dyn ImageStore>,
    random: Arc<dyn RandomSource>,
}

impl SourceSelector {
    /// Create a selector over the given store and randomness source.
    pub fn new(store: Arc<dyn ImageStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// Select one source image filename.
    ///
    /// A non-empty `criterion` narrows candidates to names containing it as
    /// a substring. When nothing matches, the criterion is dropped and
    /// selection falls back to the full catalog; an unmatched keyword is not
    /// an error. The final pick is uniform across the candidate set.
    pub async fn select(&self, criterion: &str) -> Result<String, SelectError> {
        let mut candidates: Vec<String> = self
            .store
            .list_sources()
            .await
            .map_err(SelectError::CatalogUnavailable)?
            .into_iter()
            .filter(|name| !name.starts_with(HIDDEN_PREFIX))
            .collect();

        if candidates.is_empty() {
            return Err(SelectError::CatalogEmpty);
        }

        if !criterion.is_empty() {
            let matching: Vec<String> = candidates
                .iter()
                .filter(|name| name.contains(criterion))
                .cloned()
                .collect();
            if !matching.is_empty() {
                candidates = matching;
            }
        }

        let index = self.random.pick_index(candidates.len());
        Ok(candidates.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ArtifactWriter, SourceReader, ThreadRandom};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::io;
    use std::sync::Mutex;

    /// Mock store exposing only a fixed catalog listing.
    struct CatalogStore {
        entries: Vec<String>,
        fail_listing: bool,
    }

    impl CatalogStore {
        fn new(entries: &[&str]) -> Self {
            Self {
                entries: entries.iter().map(ToString::to_string).collect(),
                fail_listing: false,
            }
        }

        fn failing() -> Self {
            Self {
                entries: Vec::new(),
                fail_listing: true,
            }
        }
    }

    #[async_trait]
    impl ImageStore for CatalogStore {
        async fn list_sources(&self) -> Result<Vec<String>, StoreError> {
            if self.fail_listing {
                return Err(StoreError::ListDir(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "denied",
                )));
            }
            Ok(self.entries.clone())
        }

        async fn open_source(&self, name: &str) -> Result<SourceReader, StoreError> {
            Err(StoreError::open_source(
                name,
                io::Error::new(io::ErrorKind::Unsupported, "not wired in this mock"),
            ))
        }

        async fn create_artifact(&self, name: &str) -> Result<ArtifactWriter, StoreError> {
            Err(StoreError::create_artifact(
                name,
                io::Error::new(io::ErrorKind::Unsupported, "not wired in this mock"),
            ))
        }
    }

    /// Scripted random source recording the candidate-set sizes it saw.
    struct ScriptedRandom {
        picks: Mutex<Vec<usize>>,
        observed_lens: Mutex<Vec<usize>>,
    }

    impl ScriptedRandom {
        fn new(picks: &[usize]) -> Self {
            Self {
                picks: Mutex::new(picks.to_vec()),
                observed_lens: Mutex::new(Vec::new()),
            }
        }

        fn lens(&self) -> Vec<usize> {
            self.observed_lens.lock().unwrap().clone()
        }
    }

    impl RandomSource for ScriptedRandom {
        fn pick_index(&self, len: usize) -> usize {
            self.observed_lens.lock().unwrap().push(len);
            let mut picks = self.picks.lock().unwrap();
            if picks.is_empty() { 0 } else { picks.remove(0) }
        }
    }

    fn selector_with(
        store: CatalogStore,
        random: ScriptedRandom,
    ) -> (SourceSelector, Arc<ScriptedRandom>) {
        let random = Arc::new(random);
        let selector = SourceSelector::new(Arc::new(store), random.clone());
        (selector, random)
    }

    #[tokio::test]
    async fn test_criterion_narrows_to_matching_candidates() {
        let store = CatalogStore::new(&["aaa.png", "bbb.png", "ccc.png"]);
        let (selector, random) = selector_with(store, ScriptedRandom::new(&[0]));

        let picked = selector.select("bb").await.unwrap();

        assert_eq!(picked, "bbb.png");
        // Only the single match was eligible.
        assert_eq!(random.lens(), vec![1]);
    }

    #[tokio::test]
    async fn test_unmatched_criterion_falls_back_to_full_catalog() {
        let store = CatalogStore::new(&["aaa.png", "bbb.png", "ccc.png"]);
        let (selector, random) = selector_with(store, ScriptedRandom::new(&[1]));

        let picked = selector.select("dd").await.unwrap();

        assert_eq!(picked, "bbb.png");
        // The whole catalog stayed eligible, not an empty narrowed set.
        assert_eq!(random.lens(), vec![3]);
    }

    #[tokio::test]
    async fn test_empty_criterion_uses_full_catalog() {
        let store = CatalogStore::new(&["aaa.png", "bbb.png", "ccc.png"]);
        let (selector, random) = selector_with(store, ScriptedRandom::new(&[2]));

        let picked = selector.select("").await.unwrap();

        assert_eq!(picked, "ccc.png");
        assert_eq!(random.lens(), vec![3]);
    }

    #[tokio::test]
    async fn test_hidden_entries_are_excluded() {
        let store = CatalogStore::new(&[".DS_Store", ".hidden.png", "photo.png"]);
        let (selector, random) = selector_with(store, ScriptedRandom::new(&[0]));

        let picked = selector.select("").await.unwrap();

        assert_eq!(picked, "photo.png");
        assert_eq!(random.lens(), vec![1]);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_reported() {
        let store = CatalogStore::new(&[]);
        let (selector, _) = selector_with(store, ScriptedRandom::new(&[]));

        let err = selector.select("").await.unwrap_err();

        assert!(matches!(err, SelectError::CatalogEmpty));
    }

    #[tokio::test]
    async fn test_catalog_of_only_hidden_entries_is_empty() {
        let store = CatalogStore::new(&[".a.png", ".b.png"]);
        let (selector, _) = selector_with(store, ScriptedRandom::new(&[]));

        let err = selector.select("photo").await.unwrap_err();

        assert!(matches!(err, SelectError::CatalogEmpty));
    }

    #[tokio::test]
    async fn test_listing_failure_is_catalog_unavailable() {
        let (selector, _) = selector_with(CatalogStore::failing(), ScriptedRandom::new(&[]));

        let err = selector.select("").await.unwrap_err();

        assert!(matches!(err, SelectError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_every_candidate_is_reachable() {
        let store = Arc::new(CatalogStore::new(&["aaa.png", "bbb.png", "ccc.png"]));
        let selector = SourceSelector::new(store, Arc::new(ThreadRandom::new()));

        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.select("").await.unwrap());
        }

        assert_eq!(seen.len(), 3, "some candidate was never picked: {seen:?}");
    }
}
