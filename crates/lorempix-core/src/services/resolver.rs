//! Variant resolution: the derive-and-cache core.
//!
//! One resolution picks a source, computes the deterministic artifact name,
//! then lets a single exclusive create decide between "produce it now" and
//! "someone else already has". There is no lock and no existence probe; the
//! create result is the whole arbitration.

use std::sync::Arc;

use thiserror::Error;

use super::selector::{SelectError, SourceSelector};
use crate::domain::{ResolvedVariant, VariantKey};
use crate::ports::{ImageStore, ImageTransformer, StoreError, TransformError};

/// Terminal failures of one resolution; nothing here is retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The source directory could not be enumerated.
    #[error("cannot read the source catalog")]
    CatalogUnavailable(#[source] StoreError),

    /// No source images are available.
    #[error("the source catalog is empty")]
    CatalogEmpty,

    /// The selected source image vanished or was never readable.
    #[error("source image does not exist")]
    SourceMissing(#[source] StoreError),

    /// Exclusive creation of the output failed for a real reason.
    ///
    /// "Already exists" never lands here; that case resolves successfully.
    #[error("cannot create variant output")]
    OutputCreate(#[source] StoreError),

    /// The resize pipeline failed; a partial artifact may remain on disk.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl From<SelectError> for ResolveError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::CatalogUnavailable(cause) => Self::CatalogUnavailable(cause),
            SelectError::CatalogEmpty => Self::CatalogEmpty,
        }
    }
}

/// Resolves a dimensioned image request to a cached or freshly derived file.
pub struct VariantResolver {
    selector: SourceSelector,
    store: Arc<dyn ImageStore>,
    transformer: Arc<dyn ImageTransformer>,
}

impl VariantResolver {
    /// Create a resolver from its three collaborators.
    ///
    /// The selector normally wraps the same store so selection and
    /// resolution see one catalog.
    pub fn new(
        selector: SourceSelector,
        store: Arc<dyn ImageStore>,
        transformer: Arc<dyn ImageTransformer>,
    ) -> Self {
        Self {
            selector,
            store,
            transformer,
        }
    }

    /// Resolve `width` x `height`, optionally narrowed by `criterion`, to a
    /// public variant path.
    ///
    /// Dimensions are taken as given; rejecting malformed raw input is the
    /// routing layer's job. The source is opened for reading before the
    /// output is created, so an unreadable source never leaves an empty
    /// artifact behind.
    pub async fn resolve(
        &self,
        width: u32,
        height: u32,
        criterion: &str,
    ) -> Result<ResolvedVariant, ResolveError> {
        let source = self.selector.select(criterion).await?;
        let key = VariantKey::new(source, width, height);
        let artifact = key.artifact_name();

        let input = self
            .store
            .open_source(key.source())
            .await
            .map_err(ResolveError::SourceMissing)?;

        let output = match self.store.create_artifact(&artifact).await {
            Ok(writer) => writer,
            // Complete or still being written by another request; either way
            // the deterministic path is the answer.
            Err(StoreError::AlreadyExists(_)) => {
                return Ok(ResolvedVariant::reused(key.public_path()));
            }
            Err(other) => return Err(ResolveError::OutputCreate(other)),
        };

        self.transformer
            .transform(input, output, &key.resize_spec())
            .await?;

        Ok(ResolvedVariant::created(key.public_path()))
    }
}
