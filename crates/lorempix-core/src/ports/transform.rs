//! Transform port: resize and re-encode a byte stream.

use async_trait::async_trait;
use thiserror::Error;

use super::store::{ArtifactWriter, SourceReader};
use crate::domain::ResizeSpec;

/// Streaming resize capability.
///
/// Consumes the source byte stream, produces the transcoded bytes on the
/// output stream, and flushes it before returning. Implementations own all
/// decode/encode details; the core only fixes geometry and quality via
/// [`ResizeSpec`].
#[async_trait]
pub trait ImageTransformer: Send + Sync {
    /// Resize `input` to the spec's exact dimensions, writing into `output`.
    async fn transform(
        &self,
        input: SourceReader,
        output: ArtifactWriter,
        spec: &ResizeSpec,
    ) -> Result<(), TransformError>;
}

/// Errors from the resize pipeline.
///
/// Decode/encode causes are carried as strings so codec-crate error types
/// stay out of core signatures.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Reading the source stream failed mid-pipeline.
    #[error("failed to read source image: {0}")]
    Read(#[source] std::io::Error),

    /// The source bytes could not be decoded as an image.
    #[error("failed to decode source image: {0}")]
    Decode(String),

    /// Re-encoding the resized image failed.
    #[error("failed to encode variant: {0}")]
    Encode(String),

    /// Writing the output stream failed.
    #[error("failed to write variant: {0}")]
    Write(#[source] std::io::Error),
}
