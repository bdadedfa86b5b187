//! Raster transform pipeline.
//!
//! Buffers the source stream, decodes it with format sniffing, resizes to
//! the exact requested dimensions, and re-encodes in the source format so a
//! PNG source yields a PNG variant. Decode and resize are dispatched via
//! `tokio::task::spawn_blocking` so the async workers are not stalled on
//! pixel work.

use std::io::Cursor;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use lorempix_core::domain::ResizeSpec;
use lorempix_core::ports::{ArtifactWriter, ImageTransformer, SourceReader, TransformError};

/// [`ImageTransformer`] backed by the `image` codec crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterTransformer;

impl RasterTransformer {
    /// Create a new transformer.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageTransformer for RasterTransformer {
    async fn transform(
        &self,
        mut input: SourceReader,
        mut output: ArtifactWriter,
        spec: &ResizeSpec,
    ) -> Result<(), TransformError> {
        let mut source_bytes = Vec::new();
        input
            .read_to_end(&mut source_bytes)
            .await
            .map_err(TransformError::Read)?;

        let spec = *spec;
        let encoded = tokio::task::spawn_blocking(move || resize_and_encode(&source_bytes, spec))
            .await
            .map_err(|e| TransformError::Encode(format!("resize task join error: {e}")))??;

        output
            .write_all(&encoded)
            .await
            .map_err(TransformError::Write)?;
        output.shutdown().await.map_err(TransformError::Write)?;
        Ok(())
    }
}

fn resize_and_encode(source: &[u8], spec: ResizeSpec) -> Result<Vec<u8>, TransformError> {
    let format = image::guess_format(source).map_err(|e| TransformError::Decode(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(source, format)
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    tracing::debug!(
        source_w = decoded.width(),
        source_h = decoded.height(),
        target = %spec.geometry(),
        format = ?format,
        "Resizing variant"
    );

    let resized = decoded.resize_exact(spec.width, spec.height, FilterType::Lanczos3);
    encode(&resized, format, spec.quality)
}

fn encode(
    image: &DynamicImage,
    format: ImageFormat,
    quality: u8,
) -> Result<Vec<u8>, TransformError> {
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut cursor, quality);
            image
                .write_with_encoder(encoder)
                .map_err(|e| TransformError::Encode(e.to_string()))?;
        }
        other => {
            image
                .write_to(&mut cursor, other)
                .map_err(|e| TransformError::Encode(e.to_string()))?;
        }
    }

    Ok(buffer)
}
