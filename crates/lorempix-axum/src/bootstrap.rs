//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use lorempix_core::paths::{
    DirectoryCreationStrategy, ensure_directory, resolve_public_dir, resolve_source_dir,
    variants_dir,
};
use lorempix_core::ports::{ImageStore, ImageTransformer, RandomSource, ThreadRandom};
use lorempix_core::services::{SourceSelector, VariantResolver};
use lorempix_fs::FsImageStore;
use lorempix_imgproc::RasterTransformer;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Source image directory; `None` resolves via `LOREMPIX_SOURCE_DIR`
    /// or the working-directory default.
    pub source_dir: Option<PathBuf>,
    /// Public directory; `None` resolves via `LOREMPIX_PUBLIC_DIR` or the
    /// working-directory default.
    pub public_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Create config with default paths.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 3000,
            source_dir: None,
            public_dir: None,
        }
    }

    /// Override the source image directory.
    #[must_use]
    pub fn with_source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(path.into());
        self
    }

    /// Override the public output directory.
    #[must_use]
    pub fn with_public_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(path.into());
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds the wired resolver and the resolved directory layout
/// for the web server.
pub struct AxumContext {
    /// The derive-and-cache resolver.
    pub resolver: Arc<VariantResolver>,
    /// Resolved source image directory.
    pub source_dir: PathBuf,
    /// Resolved public directory (parent of the variant cache).
    pub public_dir: PathBuf,
    /// Directory variants are written to and served from.
    pub variants_dir: PathBuf,
}

/// Bootstrap the web adapter with all services.
///
/// Resolves both directories, guarantees the variant cache directory exists
/// and is writable, and wires the filesystem store, raster transformer, and
/// thread RNG into the resolver. A missing source directory is only a
/// warning at this point; requests against it fail individually instead of
/// keeping the server from starting.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    let source = resolve_source_dir(config.source_dir.as_deref())?;
    let public = resolve_public_dir(config.public_dir.as_deref())?;
    let variants = variants_dir(&public.path);

    tracing::info!(
        target: "lorempix.paths",
        source_dir = %source.path.display(),
        source_origin = ?source.source,
        public_dir = %public.path.display(),
        public_origin = ?public.source,
        variants_dir = %variants.display(),
        "bootstrap resolved paths"
    );

    if !source.path.is_dir() {
        tracing::warn!(
            source_dir = %source.path.display(),
            "source image directory does not exist; image requests will fail until it is created"
        );
    }

    ensure_directory(&variants, DirectoryCreationStrategy::AutoCreate)?;

    let store: Arc<dyn ImageStore> = Arc::new(FsImageStore::new(&source.path, &variants));
    let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom::new());
    let transformer: Arc<dyn ImageTransformer> = Arc::new(RasterTransformer::new());

    let selector = SourceSelector::new(store.clone(), random);
    let resolver = Arc::new(VariantResolver::new(selector, store, transformer));

    Ok(AxumContext {
        resolver,
        source_dir: source.path,
        public_dir: public.path,
        variants_dir: variants,
    })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let port = config.port;
    let ctx = bootstrap(config).await?;
    let app = crate::routes::create_router(ctx);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("lorempix server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
