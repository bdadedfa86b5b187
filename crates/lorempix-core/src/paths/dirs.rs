//! Source and public directory resolution.
//!
//! Both directories resolve the same way: explicit override first, then an
//! environment variable, then a default relative to the working directory.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;
use crate::contracts::VARIANT_DIR_NAME;

/// Environment variable overriding the source-image directory.
pub const SOURCE_DIR_ENV: &str = "LOREMPIX_SOURCE_DIR";

/// Environment variable overriding the public directory.
pub const PUBLIC_DIR_ENV: &str = "LOREMPIX_PUBLIC_DIR";

/// Default source-image location relative to the working directory.
pub const DEFAULT_SOURCE_DIR_RELATIVE: &str = "source_images";

/// Default public location relative to the working directory.
pub const DEFAULT_PUBLIC_DIR_RELATIVE: &str = "public";

/// How a directory path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirSource {
    /// The operator passed an explicit path (CLI flag).
    Explicit,
    /// The path came from environment variables / `.env`.
    EnvVar,
    /// Cwd-relative fallback default.
    Default,
}

/// Resolution result for one directory.
#[derive(Debug, Clone)]
pub struct DirResolution {
    /// The resolved path.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DirSource,
}

/// Resolve the source-image directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `LOREMPIX_SOURCE_DIR` environment variable
/// 3. `./source_images`
pub fn resolve_source_dir(explicit: Option<&Path>) -> Result<DirResolution, PathError> {
    resolve_dir(explicit, SOURCE_DIR_ENV, DEFAULT_SOURCE_DIR_RELATIVE)
}

/// Resolve the public directory (the parent of the variant cache).
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `LOREMPIX_PUBLIC_DIR` environment variable
/// 3. `./public`
pub fn resolve_public_dir(explicit: Option<&Path>) -> Result<DirResolution, PathError> {
    resolve_dir(explicit, PUBLIC_DIR_ENV, DEFAULT_PUBLIC_DIR_RELATIVE)
}

/// The variant cache directory under a resolved public directory.
pub fn variants_dir(public_dir: &Path) -> PathBuf {
    public_dir.join(VARIANT_DIR_NAME)
}

fn resolve_dir(
    explicit: Option<&Path>,
    env_key: &str,
    default_relative: &str,
) -> Result<DirResolution, PathError> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(DirResolution {
            path: path.to_path_buf(),
            source: DirSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(env_key) {
        if !env_path.trim().is_empty() {
            return Ok(DirResolution {
                path: PathBuf::from(env_path),
                source: DirSource::EnvVar,
            });
        }
    }

    let cwd = env::current_dir().map_err(|e| PathError::CurrentDir(e.to_string()))?;
    Ok(DirResolution {
        path: cwd.join(default_relative),
        source: DirSource::Default,
    })
}
