//! Combined path resolver for CLI introspection and adapter parity.
//!
//! Captures every directory the server works with in one call, so the
//! `paths` CLI command and integration tests see exactly what bootstrap
//! sees.

use std::path::{Path, PathBuf};

use super::dirs::{DirSource, resolve_public_dir, resolve_source_dir, variants_dir};
use super::error::PathError;

/// All resolved directories captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory the source images are read from.
    pub source_dir: PathBuf,
    /// How the source directory was resolved.
    pub source_origin: DirSource,
    /// Public directory served to clients.
    pub public_dir: PathBuf,
    /// How the public directory was resolved.
    pub public_origin: DirSource,
    /// Variant cache directory under the public directory.
    pub variants_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all directories from the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with_overrides(None, None)
    }

    /// Resolve with explicit overrides, as when CLI flags are passed.
    pub fn resolve_with_overrides(
        source_dir: Option<&Path>,
        public_dir: Option<&Path>,
    ) -> Result<Self, PathError> {
        let source = resolve_source_dir(source_dir)?;
        let public = resolve_public_dir(public_dir)?;
        let variants = variants_dir(&public.path);

        Ok(Self {
            source_dir: source.path,
            source_origin: source.source,
            public_dir: public.path,
            public_origin: public.source,
            variants_dir: variants,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "source_dir = {}", self.source_dir.display())?;
        writeln!(f, "source_origin = {:?}", self.source_origin)?;
        writeln!(f, "public_dir = {}", self.public_dir.display())?;
        writeln!(f, "public_origin = {:?}", self.public_origin)?;
        write!(f, "variants_dir = {}", self.variants_dir.display())
    }
}
