#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use contracts::{VARIANT_DIR_NAME, VARIANT_PUBLIC_PREFIX};
pub use domain::{ResizeSpec, ResolvedVariant, VARIANT_QUALITY, VariantDisposition, VariantKey};
pub use ports::{
    ArtifactWriter, ImageStore, ImageTransformer, RandomSource, SourceReader, StoreError,
    ThreadRandom, TransformError,
};
pub use services::{ResolveError, SelectError, SourceSelector, VariantResolver};

// Re-export path utilities
pub use paths::{
    DEFAULT_PUBLIC_DIR_RELATIVE, DEFAULT_SOURCE_DIR_RELATIVE, DirResolution, DirSource,
    DirectoryCreationStrategy, PUBLIC_DIR_ENV, PathError, ResolvedPaths, SOURCE_DIR_ENV,
    ensure_directory, resolve_public_dir, resolve_source_dir, variants_dir, verify_writable,
};
