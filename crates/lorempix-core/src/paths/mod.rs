//! Directory resolution and bootstrap utilities.
//!
//! Resolves the source-image and public directories from explicit overrides,
//! environment variables, or cwd-relative defaults, and provides helpers to
//! create and sanity-check the variant output directory at startup.

pub mod dirs;
pub mod ensure;
pub mod error;
pub mod resolver;

pub use dirs::{
    DEFAULT_PUBLIC_DIR_RELATIVE, DEFAULT_SOURCE_DIR_RELATIVE, DirResolution, DirSource,
    PUBLIC_DIR_ENV, SOURCE_DIR_ENV, resolve_public_dir, resolve_source_dir, variants_dir,
};
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
pub use error::PathError;
pub use resolver::ResolvedPaths;
