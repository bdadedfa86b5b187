//! Shared on-disk and URL contracts.
//!
//! Variants are served by exact path match, so the URL prefix and the
//! directory name under the public root must stay in lockstep. Both live
//! here so no adapter hard-codes its own copy.

/// Directory name under the public root that holds derived variants.
pub const VARIANT_DIR_NAME: &str = "loremimages";

/// Public URL prefix under which variants are served.
pub const VARIANT_PUBLIC_PREFIX: &str = "/loremimages";
