//! Domain types for variant identity and resolution outcomes.
//!
//! Everything here is plain data with pure derivations; no I/O, no ports.

pub mod resize;
pub mod variant;

pub use resize::{ResizeSpec, VARIANT_QUALITY};
pub use variant::{ResolvedVariant, VariantDisposition, VariantKey};
