//! Variant identity and naming.
//!
//! A variant is one source image rendered at exact dimensions. Its identity
//! is the (source name, width, height) tuple, and the artifact name derived
//! from that tuple is a pure function: every request for the same rendition
//! maps to the same file, which is what makes the cache work without any
//! index or manifest.

use crate::contracts::VARIANT_PUBLIC_PREFIX;
use crate::domain::ResizeSpec;

/// Identity of one derived rendition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    source: String,
    width: u32,
    height: u32,
}

impl VariantKey {
    /// Create a key for `source` resized to `width` x `height`.
    pub fn new(source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }

    /// The source image filename this variant derives from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Requested width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Requested height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Derived artifact filename: `<base>-<width>_<height><extension>`.
    ///
    /// The extension is the trailing dot-plus-word-characters of the source
    /// name; names without one keep their full name as the base and the
    /// artifact carries no extension.
    pub fn artifact_name(&self) -> String {
        let (base, extension) = split_extension(&self.source);
        format!("{base}-{}_{}{extension}", self.width, self.height)
    }

    /// Public URL path under which the artifact is served.
    pub fn public_path(&self) -> String {
        format!("{VARIANT_PUBLIC_PREFIX}/{}", self.artifact_name())
    }

    /// The resize instruction for producing this variant.
    pub const fn resize_spec(&self) -> ResizeSpec {
        ResizeSpec::exact(self.width, self.height)
    }
}

/// Split a filename into (base, extension) at its final dot.
///
/// The extension must be a trailing `.` followed by one or more word
/// characters (ASCII letters, digits, underscore); anything else yields an
/// empty extension with the whole name as the base.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => {
            let candidate = &name[idx + 1..];
            if candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                (&name[..idx], &name[idx..])
            } else {
                (name, "")
            }
        }
        _ => (name, ""),
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    /// Public URL path of the artifact.
    pub public_path: String,
    /// Whether this request derived the artifact or found it in place.
    pub disposition: VariantDisposition,
}

impl ResolvedVariant {
    /// A variant this request freshly derived.
    pub fn created(public_path: String) -> Self {
        Self {
            public_path,
            disposition: VariantDisposition::Created,
        }
    }

    /// A variant that was already present in the cache.
    pub fn reused(public_path: String) -> Self {
        Self {
            public_path,
            disposition: VariantDisposition::Reused,
        }
    }
}

/// How a resolution was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantDisposition {
    /// This request won the exclusive create and ran the transform.
    Created,
    /// The artifact already existed and was reused without transforming.
    ///
    /// Does not distinguish "complete" from "another request is still
    /// writing it"; the exclusive create cannot tell those apart.
    Reused,
}
