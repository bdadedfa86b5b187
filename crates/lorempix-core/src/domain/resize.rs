//! Resize pipeline parameters.

/// Encoder quality for derived variants, on the usual 0-100 codec scale.
pub const VARIANT_QUALITY: u8 = 90;

/// Exact-dimension resize instruction handed to the transform capability.
///
/// The canonical geometry form is `<width>x<height>!`; the trailing `!`
/// means the output takes the requested dimensions exactly instead of
/// preserving the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSpec {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Encoder quality (0-100) for lossy output formats.
    pub quality: u8,
}

impl ResizeSpec {
    /// Create an exact-fit spec at the standard variant quality.
    pub const fn exact(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            quality: VARIANT_QUALITY,
        }
    }

    /// Render the canonical geometry string, e.g. `"5x3!"`.
    pub fn geometry(&self) -> String {
        format!("{}x{}!", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_renders_exact_form() {
        let spec = ResizeSpec::exact(5, 3);
        assert_eq!(spec.geometry(), "5x3!");
    }

    #[test]
    fn test_exact_uses_standard_quality() {
        let spec = ResizeSpec::exact(640, 480);
        assert_eq!(spec.quality, 90);
        assert_eq!(spec.width, 640);
        assert_eq!(spec.height, 480);
    }
}
