//! Unit conversion between layout inches and PDF points.

/// PDF points per inch.
pub const INCH: f32 = 72.0;

/// Width, in inches, of the reference page every slide template is drawn against.
pub const REFERENCE_WIDTH_IN: f32 = 11.0;

/// Converts template measurements to page points.
///
/// Templates are written in inches against an 11in wide page. A canvas of a
/// different width is scaled uniformly, so the 10in slide profile is the same
/// design drawn at 10/11 of the size. Type sizes scale the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    unit: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self { unit: INCH }
    }
}

impl Scale {
    pub fn for_page_width(page_width: f32) -> Self {
        Self {
            unit: page_width / REFERENCE_WIDTH_IN,
        }
    }

    /// Page points for a length given in layout inches.
    pub fn inch(&self, value: f32) -> f32 {
        value * self.unit
    }

    /// Page points for a length given in layout points (type sizes, stroke widths).
    pub fn pt(&self, value: f32) -> f32 {
        value * self.unit / INCH
    }

    pub fn ratio(&self) -> f32 {
        self.unit / INCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_page_is_identity() {
        let scale = Scale::for_page_width(11.0 * INCH);
        assert_eq!(scale.inch(0.5), 36.0);
        assert_eq!(scale.pt(9.0), 9.0);
    }

    #[test]
    fn slide_profile_scales_uniformly() {
        let scale = Scale::for_page_width(10.0 * INCH);
        assert!((scale.inch(11.0) - 720.0).abs() < 1e-3);
        assert!((scale.pt(22.0) - 20.0).abs() < 1e-3);
    }
}
