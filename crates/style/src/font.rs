/// The family every built-in template uses. PDF viewers ship it as a base font.
pub const DEFAULT_FAMILY: &str = "Helvetica";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
    Numeric(u16),
}

impl FontWeight {
    /// Returns the numeric weight value (100-900 scale).
    ///
    /// Standard CSS font-weight values:
    /// - Thin: 100
    /// - Light: 300
    /// - Regular: 400
    /// - Medium: 500
    /// - Bold: 700
    /// - Black: 900
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
            FontWeight::Numeric(n) => *n,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.numeric_value() >= 600
    }
}

/// A face plus a size in layout points.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub weight: FontWeight,
    pub size: f32,
}

fn default_family() -> String {
    DEFAULT_FAMILY.to_string()
}

impl FontSpec {
    pub fn regular(size: f32) -> Self {
        Self {
            family: default_family(),
            weight: FontWeight::Regular,
            size,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            family: default_family(),
            weight: FontWeight::Bold,
            size,
        }
    }

    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}
