use crate::parsers::{parse_dash_pattern, run_parser};
use deckline_types::Color;
use serde::{Deserialize, Deserializer, Serialize, de};

/// On/off lengths of a dashed stroke, measured along the line from its first endpoint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
}

impl DashPattern {
    pub fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }

    /// A pattern a renderer can actually walk: both lengths finite and the "on" span positive.
    pub fn is_drawable(&self) -> bool {
        self.on.is_finite() && self.off.is_finite() && self.on > 0.0 && self.off >= 0.0
    }
}

impl<'de> Deserialize<'de> for DashPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DashDef {
            Str(String),
            Map { on: f32, off: f32 },
        }

        match DashDef::deserialize(deserializer)? {
            DashDef::Str(s) => run_parser(parse_dash_pattern, &s).map_err(de::Error::custom),
            DashDef::Map { on, off } => Ok(DashPattern { on, off }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<DashPattern>,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(mut self, pattern: DashPattern) -> Self {
        self.dash = Some(pattern);
        self
    }
}

/// Fill and outline of a closed shape. Either may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroked(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}
