use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// The x of a line's left edge when it is aligned at `anchor_x`.
    pub fn line_start(&self, anchor_x: f32, line_width: f32) -> f32 {
        match self {
            TextAlign::Left => anchor_x,
            TextAlign::Center => anchor_x - line_width / 2.0,
            TextAlign::Right => anchor_x - line_width,
        }
    }
}
