//! Logo placement.

use super::LayoutComposer;
use crate::primitives::SlideCanvas;
use deckline_types::Rect;
use serde::{Deserialize, Serialize};

/// Distance between a page-anchored logo box and the page edges, in layout inches.
const LOGO_MARGIN_IN: f32 = 0.5;

/// A raster the renderer knows under `key`, with its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoRef {
    pub key: String,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl LogoRef {
    pub fn new(key: impl Into<String>, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            key: key.into(),
            pixel_width,
            pixel_height,
        }
    }

    /// Height over width. Zero for an empty image.
    pub fn aspect(&self) -> f32 {
        if self.pixel_width == 0 {
            0.0
        } else {
            self.pixel_height as f32 / self.pixel_width as f32
        }
    }

    /// The largest rect with the logo's proportions inside `frame`, centered in it.
    pub fn fit(&self, frame: Rect) -> Rect {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return frame;
        }
        let scale = (frame.width / self.pixel_width as f32)
            .min(frame.height / self.pixel_height as f32);
        let width = self.pixel_width as f32 * scale;
        let height = self.pixel_height as f32 * scale;
        Rect::centered_at(frame.center(), width, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Where a logo goes: a square box of `size` layout inches in a page corner,
/// optionally re-centered vertically on `center_y` (page points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    pub anchor: Anchor,
    pub size: f32,
    pub center_y: Option<f32>,
}

impl LogoPlacement {
    pub fn new(anchor: Anchor, size: f32) -> Self {
        Self {
            anchor,
            size,
            center_y: None,
        }
    }

    pub fn centered_on(mut self, y: f32) -> Self {
        self.center_y = Some(y);
        self
    }
}

impl LayoutComposer {
    /// The square box a placement reserves on the page.
    pub fn logo_frame(&self, placement: &LogoPlacement) -> Rect {
        let s = self.scale;
        let side = s.inch(placement.size);
        let margin = s.inch(LOGO_MARGIN_IN);
        let x = match placement.anchor {
            Anchor::TopLeft | Anchor::BottomLeft => margin,
            Anchor::TopRight | Anchor::BottomRight => self.size.width - side - margin,
        };
        let y = match (placement.center_y, placement.anchor) {
            (Some(center_y), _) => center_y - side / 2.0,
            (None, Anchor::TopLeft | Anchor::TopRight) => self.size.height - side - margin,
            (None, Anchor::BottomLeft | Anchor::BottomRight) => margin,
        };
        Rect::new(x, y, side, side)
    }

    /// Draws `logo` fitted into the placement's box and returns where it landed.
    pub fn place_logo(
        &self,
        canvas: &mut SlideCanvas,
        logo: &LogoRef,
        placement: &LogoPlacement,
    ) -> Rect {
        let rect = logo.fit(self.logo_frame(placement));
        canvas.image(logo.key.clone(), rect);
        rect
    }
}
