//! Geometry of a narrowing funnel.

use deckline_types::Rect;

/// Fraction at or below which a level is too narrow to draw.
pub const MIN_WIDTH_FRACTION: f32 = 0.1;

/// Track the funnel is drawn in, in page points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelGeometry {
    pub track_x: f32,
    pub track_width: f32,
    /// Top edge of the first level.
    pub top: f32,
    pub level_height: f32,
    /// Distance between the tops of consecutive levels.
    pub pitch: f32,
    /// Width lost per level, as a fraction of the track.
    pub width_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelLevelBox {
    pub index: usize,
    pub width_fraction: f32,
    pub rect: Rect,
}

impl FunnelGeometry {
    /// Boxes for up to `count` levels, each centered in the track with width
    /// `track_width * (1 - index * width_step)`. Levels past `max_levels`, or
    /// ones that would shrink to `MIN_WIDTH_FRACTION` or less, are left out.
    pub fn levels(&self, count: usize, max_levels: usize) -> Vec<FunnelLevelBox> {
        let center_x = self.track_x + self.track_width / 2.0;
        (0..count.min(max_levels))
            .map(|index| (index, 1.0 - index as f32 * self.width_step))
            .take_while(|(_, fraction)| *fraction > MIN_WIDTH_FRACTION)
            .map(|(index, width_fraction)| {
                let width = self.track_width * width_fraction;
                let top = self.top - index as f32 * self.pitch;
                FunnelLevelBox {
                    index,
                    width_fraction,
                    rect: Rect::new(
                        center_x - width / 2.0,
                        top - self.level_height,
                        width,
                        self.level_height,
                    ),
                }
            })
            .collect()
    }
}

/// Label type size for a level: 9pt for the two widest, 8.5pt for the third,
/// 8pt below that.
pub fn label_size(index: usize) -> f32 {
    match index {
        0 | 1 => 9.0,
        2 => 8.5,
        _ => 8.0,
    }
}
