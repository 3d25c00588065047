//! Page-space geometry. The origin is the bottom-left corner of the page and
//! y grows upwards, matching PDF user space.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }
}

/// Spacing on the four sides of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn x(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }

    pub fn y(value: f32) -> Self {
        Self::new(value, 0.0, value, 0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// A rect of the given size whose center sits at `center`.
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrinks the rect by the insets. Sizes never go negative.
    pub fn inset(&self, insets: Insets) -> Rect {
        let width = (self.width - insets.left - insets.right).max(0.0);
        let height = (self.height - insets.top - insets.bottom).max(0.0);
        Rect::new(self.x + insets.left, self.y + insets.bottom, width, height)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.top()
    }

    /// True if `other` lies inside this rect, allowing `tolerance` of overshoot.
    pub fn contains_rect(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_from_each_side() {
        let card = Rect::new(28.8, 36.0, 734.4, 374.4);
        let inner = card.inset(Insets::new(10.0, 20.0, 30.0, 40.0));
        assert!((inner.x - 68.8).abs() < 1e-3);
        assert_eq!(inner.y, 66.0);
        assert!((inner.width - 674.4).abs() < 1e-3);
        assert!((inner.height - 334.4).abs() < 1e-3);
    }

    #[test]
    fn inset_never_goes_negative() {
        let tiny = Rect::new(0.0, 0.0, 10.0, 10.0).inset(Insets::all(20.0));
        assert_eq!(tiny.width, 0.0);
        assert_eq!(tiny.height, 0.0);
    }

    #[test]
    fn contains_rect_respects_tolerance() {
        let page = Rect::new(0.0, 0.0, 792.0, 445.5);
        assert!(page.contains_rect(&Rect::new(10.0, 10.0, 100.0, 100.0), 0.0));
        assert!(!page.contains_rect(&Rect::new(700.0, 10.0, 100.0, 100.0), 0.0));
        assert!(page.contains_rect(&Rect::new(692.5, 0.0, 100.0, 100.0), 1.0));
    }
}
