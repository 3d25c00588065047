/// Top-down placement cursor over a region with a hard floor.
///
/// Templates walk content down a card with it. Nothing is ever placed below
/// the floor: when a block does not fit the caller gets `None` and drops the
/// block instead of drawing off the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowCursor {
    y: f32,
    floor: f32,
    exhausted: bool,
}

const EPSILON: f32 = 1e-3;

impl FlowCursor {
    pub fn new(top: f32, floor: f32) -> Self {
        Self {
            y: top,
            floor: floor.min(top),
            exhausted: false,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    pub fn remaining(&self) -> f32 {
        self.y - self.floor
    }

    pub fn fits(&self, height: f32) -> bool {
        self.y - height >= self.floor - EPSILON
    }

    /// Claims `height` below the cursor and returns the block's top edge.
    pub fn reserve(&mut self, height: f32) -> Option<f32> {
        if !self.fits(height) {
            return None;
        }
        let top = self.y;
        self.y -= height;
        Some(top)
    }

    /// Returns the current y as a baseline, then steps down by `step`. The
    /// baseline itself must sit on or above the floor; once a step runs into
    /// the floor no further lines are handed out.
    pub fn take_line(&mut self, step: f32) -> Option<f32> {
        if self.exhausted {
            return None;
        }
        let baseline = self.y;
        self.advance(step);
        Some(baseline)
    }

    /// Moves down by `dy`, stopping at the floor.
    pub fn advance(&mut self, dy: f32) {
        let next = self.y - dy;
        if next < self.floor - EPSILON {
            self.exhausted = true;
        }
        self.y = next.max(self.floor);
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Moves the cursor down to `y`, clamped to the floor.
    pub fn jump_to(&mut self, y: f32) {
        self.advance(self.y - y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_refuses_blocks_below_the_floor() {
        let mut cursor = FlowCursor::new(100.0, 40.0);
        assert_eq!(cursor.reserve(36.0), Some(100.0));
        assert_eq!(cursor.y(), 64.0);
        assert_eq!(cursor.reserve(36.0), None);
        assert_eq!(cursor.y(), 64.0);
        assert_eq!(cursor.reserve(24.0), Some(64.0));
        assert_eq!(cursor.remaining(), 0.0);
    }

    #[test]
    fn never_goes_below_the_floor() {
        let mut cursor = FlowCursor::new(50.0, 10.0);
        cursor.advance(500.0);
        assert_eq!(cursor.y(), 10.0);
        cursor.jump_to(-20.0);
        assert_eq!(cursor.y(), 10.0);
        assert_eq!(FlowCursor::new(5.0, 10.0).floor(), 5.0);
    }

    #[test]
    fn lines_stop_once_the_baseline_would_leave_the_region() {
        let mut cursor = FlowCursor::new(30.0, 6.0);
        let mut baselines = Vec::new();
        while let Some(y) = cursor.take_line(12.0) {
            baselines.push(y);
        }
        assert_eq!(baselines, vec![30.0, 18.0, 6.0]);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.y(), 6.0);
    }
}
