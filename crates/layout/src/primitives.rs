//! Draw commands a slide is made of.
//!
//! A `SlideCanvas` is an append-only list of commands in page space. The
//! order commands are pushed in is the order they are painted, so later
//! commands sit on top of earlier ones.

use deckline_style::{DashPattern, FontSpec, ShapeStyle, Stroke};
use deckline_types::{Color, Point, Rect, Size};

/// One line of text placed at its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Left end of the baseline.
    pub origin: Point,
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
    /// Measured advance width, in page points.
    pub width: f32,
}

impl TextRun {
    /// Approximate ink box: a descent of a quarter and an ascent of three
    /// quarters of the type size around the baseline.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y - self.font.size * 0.25,
            self.width,
            self.font.size,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        style: ShapeStyle,
    },
    RoundedRect {
        rect: Rect,
        radius: f32,
        style: ShapeStyle,
    },
    Circle {
        center: Point,
        radius: f32,
        style: ShapeStyle,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text(TextRun),
    /// A raster registered with the renderer under `key`, scaled into `rect`.
    Image {
        key: String,
        rect: Rect,
    },
}

impl DrawCommand {
    /// Approximate extent on the page.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::Rect { rect, .. } | DrawCommand::RoundedRect { rect, .. } => *rect,
            DrawCommand::Image { rect, .. } => *rect,
            DrawCommand::Circle { center, radius, .. } => {
                Rect::centered_at(*center, radius * 2.0, radius * 2.0)
            }
            DrawCommand::Line { from, to, .. } => Rect::new(
                from.x.min(to.x),
                from.y.min(to.y),
                (to.x - from.x).abs(),
                (to.y - from.y).abs(),
            ),
            DrawCommand::Text(run) => run.bounds(),
        }
    }
}

/// Largest radius a rounded rect of this size can take: half its shorter side.
pub fn clamp_radius(rect: &Rect, radius: f32) -> f32 {
    let limit = rect.width.min(rect.height).max(0.0) / 2.0;
    if radius.is_nan() {
        return 0.0;
    }
    radius.clamp(0.0, limit)
}

/// Splits a line into the spans a dash pattern paints.
///
/// The pattern starts at `from`. The last span is cut at `to`. A pattern
/// that cannot be walked, or one without gaps, yields the whole line.
pub fn dash_segments(from: Point, to: Point, pattern: &DashPattern) -> Vec<(Point, Point)> {
    let length = from.distance_to(to);
    if length == 0.0 || !pattern.is_drawable() || pattern.off == 0.0 {
        return vec![(from, to)];
    }

    let ux = (to.x - from.x) / length;
    let uy = (to.y - from.y) / length;
    let at = |d: f32| Point::new(from.x + ux * d, from.y + uy * d);

    let mut segments = Vec::new();
    let mut pos = 0.0;
    while pos < length {
        let end = (pos + pattern.on).min(length);
        segments.push((at(pos), at(end)));
        pos += pattern.on + pattern.off;
    }
    segments
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl SlideCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn rect(&mut self, rect: Rect, style: ShapeStyle) {
        self.push(DrawCommand::Rect { rect, style });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rect(rect, ShapeStyle::filled(color));
    }

    /// Adds a rounded rect, clamping the radius to what the rect can hold.
    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, style: ShapeStyle) {
        let radius = clamp_radius(&rect, radius);
        self.push(DrawCommand::RoundedRect {
            rect,
            radius,
            style,
        });
    }

    pub fn circle(&mut self, center: Point, radius: f32, style: ShapeStyle) {
        self.push(DrawCommand::Circle {
            center,
            radius: radius.max(0.0),
            style,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(DrawCommand::Line { from, to, stroke });
    }

    pub fn text(&mut self, run: TextRun) {
        if !run.text.is_empty() {
            self.push(DrawCommand::Text(run));
        }
    }

    pub fn image(&mut self, key: impl Into<String>, rect: Rect) {
        self.push(DrawCommand::Image {
            key: key.into(),
            rect,
        });
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Image { key, rect } => Some((key.as_str(), rect)),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|run| run.text.contains(needle))
    }
}
