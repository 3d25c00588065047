use deckline_layout::primitives::{clamp_radius, dash_segments};
use deckline_layout::text::to_win_ansi;
use deckline_layout::{DrawCommand, FontLibrary, SlideCanvas, TextRun};
use deckline_render_core::utils::{BEZIER_CIRCLE_KAPPA, alpha_percent, alpha_state_name};
use deckline_render_core::RenderError;
use deckline_style::{ShapeStyle, Stroke};
use deckline_types::{Color, Point, Rect};
use lopdf::content::{Content, Operation};
use lopdf::Object;
use std::collections::{BTreeSet, HashMap};

/// Content of one page and the opacity levels it uses.
#[derive(Debug)]
pub struct PageContent {
    pub content: Content,
    /// Whole-percent alpha values the page references through `gs`.
    pub alpha_states: BTreeSet<u8>,
}

/// Replays a canvas as PDF content-stream operations.
///
/// `font_map` maps PostScript names to font resource names and
/// `image_names` maps image keys to XObject resource names.
pub fn render_canvas_to_content(
    canvas: &SlideCanvas,
    fonts: &FontLibrary,
    font_map: &HashMap<String, String>,
    image_names: &HashMap<String, String>,
) -> Result<PageContent, RenderError> {
    let mut ctx = PageContext {
        fonts,
        font_map,
        image_names,
        content: Content { operations: vec![] },
        alpha_states: BTreeSet::new(),
    };
    for command in canvas.commands() {
        ctx.draw_command(command)?;
    }
    Ok(PageContent {
        content: ctx.content,
        alpha_states: ctx.alpha_states,
    })
}

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

fn point_operands(p: Point) -> Vec<Object> {
    vec![p.x.into(), p.y.into()]
}

fn color_operands(color: &Color) -> Vec<Object> {
    color.to_normalized().into_iter().map(Object::from).collect()
}

struct PageContext<'a> {
    fonts: &'a FontLibrary,
    font_map: &'a HashMap<String, String>,
    image_names: &'a HashMap<String, String>,
    content: Content,
    alpha_states: BTreeSet<u8>,
}

impl PageContext<'_> {
    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_command(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        match command {
            DrawCommand::Rect { rect, style } => {
                let path = rect_path(rect);
                self.paint_path(&path, style);
            }
            DrawCommand::RoundedRect { rect, radius, style } => {
                let radius = clamp_radius(rect, *radius);
                let path = if radius > 0.0 {
                    rounded_rect_path(rect, radius)
                } else {
                    rect_path(rect)
                };
                self.paint_path(&path, style);
            }
            DrawCommand::Circle { center, radius, style } => {
                if *radius > 0.0 {
                    let path = circle_path(*center, *radius);
                    self.paint_path(&path, style);
                }
            }
            DrawCommand::Line { from, to, stroke } => self.draw_line(*from, *to, stroke),
            DrawCommand::Text(run) => self.draw_text(run)?,
            DrawCommand::Image { key, rect } => self.draw_image(key, rect)?,
        }
        Ok(())
    }

    /// Opens a graphics state with the given opacity. Returns false when the
    /// color is fully transparent and nothing should be painted.
    fn begin_with_alpha(&mut self, color: &Color) -> bool {
        let percent = alpha_percent(color);
        if percent == 0 {
            return false;
        }
        self.push("q", vec![]);
        if percent < 100 {
            self.alpha_states.insert(percent);
            self.push("gs", vec![name(&alpha_state_name(percent))]);
        }
        true
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        self.push("RG", color_operands(&stroke.color));
        self.push("w", vec![stroke.width.into()]);
    }

    /// Fills then strokes a closed path, each in its own graphics state so
    /// the two may carry different opacity.
    fn paint_path(&mut self, path: &[Operation], style: &ShapeStyle) {
        if let Some(fill) = &style.fill {
            if self.begin_with_alpha(fill) {
                self.push("rg", color_operands(fill));
                self.content.operations.extend_from_slice(path);
                self.push("f", vec![]);
                self.push("Q", vec![]);
            }
        }
        if let Some(stroke) = &style.stroke {
            if stroke.width > 0.0 && self.begin_with_alpha(&stroke.color) {
                self.set_stroke(stroke);
                if let Some(dash) = stroke.dash.filter(|d| d.is_drawable() && d.off > 0.0) {
                    self.push(
                        "d",
                        vec![Object::Array(vec![dash.on.into(), dash.off.into()]), 0.into()],
                    );
                }
                self.content.operations.extend_from_slice(path);
                self.push("S", vec![]);
                self.push("Q", vec![]);
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        if stroke.width <= 0.0 || !self.begin_with_alpha(&stroke.color) {
            return;
        }
        self.set_stroke(stroke);
        let segments = match &stroke.dash {
            Some(pattern) => dash_segments(from, to, pattern),
            None => vec![(from, to)],
        };
        for (start, end) in segments {
            self.push("m", point_operands(start));
            self.push("l", point_operands(end));
        }
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError> {
        if run.text.trim().is_empty() {
            return Ok(());
        }
        let postscript = self.fonts.postscript_name(&run.font);
        let font_name = self
            .font_map
            .get(postscript)
            .ok_or_else(|| RenderError::Other(format!("Font '{postscript}' has no resource")))?
            .clone();

        if !self.begin_with_alpha(&run.color) {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.push("Tf", vec![name(&font_name), run.font.size.into()]);
        self.push("rg", color_operands(&run.color));
        self.push("Td", point_operands(run.origin));
        self.push("Tj", vec![Object::string_literal(to_win_ansi(&run.text))]);
        self.push("ET", vec![]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn draw_image(&mut self, key: &str, rect: &Rect) -> Result<(), RenderError> {
        let xobject = self
            .image_names
            .get(key)
            .ok_or_else(|| RenderError::UnknownImage(key.to_string()))?
            .clone();
        if rect.width <= 0.0 || rect.height <= 0.0 {
            log::debug!("Skipping image '{}' with an empty frame", key);
            return Ok(());
        }
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        );
        self.push("Do", vec![name(&xobject)]);
        self.push("Q", vec![]);
        Ok(())
    }
}

fn rect_path(rect: &Rect) -> Vec<Operation> {
    vec![Operation::new(
        "re",
        vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
    )]
}

fn curve(c1: Point, c2: Point, end: Point) -> Operation {
    Operation::new(
        "c",
        vec![
            c1.x.into(),
            c1.y.into(),
            c2.x.into(),
            c2.y.into(),
            end.x.into(),
            end.y.into(),
        ],
    )
}

/// Counter-clockwise outline starting on the bottom edge, one Bezier per corner.
fn rounded_rect_path(rect: &Rect, r: f32) -> Vec<Operation> {
    let k = r * BEZIER_CIRCLE_KAPPA;
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    let p = Point::new;
    vec![
        Operation::new("m", point_operands(p(x + r, y))),
        Operation::new("l", point_operands(p(x + w - r, y))),
        curve(p(x + w - r + k, y), p(x + w, y + r - k), p(x + w, y + r)),
        Operation::new("l", point_operands(p(x + w, y + h - r))),
        curve(p(x + w, y + h - r + k), p(x + w - r + k, y + h), p(x + w - r, y + h)),
        Operation::new("l", point_operands(p(x + r, y + h))),
        curve(p(x + r - k, y + h), p(x, y + h - r + k), p(x, y + h - r)),
        Operation::new("l", point_operands(p(x, y + r))),
        curve(p(x, y + r - k), p(x + r - k, y), p(x + r, y)),
        Operation::new("h", vec![]),
    ]
}

fn circle_path(c: Point, r: f32) -> Vec<Operation> {
    let k = r * BEZIER_CIRCLE_KAPPA;
    let p = Point::new;
    vec![
        Operation::new("m", point_operands(p(c.x + r, c.y))),
        curve(p(c.x + r, c.y + k), p(c.x + k, c.y + r), p(c.x, c.y + r)),
        curve(p(c.x - k, c.y + r), p(c.x - r, c.y + k), p(c.x - r, c.y)),
        curve(p(c.x - r, c.y - k), p(c.x - k, c.y - r), p(c.x, c.y - r)),
        curve(p(c.x + k, c.y - r), p(c.x + r, c.y - k), p(c.x + r, c.y)),
        Operation::new("h", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckline_render_core::utils::font_resource_map;
    use deckline_style::{DashPattern, FontSpec};
    use deckline_types::Size;

    fn render(canvas: &SlideCanvas) -> PageContent {
        let fonts = FontLibrary::standard();
        let font_map = font_resource_map(&fonts);
        let images = HashMap::from([("logo".to_string(), "Im1".to_string())]);
        render_canvas_to_content(canvas, &fonts, &font_map, &images).unwrap()
    }

    fn operators(page: &PageContent) -> Vec<&str> {
        page.content.operations.iter().map(|op| op.operator.as_str()).collect()
    }

    fn run(text: &str, color: Color) -> TextRun {
        TextRun {
            origin: Point::new(10.0, 20.0),
            text: text.to_string(),
            font: FontSpec::bold(12.0),
            color,
            width: 0.0,
        }
    }

    #[test]
    fn translucent_fill_uses_a_graphics_state() {
        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgba(255, 0, 0, 0.15));
        let page = render(&canvas);
        assert_eq!(operators(&page), vec!["q", "gs", "rg", "re", "f", "Q"]);
        assert_eq!(page.alpha_states, BTreeSet::from([15]));
    }

    #[test]
    fn fill_and_stroke_are_separate_passes() {
        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.rounded_rect(
            Rect::new(0.0, 0.0, 50.0, 20.0),
            4.0,
            ShapeStyle::filled(Color::rgb(1, 2, 3))
                .with_stroke(Stroke::new(Color::rgba(9, 9, 9, 0.4), 1.0)),
        );
        let rendered = render(&canvas);
        let ops = operators(&rendered);
        assert_eq!(ops.iter().filter(|op| **op == "c").count(), 8);
        let fill = ops.iter().position(|op| *op == "f").unwrap();
        let stroke = ops.iter().position(|op| *op == "S").unwrap();
        assert!(fill < stroke);
    }

    #[test]
    fn text_is_set_in_the_mapped_font_with_win_ansi_bytes() {
        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.text(run("A \u{2192} B", Color::rgb(255, 255, 255)));
        let page = render(&canvas);

        let tf = page.content.operations.iter().find(|op| op.operator == "Tf").unwrap();
        assert!(matches!(&tf.operands[0], Object::Name(n) if n == b"F2"));
        let tj = page.content.operations.iter().find(|op| op.operator == "Tj").unwrap();
        assert!(matches!(&tj.operands[0], Object::String(bytes, _) if bytes == b"A -> B"));
    }

    #[test]
    fn invisible_text_and_blank_runs_are_skipped() {
        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.text(run("hidden", Color::rgba(0, 0, 0, 0.0)));
        canvas.push(DrawCommand::Text(run("   ", Color::rgb(0, 0, 0))));
        assert!(render(&canvas).content.operations.is_empty());
    }

    #[test]
    fn dashed_lines_become_separate_segments() {
        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.line(
            Point::new(0.0, 0.0),
            Point::new(16.0, 0.0),
            Stroke::new(Color::rgb(0, 0, 0), 1.5).dashed(DashPattern::new(5.0, 3.0)),
        );
        let rendered = render(&canvas);
        let ops = operators(&rendered);
        assert_eq!(ops.iter().filter(|op| **op == "m").count(), 2);
        assert_eq!(ops.iter().filter(|op| **op == "S").count(), 1);
    }

    #[test]
    fn images_need_a_registered_xobject() {
        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.image("logo", Rect::new(5.0, 5.0, 40.0, 20.0));
        let rendered = render(&canvas);
        let ops = operators(&rendered);
        assert_eq!(ops, vec!["q", "cm", "Do", "Q"]);

        let mut canvas = SlideCanvas::new(Size::new(100.0, 100.0));
        canvas.image("missing", Rect::new(5.0, 5.0, 40.0, 20.0));
        let fonts = FontLibrary::standard();
        let err = render_canvas_to_content(&canvas, &fonts, &font_resource_map(&fonts), &HashMap::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownImage(key) if key == "missing"));
    }
}
