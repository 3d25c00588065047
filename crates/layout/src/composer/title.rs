use super::{Draft, LayoutComposer, LogoRef, TitleSlide};
use crate::flow::FlowCursor;
use crate::text::TextBlock;
use deckline_style::{ShapeStyle, Stroke, TextAlign};
use deckline_types::{Color, Point, Rect};

const GRADIENT_TOP: Color = Color::rgb(0x0a, 0x08, 0x15);
const GRID_LINE: Color = Color::rgb(0x1a, 0x15, 0x25);
const TEXT_LEFT_IN: f32 = 0.6;
const MAX_TITLE_LINES: usize = 3;
const MAX_SUBTITLE_LINES: usize = 2;

impl LayoutComposer {
    pub(super) fn compose_title(&self, draft: &mut Draft, slide: &TitleSlide, logo: Option<&LogoRef>) {
        let s = self.scale;
        let page = Rect::from_size(self.size);
        let palette = &self.palette;

        // Background gradient, darkest band at the top.
        let steps = self.config.gradient_steps.max(1);
        let band = page.height / steps as f32;
        let colors = Color::gradient(&GRADIENT_TOP, &palette.background, steps);
        for (i, color) in colors.into_iter().enumerate() {
            let y = page.top() - (i + 1) as f32 * band;
            // Half a point of overlap hides hairline seams between bands.
            let height = if i + 1 == steps { band } else { band + 0.5 };
            draft.canvas.fill_rect(Rect::new(0.0, y, page.width, height), color);
        }

        let grid = Stroke::new(GRID_LINE.with_alpha(0.3), s.pt(0.5));
        let mut x = 0.0;
        while x <= page.width {
            draft
                .canvas
                .line(Point::new(x, 0.0), Point::new(x, page.height), grid.clone());
            x += s.inch(1.0);
        }
        let mut y = 0.0;
        while y <= page.height {
            draft
                .canvas
                .line(Point::new(0.0, y), Point::new(page.width, y), grid.clone());
            y += s.inch(1.0);
        }

        // Accent bar with a soft glow behind it.
        draft.canvas.fill_rect(
            Rect::new(s.inch(0.25), s.inch(2.0), s.inch(0.18), s.inch(2.0)),
            palette.accent.with_alpha(0.3),
        );
        draft.canvas.rect(
            Rect::new(s.inch(0.3), s.inch(2.0), s.inch(0.08), s.inch(2.0)),
            ShapeStyle::filled(palette.accent.clone()),
        );

        if let Some(logo) = logo {
            let width = s.inch(3.5);
            let height = width * logo.aspect();
            let frame = Rect::new(
                s.inch(TEXT_LEFT_IN),
                page.height - height - s.inch(0.4),
                width,
                height,
            );
            let rect = logo.fit(frame);
            draft.canvas.image(logo.key.clone(), rect);
            draft.region("logo", rect);
        }

        let text_x = s.inch(TEXT_LEFT_IN);
        let text_width = page.width - 2.0 * text_x;
        let mut cursor = FlowCursor::new(s.inch(3.8), s.inch(0.9));

        let title_font = self.font(44.0, true);
        let mut title = TextBlock::wrap(&slide.title, &self.fonts, &title_font, text_width, s.pt(50.0));
        let total_lines = title.lines.len();
        title.clamp_lines(MAX_TITLE_LINES, &self.fonts, text_width);
        let drawn = self.draw_lines(draft, &mut cursor, &title, text_x, &palette.text_primary);
        draft.note_truncation("title", drawn, total_lines);

        cursor.advance(s.inch(0.2));
        let subtitle_font = self.font(22.0, false);
        let mut subtitle =
            TextBlock::wrap(&slide.subtitle, &self.fonts, &subtitle_font, text_width, s.pt(28.0));
        let total_lines = subtitle.lines.len();
        subtitle.clamp_lines(MAX_SUBTITLE_LINES, &self.fonts, text_width);
        let drawn = self.draw_lines(draft, &mut cursor, &subtitle, text_x, &palette.accent);
        draft.note_truncation("subtitle", drawn, total_lines);

        if let Some(date) = slide.date.as_deref().filter(|d| !d.trim().is_empty()) {
            let run = self.run_aligned(
                page.width - s.inch(0.5),
                s.inch(0.5),
                date,
                &self.font(12.0, false),
                &palette.text_secondary,
                TextAlign::Right,
            );
            draft.region("date", run.bounds());
            draft.canvas.text(run);
        }
    }

    /// Draws a wrapped block one baseline at a time. Returns the lines drawn.
    pub(super) fn draw_lines(
        &self,
        draft: &mut Draft,
        cursor: &mut FlowCursor,
        block: &TextBlock,
        x: f32,
        color: &Color,
    ) -> usize {
        let mut drawn = 0;
        for line in &block.lines {
            let Some(baseline) = cursor.take_line(block.line_height) else {
                break;
            };
            let run = self.run(x, baseline, &line.text, &block.font, color);
            draft.canvas.text(run);
            drawn += 1;
        }
        drawn
    }
}
