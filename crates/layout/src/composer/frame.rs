//! The rounded card most templates are drawn on.

use super::{Draft, LayoutComposer};
use crate::text::truncate_to_width;
use crate::tree::{Extent, LayoutBox};
use deckline_style::{ShapeStyle, Stroke};
use deckline_types::{Insets, Point, Rect};

/// Card height in layout inches. Side margins are 0.4in and the bottom margin 0.5in.
const CARD_HEIGHT_IN: f32 = 5.2;
const CARD_SIDE_IN: f32 = 0.4;
const CARD_BOTTOM_IN: f32 = 0.5;
/// Horizontal inset of card content from the card edge.
pub(super) const CONTENT_INSET_IN: f32 = 0.4;
/// Room kept free at the right of a header for the header-aligned logo.
const HEADER_LOGO_RESERVE_IN: f32 = 2.05;

pub(super) struct CardFrame {
    pub card: Rect,
    pub header: Rect,
    /// Content area. Its top edge is the first baseline.
    pub content: Rect,
}

impl LayoutComposer {
    pub(super) fn card_frame(&self, header_height_in: f32, content_top_in: f32) -> CardFrame {
        let s = self.scale;
        let top_margin =
            (self.size.height - s.inch(CARD_BOTTOM_IN) - s.inch(CARD_HEIGHT_IN)).max(0.0);

        let tree = LayoutBox::column(vec![
            LayoutBox::column(vec![
                LayoutBox::slot("header").extent(Extent::Fixed(s.inch(header_height_in))),
                LayoutBox::column(vec![LayoutBox::slot("content")])
                    .named("body")
                    .padding(Insets::new(
                        s.inch(content_top_in),
                        s.inch(CONTENT_INSET_IN),
                        s.inch(0.15),
                        s.inch(CONTENT_INSET_IN),
                    )),
            ])
            .named("card"),
        ])
        .padding(Insets::new(
            top_margin,
            s.inch(CARD_SIDE_IN),
            s.inch(CARD_BOTTOM_IN),
            s.inch(CARD_SIDE_IN),
        ));

        let regions = tree.resolve(Rect::from_size(self.size));
        CardFrame {
            card: regions.rect("card"),
            header: regions.rect("header"),
            content: regions.rect("content"),
        }
    }

    /// Card body, tinted header band and the band's bottom rule.
    pub(super) fn draw_card(&self, draft: &mut Draft, frame: &CardFrame) {
        let s = self.scale;
        let accent = &self.palette.accent;

        draft.canvas.rounded_rect(
            frame.card,
            s.inch(0.1),
            ShapeStyle::filled(self.palette.card.clone())
                .with_stroke(Stroke::new(accent.with_alpha(0.2), s.pt(1.0))),
        );
        draft.canvas.fill_rect(frame.header, accent.with_alpha(0.08));
        draft.canvas.line(
            Point::new(frame.header.x, frame.header.y),
            Point::new(frame.header.right(), frame.header.y),
            Stroke::new(accent.with_alpha(0.3), s.pt(2.0)),
        );

        draft.region("card", frame.card);
        draft.region("header", frame.header);
        draft.header = Some(frame.header);
    }

    /// Header title starting at `x`, vertically centered in the band and cut
    /// short before the logo's corner. Returns the drawn width.
    pub(super) fn draw_header_title(
        &self,
        draft: &mut Draft,
        frame: &CardFrame,
        x: f32,
        title: &str,
        size: f32,
    ) -> f32 {
        let font = self.font(size, true);
        let max_width = frame.card.right() - self.scale.inch(HEADER_LOGO_RESERVE_IN) - x;
        let text = truncate_to_width(title, &self.fonts, &font, max_width.max(0.0));
        let baseline = frame.header.y + (frame.header.height - font.size * 0.7) / 2.0;
        let run = self.run(x, baseline, &text, &font, &self.palette.text_primary);
        let width = run.width;
        draft.region("header-title", run.bounds());
        draft.canvas.text(run);
        width
    }

    /// Uppercase accent label with a faint rule under it.
    pub(super) fn draw_section_header(
        &self,
        draft: &mut Draft,
        x: f32,
        baseline: f32,
        width: f32,
        label: &str,
    ) {
        let s = self.scale;
        let font = self.font(11.0, true);
        let text = truncate_to_width(&label.to_uppercase(), &self.fonts, &font, width);
        let run = self.run(x, baseline, &text, &font, &self.palette.accent);
        draft.canvas.text(run);

        let rule_y = baseline - s.inch(0.1);
        draft.canvas.line(
            Point::new(x, rule_y),
            Point::new(x + width, rule_y),
            Stroke::new(self.palette.accent.with_alpha(0.3), s.pt(1.0)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::fonts::FontLibrary;
    use deckline_style::Palette;
    use deckline_types::Size;

    #[test]
    fn card_frame_on_the_reference_page() {
        let composer = LayoutComposer::new(
            Size::new(792.0, 445.5),
            FontLibrary::standard(),
            Palette::default(),
            LayoutConfig::default(),
        );
        let frame = composer.card_frame(0.7, 0.4);

        assert!((frame.card.x - 28.8).abs() < 1e-3);
        assert!((frame.card.y - 36.0).abs() < 1e-3);
        assert!((frame.card.width - 734.4).abs() < 1e-3);
        assert!((frame.card.height - 374.4).abs() < 1e-3);
        // header_y = card top - 0.7in
        assert!((frame.header.y - 360.0).abs() < 1e-3);
        // first baseline 0.4in under the header, 0.4in in from the card edge
        assert!((frame.content.top() - 331.2).abs() < 1e-3);
        assert!((frame.content.x - 57.6).abs() < 1e-3);
        assert!((frame.content.right() - 734.4).abs() < 1e-3);
    }
}
