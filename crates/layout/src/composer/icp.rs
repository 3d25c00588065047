use super::frame::CardFrame;
use super::{Draft, IcpSlide, LayoutComposer, SignalItem, capped};
use crate::badges::{BadgeStyle, layout_badges};
use crate::config::IcpLayout;
use crate::flow::FlowCursor;
use crate::text::{TextBlock, truncate_chars, truncate_to_width};
use crate::tree::{Extent, LayoutBox};
use deckline_style::{ShapeStyle, Stroke, TextAlign};
use deckline_types::{Point, Rect};

const SIGNAL_CARD_HEIGHT_IN: f32 = 0.5;
const SIGNAL_PITCH_IN: f32 = 0.6;
const ROOMY_PITCH_IN: f32 = 0.22;

impl LayoutComposer {
    pub(super) fn compose_icp(&self, draft: &mut Draft, slide: &IcpSlide) {
        let s = self.scale;
        let palette = &self.palette;
        let frame = self.card_frame(0.7, 0.4);
        self.draw_card(draft, &frame);

        let title_x = self.draw_icp_pill(draft, &frame, slide.number);
        self.draw_header_title(draft, &frame, title_x, &slide.title, 22.0);

        let content = frame.content;
        let mut cursor = FlowCursor::new(content.top(), content.y);
        let body_font = self.font(10.0, false);

        if !slide.industries.is_empty() {
            if let Some(baseline) = cursor.take_line(s.inch(0.35)) {
                let line = format!("Industries: {}", slide.industries.join(", "));
                let text = truncate_to_width(&line, &self.fonts, &body_font, content.width);
                draft
                    .canvas
                    .text(self.run(content.x, baseline, &text, &body_font, &palette.text_secondary));
            }
        }

        if let Some(baseline) = cursor.take_line(s.inch(0.35)) {
            self.draw_section_header(draft, content.x, baseline, content.width, "Departments & Functions");
        }
        let mut departments = TextBlock::wrap(
            &slide.departments,
            &self.fonts,
            &body_font,
            content.width,
            s.inch(0.18),
        );
        let total_lines = departments.lines.len();
        departments.clamp_lines(self.config.capacity.max_body_lines, &self.fonts, content.width);
        let drawn = self.draw_lines(draft, &mut cursor, &departments, content.x, &palette.text_secondary);
        draft.note_truncation("departments", drawn, total_lines);
        if drawn > 0 {
            cursor.advance(s.inch(0.4) - s.inch(0.18));
        }

        self.draw_role_badges(draft, &mut cursor, content, &slide.key_roles);

        if let Some(baseline) = cursor.take_line(s.inch(0.4)) {
            self.draw_section_header(draft, content.x, baseline, content.width, "Technographic Fit");
        }

        let tracks = LayoutBox::row(vec![
            LayoutBox::slot("legacy").extent(Extent::Fraction(0.5)),
            LayoutBox::slot("expansion").extent(Extent::Fraction(0.5)),
        ])
        .gap(s.inch(0.4))
        .resolve(Rect::new(content.x, content.y, content.width, cursor.remaining()));

        let top = cursor.y();
        for (name, label, signals) in [
            ("legacy", "Legacy Indicators", &slide.legacy_signals),
            ("expansion", "Expansion Signals", &slide.expansion_signals),
        ] {
            let column = tracks.rect(name);
            draft.region(format!("track-{name}"), column);
            let mut track_cursor = FlowCursor::new(top, content.y);
            self.draw_signal_track(draft, &mut track_cursor, column, label, signals);
        }
    }

    /// "ICP n" pill at the start of the header. Returns the x the title starts at.
    fn draw_icp_pill(&self, draft: &mut Draft, frame: &CardFrame, number: u32) -> f32 {
        let s = self.scale;
        let font = self.font(10.0, true);
        let label = format!("ICP {number}");
        let text_width = self.fonts.measure(&label, &font);
        let height = s.inch(0.28);
        let rect = Rect::new(
            frame.card.x + s.inch(0.4),
            frame.header.center().y - height / 2.0,
            text_width + s.inch(0.24),
            height,
        );
        draft.canvas.rounded_rect(
            rect,
            height / 2.0,
            ShapeStyle::filled(self.palette.accent.clone()),
        );
        draft.canvas.text(self.run_aligned(
            rect.center().x,
            rect.center().y - font.size * 0.35,
            &label,
            &font,
            &self.palette.background,
            TextAlign::Center,
        ));
        draft.region("icp-pill", rect);
        rect.right() + s.inch(0.15)
    }

    fn draw_role_badges(&self, draft: &mut Draft, cursor: &mut FlowCursor, content: Rect, all_roles: &[String]) {
        let s = self.scale;
        let roles = capped(all_roles, self.config.capacity.max_items_per_section);
        if roles.is_empty() {
            draft.note_truncation("key roles", 0, all_roles.len());
            return;
        }

        let style = BadgeStyle {
            font: self.font(9.0, false),
            padding_x: s.inch(0.3),
            height: s.inch(0.25),
            gap: s.inch(0.2),
            row_pitch: s.inch(0.4),
        };
        // First row hangs from the cursor line.
        let first_bottom = cursor.y() - style.height;
        let placements = layout_badges(roles, &self.fonts, &style, content.x, first_bottom, content.right());

        let accent = &self.palette.accent;
        let mut shown = 0;
        let mut last_row_y = first_bottom;
        for (i, badge) in placements.iter().enumerate() {
            if badge.rect.y < cursor.floor() {
                break;
            }
            let text_width = content.width - style.padding_x;
            let text = truncate_to_width(&badge.text, &self.fonts, &style.font, text_width);
            let rect = Rect::new(
                badge.rect.x,
                badge.rect.y,
                badge.rect.width.min(content.width),
                badge.rect.height,
            );
            draft.canvas.rounded_rect(
                rect,
                s.inch(0.08),
                ShapeStyle::filled(accent.with_alpha(0.15))
                    .with_stroke(Stroke::new(accent.with_alpha(0.4), s.pt(0.5))),
            );
            draft.canvas.text(self.run(
                rect.x + style.padding_x / 2.0,
                rect.y + s.inch(0.08),
                &text,
                &style.font,
                &self.palette.text_primary,
            ));
            draft.region(format!("badge-{i}"), rect);
            last_row_y = rect.y;
            shown += 1;
        }
        draft.note_truncation("key roles", shown, all_roles.len());
        cursor.jump_to(last_row_y - s.inch(0.4));
    }

    fn draw_signal_track(
        &self,
        draft: &mut Draft,
        cursor: &mut FlowCursor,
        column: Rect,
        label: &str,
        signals: &[SignalItem],
    ) {
        let s = self.scale;
        let label_font = self.font(11.0, true);
        let Some(baseline) = cursor.take_line(s.inch(0.2)) else {
            draft.note_truncation(label, 0, signals.len());
            return;
        };
        let heading = truncate_to_width(label, &self.fonts, &label_font, column.width);
        draft
            .canvas
            .text(self.run(column.x, baseline, &heading, &label_font, &self.palette.text_primary));

        let visible = capped(signals, self.config.signals_per_track());
        let shown = match self.config.icp_layout {
            IcpLayout::Dense => self.draw_signal_cards(draft, cursor, column, visible),
            IcpLayout::Roomy => self.draw_signal_lines(draft, cursor, column, visible),
        };
        draft.note_truncation(label, shown, signals.len());
    }

    fn vendor_line(signal: &SignalItem) -> Option<String> {
        if signal.vendors.is_empty() {
            None
        } else {
            Some(format!("\u{2192} {}", signal.vendors.join(", ")))
        }
    }

    fn draw_signal_cards(
        &self,
        draft: &mut Draft,
        cursor: &mut FlowCursor,
        column: Rect,
        signals: &[SignalItem],
    ) -> usize {
        let s = self.scale;
        let description_font = self.font(9.0, false);
        let vendor_font = self.font(8.0, false);
        let text_width = column.width - s.inch(0.2);
        let card_height = s.inch(SIGNAL_CARD_HEIGHT_IN);

        let mut shown = 0;
        for signal in signals {
            let Some(top) = cursor.reserve(card_height) else {
                break;
            };
            cursor.advance(s.inch(SIGNAL_PITCH_IN - SIGNAL_CARD_HEIGHT_IN));
            let rect = Rect::new(column.x, top - card_height, column.width, card_height);
            draft.canvas.rounded_rect(
                rect,
                s.inch(0.05),
                ShapeStyle::filled(self.palette.card.with_alpha(0.5))
                    .with_stroke(Stroke::new(self.palette.border.clone(), s.pt(0.5))),
            );

            let description = truncate_chars(&signal.description, self.config.capacity.description_chars);
            let description = truncate_to_width(&description, &self.fonts, &description_font, text_width);
            draft.canvas.text(self.run(
                rect.x + s.inch(0.1),
                top - s.inch(0.18),
                &description,
                &description_font,
                &self.palette.text_primary,
            ));
            if let Some(vendors) = Self::vendor_line(signal) {
                let vendors = truncate_to_width(&vendors, &self.fonts, &vendor_font, text_width);
                draft.canvas.text(self.run(
                    rect.x + s.inch(0.1),
                    top - s.inch(0.38),
                    &vendors,
                    &vendor_font,
                    &self.palette.text_secondary,
                ));
            }
            shown += 1;
        }
        shown
    }

    fn draw_signal_lines(
        &self,
        draft: &mut Draft,
        cursor: &mut FlowCursor,
        column: Rect,
        signals: &[SignalItem],
    ) -> usize {
        let s = self.scale;
        let font = self.font(9.0, false);
        // First baseline a type size under the heading rule.
        cursor.advance(font.size);

        let mut shown = 0;
        for signal in signals {
            let Some(baseline) = cursor.take_line(s.inch(ROOMY_PITCH_IN)) else {
                break;
            };
            let description = truncate_chars(&signal.description, self.config.capacity.description_chars);
            let line = match Self::vendor_line(signal) {
                Some(vendors) => format!("\u{2022} {description}  {vendors}"),
                None => format!("\u{2022} {description}"),
            };
            let text = truncate_to_width(&line, &self.fonts, &font, column.width);
            draft.canvas.text(self.run(column.x, baseline, &text, &font, &self.palette.text_primary));
            draft.canvas.line(
                Point::new(column.x, baseline - s.inch(0.07)),
                Point::new(column.right(), baseline - s.inch(0.07)),
                Stroke::new(self.palette.border_card.clone(), s.pt(0.5)),
            );
            shown += 1;
        }
        shown
    }
}
