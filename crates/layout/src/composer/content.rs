use super::{ContentSlide, Draft, LayoutComposer, SectionBlock, SectionStyle, capped};
use crate::flow::FlowCursor;
use crate::text::TextBlock;
use crate::tree::{Extent, LayoutBox};
use deckline_types::Rect;

impl LayoutComposer {
    pub(super) fn compose_content(&self, draft: &mut Draft, slide: &ContentSlide) {
        let s = self.scale;
        let frame = self.card_frame(0.7, 0.4);
        self.draw_card(draft, &frame);
        self.draw_header_title(
            draft,
            &frame,
            frame.card.x + s.inch(0.4),
            &slide.title,
            22.0,
        );

        let columns = LayoutBox::row(vec![
            LayoutBox::slot("left").extent(Extent::Fraction(0.5)),
            LayoutBox::slot("right").extent(Extent::Fraction(0.5)),
        ])
        .gap(s.inch(0.4))
        .resolve(frame.content);

        // First half of the sections on the left, the rest on the right.
        let split = slide.sections.len().div_ceil(2);
        let (left, right) = slide.sections.split_at(split);
        for (name, sections) in [("left", left), ("right", right)] {
            let column = columns.rect(name);
            draft.region(format!("column-{name}"), column);
            let mut cursor = FlowCursor::new(column.top(), column.y);
            for section in sections {
                self.draw_section(draft, &mut cursor, column, section);
            }
        }
    }

    fn draw_section(
        &self,
        draft: &mut Draft,
        cursor: &mut FlowCursor,
        column: Rect,
        section: &SectionBlock,
    ) {
        let s = self.scale;
        let Some(baseline) = cursor.take_line(s.inch(0.35)) else {
            draft.note_truncation(&section.header, 0, section.items.len());
            return;
        };
        self.draw_section_header(draft, column.x, baseline, column.width, &section.header);

        let items = capped(&section.items, self.config.capacity.max_items_per_section);
        let (font, color, indent) = match section.style {
            SectionStyle::Bullets => (self.font(10.0, false), &self.palette.text_primary, s.inch(0.15)),
            SectionStyle::Text => (self.font(10.0, false), &self.palette.text_secondary, 0.0),
        };
        let text_width = column.width - indent;

        let mut shown = 0;
        for item in items {
            let block = TextBlock::wrap(item, &self.fonts, &font, text_width, s.inch(0.18));
            if block.is_empty() {
                shown += 1;
                continue;
            }
            if !cursor.fits(block.height() - block.line_height) {
                break;
            }
            if section.style == SectionStyle::Bullets {
                let bullet = self.run(column.x, cursor.y(), "\u{2022}", &font, color);
                draft.canvas.text(bullet);
            }
            self.draw_lines(draft, cursor, &block, column.x + indent, color);
            shown += 1;
        }
        draft.note_truncation(&section.header, shown, section.items.len());
        cursor.advance(s.inch(0.2));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SlideKind, SlideSpec};
    use super::*;
    use crate::config::LayoutConfig;
    use crate::fonts::FontLibrary;
    use deckline_style::Palette;
    use deckline_types::Size;

    #[test]
    fn sections_split_into_two_columns_and_cap_items() {
        let composer = LayoutComposer::new(
            Size::new(720.0, 405.0),
            FontLibrary::standard(),
            Palette::default(),
            LayoutConfig::default(),
        );
        let slide = ContentSlide {
            title: "Why now".into(),
            sections: vec![
                SectionBlock {
                    header: "Pain points".into(),
                    items: (1..=8).map(|i| format!("Pain {i}")).collect(),
                    style: SectionStyle::Bullets,
                },
                SectionBlock {
                    header: "Summary".into(),
                    items: vec!["Short paragraph of context.".into()],
                    style: SectionStyle::Text,
                },
            ],
        };
        let composed = composer.compose(&SlideSpec::Content(slide), None);

        assert_eq!(composed.kind, SlideKind::Content);
        let left = composed.region("column-left").unwrap();
        let right = composed.region("column-right").unwrap();
        assert!(left.right() < right.x);
        assert!(composed.canvas.contains_text("PAIN POINTS"));
        assert!(composed.canvas.contains_text("Pain 6"));
        assert!(!composed.canvas.contains_text("Pain 7"));
        assert_eq!(composed.truncations.len(), 1);
        assert_eq!(composed.truncations[0].shown, 6);
        assert_eq!(composed.truncations[0].total, 8);
    }
}
