use super::{Draft, FunnelLevel, FunnelSlide, FunnelStage, LayoutComposer, capped};
use crate::funnel::{FunnelGeometry, FunnelLevelBox, label_size};
use crate::text::{TextBlock, truncate_to_width};
use crate::tree::{Extent, LayoutBox};
use deckline_style::{ShapeStyle, Stroke, TextAlign};
use deckline_types::{Point, Rect};

const STAGE_HEIGHT_IN: f32 = 0.8;
const STAGE_PITCH_IN: f32 = 0.95;
/// Detail lines that fit under a stage title.
const STAGE_DETAILS: usize = 3;
const LEVEL_HEIGHT_IN: f32 = 0.6;
const LEVEL_PITCH_IN: f32 = 0.85;
const LEVEL_WIDTH_STEP: f32 = 0.18;
const MAX_LABEL_LINES: usize = 3;

impl LayoutComposer {
    pub(super) fn compose_funnel(&self, draft: &mut Draft, slide: &FunnelSlide) {
        let s = self.scale;
        let frame = self.card_frame(0.6, 0.4);
        self.draw_card(draft, &frame);
        self.draw_header_title(draft, &frame, frame.card.x + s.inch(0.4), &slide.title, 20.0);

        let columns = LayoutBox::row(vec![
            LayoutBox::slot("stages").extent(Extent::Fraction(0.5)),
            LayoutBox::slot("funnel").extent(Extent::Fraction(0.5)),
        ])
        .gap(s.inch(0.4))
        .resolve(frame.content);

        self.draw_stages(draft, columns.rect("stages"), &slide.stages);
        self.draw_funnel(draft, columns.rect("funnel"), &slide.levels);
    }

    fn draw_stages(&self, draft: &mut Draft, column: Rect, stages: &[FunnelStage]) {
        let s = self.scale;
        let accent = &self.palette.accent;
        let title_font = self.font(11.0, true);
        let detail_font = self.font(9.0, false);

        let mut shown = 0;
        for (i, stage) in stages.iter().enumerate() {
            let top = column.top() - i as f32 * s.inch(STAGE_PITCH_IN);
            let rect = Rect::new(column.x, top - s.inch(STAGE_HEIGHT_IN), column.width, s.inch(STAGE_HEIGHT_IN));
            if rect.y < column.y {
                break;
            }
            let step = i.min(5) as f32;
            draft.canvas.rounded_rect(
                rect,
                s.inch(0.08),
                ShapeStyle::filled(accent.with_alpha(0.15 - step * 0.02))
                    .with_stroke(Stroke::new(accent.with_alpha(0.3 + step * 0.05), s.pt(1.0))),
            );
            draft.region(format!("stage-{i}"), rect);

            let text_x = rect.x + s.inch(0.2);
            let text_width = rect.width - s.inch(0.4);
            let title = truncate_to_width(&stage.title, &self.fonts, &title_font, text_width);
            draft.canvas.text(self.run(
                text_x,
                top - s.inch(0.25),
                &title,
                &title_font,
                &self.palette.text_primary,
            ));

            let details = capped(&stage.details, STAGE_DETAILS);
            draft.note_truncation(&stage.title, details.len(), stage.details.len());
            for (j, detail) in details.iter().enumerate() {
                let text = truncate_to_width(
                    &format!("\u{2022} {detail}"),
                    &self.fonts,
                    &detail_font,
                    text_width,
                );
                draft.canvas.text(self.run(
                    text_x + s.inch(0.05),
                    top - s.inch(0.45) - j as f32 * s.inch(0.15),
                    &text,
                    &detail_font,
                    &self.palette.text_secondary,
                ));
            }
            shown += 1;
        }
        draft.note_truncation("stages", shown, stages.len());
    }

    fn draw_funnel(&self, draft: &mut Draft, track: Rect, levels: &[FunnelLevel]) {
        let s = self.scale;
        let geometry = FunnelGeometry {
            track_x: track.x,
            track_width: track.width,
            top: track.top(),
            level_height: s.inch(LEVEL_HEIGHT_IN),
            pitch: s.inch(LEVEL_PITCH_IN),
            width_step: LEVEL_WIDTH_STEP,
        };
        let boxes: Vec<FunnelLevelBox> = geometry
            .levels(levels.len(), self.config.capacity.max_funnel_levels)
            .into_iter()
            .take_while(|b| b.rect.y >= track.y)
            .collect();
        draft.note_truncation("funnel levels", boxes.len(), levels.len());
        draft.region("funnel-track", track);

        for (level_box, level) in boxes.iter().zip(levels) {
            self.draw_funnel_level(draft, level_box, level);
        }
        for pair in boxes.windows(2) {
            self.draw_funnel_arrow(draft, pair[0].rect, pair[1].rect);
        }
    }

    fn draw_funnel_level(&self, draft: &mut Draft, level_box: &FunnelLevelBox, level: &FunnelLevel) {
        let s = self.scale;
        let i = level_box.index;
        let rect = level_box.rect;
        let accent = &self.palette.accent;
        let step = i.min(5) as f32;

        draft.canvas.rounded_rect(
            rect,
            s.inch(0.08),
            ShapeStyle::filled(accent.with_alpha(0.20 - step * 0.03))
                .with_stroke(Stroke::new(accent.with_alpha(0.5 + step * 0.1), s.pt(2.0))),
        );
        draft.region(format!("funnel-level-{i}"), rect);

        // Caption along the bottom edge, label block centered in the space above it.
        let caption_font = self.font(8.0, false);
        let caption_y = rect.y + s.inch(0.1);
        let caption = if level.vendors.is_empty() {
            format!("Level {}", i + 1)
        } else {
            format!("Level {} \u{b7} {}", i + 1, level.vendors.join(", "))
        };
        let caption = truncate_to_width(&caption, &self.fonts, &caption_font, rect.width - s.inch(0.2));
        draft.canvas.text(self.run_aligned(
            rect.center().x,
            caption_y,
            &caption,
            &caption_font,
            &self.palette.text_secondary,
            TextAlign::Center,
        ));

        let font = self.font(label_size(i), true);
        let max_width = rect.width - s.inch(0.3);
        let mut block = TextBlock::wrap(&level.label, &self.fonts, &font, max_width, font.size * 1.2);
        block.clamp_lines(MAX_LABEL_LINES, &self.fonts, max_width);

        let center_y = (caption_y + caption_font.size + rect.top()) / 2.0;
        let first = center_y + (block.lines.len().saturating_sub(1)) as f32 * block.line_height / 2.0
            - font.size * 0.35;
        for (n, line) in block.lines.iter().enumerate() {
            draft.canvas.text(self.run_aligned(
                rect.center().x,
                first - n as f32 * block.line_height,
                &line.text,
                &font,
                &self.palette.text_primary,
                TextAlign::Center,
            ));
        }
    }

    fn draw_funnel_arrow(&self, draft: &mut Draft, upper: Rect, lower: Rect) {
        let s = self.scale;
        let x = upper.center().x;
        let stroke = Stroke::new(self.palette.accent.with_alpha(0.6), s.pt(1.5));
        let tip = Point::new(x, lower.top() + s.inch(0.04));
        draft
            .canvas
            .line(Point::new(x, upper.y - s.inch(0.04)), tip, stroke.clone());
        let head = s.inch(0.06);
        draft
            .canvas
            .line(Point::new(x - head, tip.y + head), tip, stroke.clone());
        draft.canvas.line(Point::new(x + head, tip.y + head), tip, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::super::SlideSpec;
    use super::*;
    use crate::config::LayoutConfig;
    use crate::fonts::FontLibrary;
    use deckline_style::Palette;
    use deckline_types::Size;

    fn composer() -> LayoutComposer {
        LayoutComposer::new(
            Size::new(792.0, 445.5),
            FontLibrary::standard(),
            Palette::default(),
            LayoutConfig::default(),
        )
    }

    fn level(label: &str) -> FunnelLevel {
        FunnelLevel {
            label: label.into(),
            vendors: Vec::new(),
        }
    }

    #[test]
    fn four_levels_narrow_strictly() {
        let slide = FunnelSlide {
            title: "Propensity Funnel".into(),
            stages: vec![FunnelStage {
                title: "Market to Account View".into(),
                details: vec!["TAM-SAM-SOM".into(), "Spend Potential".into()],
            }],
            levels: vec![
                level("4.4M companies, $127bn annually"),
                level("11,759 using IBM QRadar"),
                level("724 intent: Ransomware + SIEM"),
                level("Contacts by Dept, Location, Seniority"),
                level("A fifth level that the policy hides"),
            ],
        };
        let composed = composer().compose(&SlideSpec::Funnel(slide), None);

        let widths: Vec<f32> = composed
            .regions_with_prefix("funnel-level-")
            .iter()
            .map(|(_, r)| r.width)
            .collect();
        assert_eq!(widths.len(), 4);
        assert!(widths.windows(2).all(|w| w[1] < w[0]));
        assert!(composed.canvas.contains_text("Level 4"));
        assert!(!composed.canvas.contains_text("Level 5"));
        assert!(composed
            .truncations
            .iter()
            .any(|t| t.section == "funnel levels" && t.shown == 4 && t.total == 5));
    }

    #[test]
    fn long_labels_wrap_inside_their_box() {
        let slide = FunnelSlide {
            title: "Funnel".into(),
            stages: Vec::new(),
            levels: vec![
                level("a"),
                level("b"),
                level("c"),
                level("Contacts by Department, Location, Seniority and Buying Committee Role"),
            ],
        };
        let composed = composer().compose(&SlideSpec::Funnel(slide), None);
        let narrowest = composed.region("funnel-level-3").unwrap();
        let label_runs: Vec<_> = composed
            .canvas
            .texts()
            .filter(|r| r.font.size == 8.0 && r.font.weight.is_bold())
            .collect();
        assert!(label_runs.len() > 1);
        for run in label_runs {
            assert!(run.width <= narrowest.width - 21.6 + 1e-3);
            assert!(narrowest.contains_rect(&run.bounds(), 0.5));
        }
    }
}
