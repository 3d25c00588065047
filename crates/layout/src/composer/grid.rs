use super::{Draft, GridSlide, LayoutComposer, LogoRef, Quadrant, capped};
use crate::flow::FlowCursor;
use crate::text::truncate_to_width;
use deckline_style::{DashPattern, ShapeStyle, Stroke, TextAlign};
use deckline_types::{Point, Rect};

/// Offset of each circle from the grid center, along both axes, in layout inches.
const CIRCLE_OFFSET_IN: f32 = 1.5;
const CIRCLE_RADIUS_IN: f32 = 0.5;
const LIST_WIDTH_IN: f32 = 2.8;
const BULLET_STEP_IN: f32 = 0.18;

impl LayoutComposer {
    pub(super) fn compose_grid(&self, draft: &mut Draft, slide: &GridSlide, logo: Option<&LogoRef>) {
        let s = self.scale;
        let frame = self.card_frame(0.6, 0.5);
        self.draw_card(draft, &frame);
        self.draw_header_title(draft, &frame, frame.card.x + s.inch(0.4), &slide.title, 20.0);

        let center = Point::new(frame.card.center().x, frame.content.top() - s.inch(1.8));
        draft.region("grid-center", Rect::centered_at(center, 0.0, 0.0));

        let quadrants = capped(&slide.quadrants, 4);
        draft.note_truncation("quadrants", quadrants.len(), slide.quadrants.len());
        let left_x = frame.card.x + s.inch(0.3);
        let right_x = center.x + s.inch(2.2);
        let top_list = frame.content.top() - s.inch(0.3);
        let bottom_list = center.y - s.inch(1.0);

        for (i, quadrant) in quadrants.iter().enumerate() {
            let (dx, dy) = match i {
                0 => (-1.0, 1.0),
                1 => (1.0, 1.0),
                2 => (-1.0, -1.0),
                _ => (1.0, -1.0),
            };
            let circle_center = Point::new(
                center.x + dx * s.inch(CIRCLE_OFFSET_IN),
                center.y + dy * s.inch(CIRCLE_OFFSET_IN),
            );
            self.draw_quadrant_circle(draft, circle_center, quadrant);
            draft.region(
                format!("quadrant-{i}"),
                Rect::centered_at(
                    circle_center,
                    s.inch(CIRCLE_RADIUS_IN * 2.0),
                    s.inch(CIRCLE_RADIUS_IN * 2.0),
                ),
            );

            let list_x = if dx < 0.0 { left_x } else { right_x };
            let (top, floor) = if dy > 0.0 {
                (top_list, center.y + s.inch(0.15))
            } else {
                (bottom_list, frame.card.y + s.inch(0.15))
            };
            let mut cursor = FlowCursor::new(top, floor);
            self.draw_bullet_list(draft, &mut cursor, list_x, quadrant);
        }

        // Dashed cross drawn over the lists, under the center mark.
        let configured = &self.config.grid_divider;
        let mut divider = Stroke::new(configured.color.clone(), s.pt(configured.width));
        if let Some(dash) = configured.dash {
            divider = divider.dashed(DashPattern::new(s.pt(dash.on), s.pt(dash.off)));
        }
        draft.canvas.line(
            Point::new(left_x - s.inch(0.1), center.y),
            Point::new(right_x + s.inch(LIST_WIDTH_IN + 0.1), center.y),
            divider.clone(),
        );
        draft.canvas.line(
            Point::new(center.x, frame.content.top() - s.inch(0.15)),
            Point::new(center.x, frame.card.y + s.inch(0.15)),
            divider,
        );

        self.draw_center_mark(draft, center, logo);
    }

    fn draw_quadrant_circle(&self, draft: &mut Draft, center: Point, quadrant: &Quadrant) {
        let s = self.scale;
        let radius = s.inch(CIRCLE_RADIUS_IN);
        draft.canvas.circle(
            center,
            radius,
            ShapeStyle::filled(quadrant.color.with_alpha(0.25))
                .with_stroke(Stroke::new(quadrant.color.clone(), s.pt(2.0))),
        );
        draft.canvas.circle(
            center,
            radius - s.inch(0.1),
            ShapeStyle::filled(self.palette.card.with_alpha(0.8)),
        );

        let font = self.font(10.0, true);
        let lines: Vec<&str> = quadrant.label.lines().collect();
        let step = s.inch(0.15);
        let first = center.y + (lines.len().saturating_sub(1)) as f32 * step / 2.0 - font.size * 0.35;
        let max_width = 2.0 * (radius - s.inch(0.15));
        for (i, line) in lines.iter().enumerate() {
            let text = truncate_to_width(line.trim(), &self.fonts, &font, max_width);
            let run = self.run_aligned(
                center.x,
                first - i as f32 * step,
                &text,
                &font,
                &self.palette.text_primary,
                TextAlign::Center,
            );
            draft.canvas.text(run);
        }
    }

    fn draw_bullet_list(&self, draft: &mut Draft, cursor: &mut FlowCursor, x: f32, quadrant: &Quadrant) {
        let s = self.scale;
        let section = quadrant.label.replace('\n', " ");
        let items = capped(&quadrant.items, self.config.capacity.max_items_per_section);
        let font = self.font(10.0, false);
        let width = s.inch(LIST_WIDTH_IN);

        let mut shown = 0;
        for item in items {
            let Some(baseline) = cursor.take_line(s.inch(BULLET_STEP_IN)) else {
                break;
            };
            let text = truncate_to_width(&format!("\u{2022} {item}"), &self.fonts, &font, width);
            draft
                .canvas
                .text(self.run(x, baseline, &text, &font, &self.palette.text_primary));
            shown += 1;
        }
        draft.note_truncation(&section, shown, quadrant.items.len());
    }

    /// Logo in the middle of the grid, or the brand name when there is no logo.
    fn draw_center_mark(&self, draft: &mut Draft, center: Point, logo: Option<&LogoRef>) {
        let s = self.scale;
        let pad = s.inch(0.1);
        match logo {
            Some(logo) => {
                let side = s.inch(2.5);
                let rect = logo.fit(Rect::centered_at(center, side, side));
                draft.canvas.rounded_rect(
                    Rect::new(rect.x - pad, rect.y - pad, rect.width + 2.0 * pad, rect.height + 2.0 * pad),
                    s.inch(0.08),
                    ShapeStyle::filled(self.palette.card.clone()),
                );
                draft.canvas.image(logo.key.clone(), rect);
                draft.region("center-logo", rect);
            }
            None if !self.brand_name.is_empty() => {
                let font = self.font(14.0, true);
                let run = self.run_aligned(
                    center.x,
                    center.y - font.size * 0.35,
                    &self.brand_name,
                    &font,
                    &self.palette.accent,
                    TextAlign::Center,
                );
                let bounds = run.bounds();
                draft.canvas.rounded_rect(
                    Rect::new(bounds.x - pad, bounds.y - pad, bounds.width + 2.0 * pad, bounds.height + 2.0 * pad),
                    s.inch(0.08),
                    ShapeStyle::filled(self.palette.card.clone()),
                );
                draft.region("center-logo", bounds);
                draft.canvas.text(run);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SlideSpec;
    use super::*;
    use crate::config::{CapacityPolicy, LayoutConfig};
    use crate::fonts::FontLibrary;
    use crate::primitives::DrawCommand;
    use deckline_style::Palette;
    use deckline_types::{Color, Size};

    fn quadrant(label: &str, color: Color, count: usize) -> Quadrant {
        Quadrant {
            label: label.into(),
            color,
            items: (1..=count).map(|i| format!("{label} item {i}")).collect(),
        }
    }

    fn composer() -> LayoutComposer {
        LayoutComposer::new(
            Size::new(792.0, 445.5),
            FontLibrary::standard(),
            Palette::default(),
            LayoutConfig::default(),
        )
        .with_brand_name("GTM Fabric")
    }

    fn slide() -> GridSlide {
        GridSlide {
            title: "Key Elements".into(),
            quadrants: vec![
                quadrant("Data", Color::rgb(0x34, 0x98, 0xdb), 8),
                quadrant("Workflow", Color::rgb(0x27, 0xae, 0x60), 6),
                quadrant("Experts", Color::rgb(0xe7, 0x4c, 0x3c), 4),
                quadrant("Services", Color::rgb(0xf1, 0xc4, 0x0f), 7),
            ],
        }
    }

    #[test]
    fn four_circles_around_the_center_with_capped_lists() {
        let composed = composer().compose(&SlideSpec::Grid(slide()), None);
        let circles: Vec<_> = composed.regions_with_prefix("quadrant-");
        assert_eq!(circles.len(), 4);

        assert!(composed.canvas.contains_text("Data item 6"));
        assert!(!composed.canvas.contains_text("Data item 7"));
        let hidden: Vec<_> = composed.truncations.iter().map(|t| t.section.as_str()).collect();
        assert_eq!(hidden, vec!["Data", "Services"]);

        let page = composed.canvas.bounds();
        for cmd in composed.canvas.commands() {
            assert!(page.contains_rect(&cmd.bounds(), 1.0), "off page: {cmd:?}");
        }
    }

    #[test]
    fn capped_list_that_runs_out_of_room_reports_once() {
        let config = LayoutConfig {
            capacity: CapacityPolicy {
                max_items_per_section: 12,
                ..CapacityPolicy::default()
            },
            ..LayoutConfig::default()
        };
        let composer = LayoutComposer::new(
            Size::new(792.0, 445.5),
            FontLibrary::standard(),
            Palette::default(),
            config,
        );
        let mut grid = slide();
        grid.quadrants[0] = quadrant("Data", Color::rgb(0x34, 0x98, 0xdb), 20);
        let composed = composer.compose(&SlideSpec::Grid(grid), None);

        let notices: Vec<_> = composed.truncations.iter().filter(|t| t.section == "Data").collect();
        assert_eq!(notices.len(), 1);
        let drawn = composed
            .canvas
            .texts()
            .filter(|r| r.text.starts_with("\u{2022} Data item"))
            .count();
        assert!(drawn > 0 && drawn < 12);
        assert_eq!((notices[0].shown, notices[0].total), (drawn, 20));
    }

    #[test]
    fn divider_follows_the_configured_stroke() {
        let config = LayoutConfig {
            grid_divider: Stroke::new(Color::rgb(255, 255, 255), 3.0).dashed(DashPattern::new(2.0, 2.0)),
            ..LayoutConfig::default()
        };
        let composer = LayoutComposer::new(
            Size::new(720.0, 405.0),
            FontLibrary::standard(),
            Palette::default(),
            config,
        );
        let composed = composer.compose(&SlideSpec::Grid(slide()), None);
        let ratio = 720.0 / 792.0;
        let dividers: Vec<_> = composed
            .canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { stroke, .. } if stroke.color == Color::rgb(255, 255, 255) => Some(stroke),
                _ => None,
            })
            .collect();
        assert_eq!(dividers.len(), 2);
        for stroke in dividers {
            assert!((stroke.width - 3.0 * ratio).abs() < 1e-4);
            let dash = stroke.dash.unwrap();
            assert!((dash.on - 2.0 * ratio).abs() < 1e-4);
            assert!((dash.off - 2.0 * ratio).abs() < 1e-4);
        }
    }

    #[test]
    fn center_mark_is_painted_last() {
        let composed = composer().compose(&SlideSpec::Grid(slide()), None);
        match composed.canvas.commands().last() {
            Some(DrawCommand::Text(run)) => assert_eq!(run.text, "GTM Fabric"),
            other => panic!("expected brand text last, got {other:?}"),
        }

        let logo = LogoRef::new("logo", 500, 100);
        let composed = composer().compose(&SlideSpec::Grid(slide()), Some(&logo));
        assert!(matches!(
            composed.canvas.commands().last(),
            Some(DrawCommand::Image { key, .. }) if key == "logo"
        ));
    }
}
