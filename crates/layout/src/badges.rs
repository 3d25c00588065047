//! Pill-shaped labels laid out in wrapping rows.

use crate::fonts::FontLibrary;
use deckline_style::FontSpec;
use deckline_types::Rect;

/// Sizing of a badge row, all in page points.
#[derive(Debug, Clone)]
pub struct BadgeStyle {
    pub font: FontSpec,
    /// Total horizontal padding added to the measured label width.
    pub padding_x: f32,
    pub height: f32,
    /// Horizontal space between neighbouring badges.
    pub gap: f32,
    /// Distance from one row's bottom edge to the next row's bottom edge.
    pub row_pitch: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgePlacement {
    pub text: String,
    pub rect: Rect,
    pub text_width: f32,
    pub row: usize,
}

/// Places badges left to right from `(left, bottom)`, starting a new row
/// when the next badge would cross `right_bound`. The first badge of a row
/// always stays on that row, however wide it is.
pub fn layout_badges<S: AsRef<str>>(
    labels: &[S],
    fonts: &FontLibrary,
    style: &BadgeStyle,
    left: f32,
    bottom: f32,
    right_bound: f32,
) -> Vec<BadgePlacement> {
    let mut placements = Vec::with_capacity(labels.len());
    let mut x = left;
    let mut row = 0;
    let mut row_has_badge = false;

    for label in labels {
        let text = label.as_ref();
        let text_width = fonts.measure(text, &style.font);
        let width = text_width + style.padding_x;

        if row_has_badge && x + width > right_bound {
            row += 1;
            x = left;
        }

        placements.push(BadgePlacement {
            text: text.to_string(),
            rect: Rect::new(x, bottom - row as f32 * style.row_pitch, width, style.height),
            text_width,
            row,
        });
        x += width + style.gap;
        row_has_badge = true;
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> BadgeStyle {
        BadgeStyle {
            font: FontSpec::regular(9.0),
            padding_x: 21.6,
            height: 18.0,
            gap: 14.4,
            row_pitch: 28.8,
        }
    }

    #[test]
    fn wraps_before_crossing_the_bound() {
        let fonts = FontLibrary::standard();
        let labels = ["CISO", "SOC Manager", "Security Architect", "IT Director"];
        let placements = layout_badges(&labels, &fonts, &style(), 50.0, 200.0, 200.0);

        assert_eq!(placements.len(), 4);
        for p in &placements {
            assert!(p.rect.right() <= 200.0 || p.rect.x == 50.0);
        }
        assert!(placements.iter().any(|p| p.row > 0));
        let second_row = placements.iter().find(|p| p.row == 1).unwrap();
        assert_eq!(second_row.rect.x, 50.0);
        assert_eq!(second_row.rect.y, 200.0 - 28.8);
    }

    #[test]
    fn layout_is_deterministic() {
        let fonts = FontLibrary::standard();
        let labels = vec!["VP Security".to_string(), "Threat Analyst".to_string()];
        let a = layout_badges(&labels, &fonts, &style(), 0.0, 0.0, 150.0);
        let b = layout_badges(&labels, &fonts, &style(), 0.0, 0.0, 150.0);
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_first_badge_keeps_its_row() {
        let fonts = FontLibrary::standard();
        let placements = layout_badges(&["A very long role title indeed"], &fonts, &style(), 0.0, 0.0, 20.0);
        assert_eq!(placements[0].row, 0);
    }
}
