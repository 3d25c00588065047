use crate::fonts::FontLibrary;
use deckline_style::font::FontSpec;

/// Greedy word wrap.
///
/// Words are taken in order and appended to the current line while the
/// joined line still measures within `max_width`. A single word wider than
/// `max_width` is placed on a line of its own and never split. Whitespace
/// collapses, so wrapping the space-joined output again yields the same lines.
pub fn wrap(text: &str, fonts: &FontLibrary, font: &FontSpec, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if fonts.measure(&candidate, font) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f32,
}

/// A wrapped paragraph with measured lines.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
    pub font: FontSpec,
    pub line_height: f32,
}

impl TextBlock {
    pub fn wrap(
        text: &str,
        fonts: &FontLibrary,
        font: &FontSpec,
        max_width: f32,
        line_height: f32,
    ) -> Self {
        let lines = wrap(text, fonts, font, max_width)
            .into_iter()
            .map(|text| TextLine {
                width: fonts.measure(&text, font),
                text,
            })
            .collect();
        Self {
            lines,
            font: font.clone(),
            line_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    pub fn max_line_width(&self) -> f32 {
        self.lines.iter().map(|l| l.width).fold(0.0, f32::max)
    }

    /// Keeps at most `max_lines`, ending the last kept line with an ellipsis
    /// that fits `max_width`. Returns the number of lines dropped.
    pub fn clamp_lines(&mut self, max_lines: usize, fonts: &FontLibrary, max_width: f32) -> usize {
        if self.lines.len() <= max_lines {
            return 0;
        }
        let dropped = self.lines.len() - max_lines;
        self.lines.truncate(max_lines);
        if let Some(last) = self.lines.last_mut() {
            let marked = format!("{}{}", last.text, super::ELLIPSIS);
            last.text = super::truncate_to_width(&marked, fonts, &self.font, max_width);
            last.width = fonts.measure(&last.text, &self.font);
        }
        dropped
    }
}
