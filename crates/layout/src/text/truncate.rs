use crate::fonts::FontLibrary;
use deckline_style::font::FontSpec;

pub const ELLIPSIS: &str = "...";

/// Hard character cap. Text longer than `cap` characters keeps its first
/// `cap - 3` characters followed by `...`, so the result is exactly `cap` long.
pub fn truncate_chars(text: &str, cap: usize) -> String {
    if text.chars().count() <= cap {
        return text.to_string();
    }
    if cap < ELLIPSIS.len() {
        return text.chars().take(cap).collect();
    }
    let mut out: String = text.chars().take(cap - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Shortens `text` until it measures within `max_width`, marking the cut with
/// an ellipsis. Returns an empty string when not even the ellipsis fits.
pub fn truncate_to_width(text: &str, fonts: &FontLibrary, font: &FontSpec, max_width: f32) -> String {
    if fonts.measure(text, font) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let prefix: String = chars.iter().collect();
        let candidate = format!("{}{}", prefix.trim_end(), ELLIPSIS);
        if fonts.measure(&candidate, font) <= max_width {
            return candidate;
        }
    }
    if fonts.measure(ELLIPSIS, font) <= max_width {
        ELLIPSIS.to_string()
    } else {
        String::new()
    }
}
