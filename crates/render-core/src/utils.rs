use deckline_layout::FontLibrary;
use deckline_types::Color;
use std::collections::HashMap;

/// Control point distance for approximating a quarter circle with one cubic Bezier.
pub const BEZIER_CIRCLE_KAPPA: f32 = 0.552_284_8;

/// Resource names (`F1`, `F2`, ...) for every face the library can measure,
/// keyed by PostScript name.
pub fn font_resource_map(fonts: &FontLibrary) -> HashMap<String, String> {
    fonts
        .registered_fonts()
        .iter()
        .enumerate()
        .map(|(i, face)| (face.postscript_name.clone(), format!("F{}", i + 1)))
        .collect()
}

/// Alpha rounded to whole percent, the granularity graphics states are shared at.
pub fn alpha_percent(color: &Color) -> u8 {
    (color.a.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Name of the graphics state that applies `percent` opacity, e.g. `GS35`.
pub fn alpha_state_name(percent: u8) -> String {
    format!("GS{percent}")
}
