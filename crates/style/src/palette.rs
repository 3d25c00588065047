use deckline_types::Color;
use serde::{Deserialize, Serialize};

/// Named color tokens of a deck theme.
///
/// Every field has a default, so a theme file only needs to list the tokens
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub sidebar: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    #[serde(alias = "border_default")]
    pub border: Color,
    pub border_card: Color,
    pub white: Color,
    pub black: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x06, 0x04, 0x0f),
            card: Color::rgb(0x12, 0x0a, 0x1f),
            sidebar: Color::rgb(0x0e, 0x08, 0x17),
            accent: Color::rgb(0xc0, 0x84, 0xfc),
            text_primary: Color::rgb(0xf2, 0xf2, 0xf2),
            text_secondary: Color::rgb(0xa6, 0xa6, 0xa6),
            border: Color::rgb(0x3a, 0x2d, 0x4f),
            border_card: Color::rgb(0x26, 0x1b, 0x35),
            white: Color::rgb(0xff, 0xff, 0xff),
            black: Color::rgb(0x00, 0x00, 0x00),
        }
    }
}

impl Palette {
    /// Looks a token up by its name.
    pub fn get(&self, token: &str) -> Option<&Color> {
        match token {
            "background" => Some(&self.background),
            "card" => Some(&self.card),
            "sidebar" => Some(&self.sidebar),
            "accent" => Some(&self.accent),
            "text_primary" => Some(&self.text_primary),
            "text_secondary" => Some(&self.text_secondary),
            "border" | "border_default" => Some(&self.border),
            "border_card" => Some(&self.border_card),
            "white" => Some(&self.white),
            "black" => Some(&self.black),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dark_theme() {
        let palette = Palette::default();
        assert_eq!(palette.accent.to_hex(), "#c084fc");
        assert_eq!(palette.background.to_hex(), "#06040f");
        assert_eq!(palette.get("border_default"), Some(&palette.border));
        assert_eq!(palette.get("chartreuse"), None);
    }

    #[test]
    fn partial_override_keeps_other_tokens() {
        let palette: Palette =
            serde_json::from_str(r##"{"accent":"hsl(200, 80%, 60%)","border_default":"#111"}"##)
                .unwrap();
        assert_ne!(palette.accent, Palette::default().accent);
        assert_eq!(palette.border, Color::rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.card, Palette::default().card);
    }
}
