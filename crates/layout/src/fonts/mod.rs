//! Font library for text measurement.
//!
//! `FontLibrary` knows the faces slides can be set in and measures strings
//! against their advance widths. The standard library registers the two
//! base-14 faces the templates use; a renderer asks it for the registered
//! faces when it builds font resources, so measurement and output always
//! agree on the set of fonts.

mod afm;

use crate::text::encoding::{normalize, win_ansi_code};
use deckline_style::font::{DEFAULT_FAMILY, FontSpec, FontWeight};

/// Metadata and metrics of a registered face.
#[derive(Debug, Clone)]
pub struct FontFaceInfo {
    pub postscript_name: String,
    pub family: String,
    pub weight: FontWeight,
    widths: &'static [u16; 95],
}

impl FontFaceInfo {
    /// Advance width of one character in 1/1000 em. The character must
    /// already be normalized to WinAnsi.
    pub fn advance(&self, ch: char) -> u16 {
        match win_ansi_code(ch) {
            Some(code @ 32..=126) => self.widths[(code - 32) as usize],
            Some(code) if code >= 0x80 => afm::upper_half_width(code, self.weight.is_bold()),
            _ => self.widths[('?' as usize) - 32],
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }
}

/// Registry of measurable faces.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    faces: Vec<FontFaceInfo>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl FontLibrary {
    /// The base-14 Helvetica regular and bold faces.
    pub fn standard() -> Self {
        Self {
            faces: vec![
                FontFaceInfo {
                    postscript_name: "Helvetica".to_string(),
                    family: DEFAULT_FAMILY.to_string(),
                    weight: FontWeight::Regular,
                    widths: &afm::HELVETICA,
                },
                FontFaceInfo {
                    postscript_name: "Helvetica-Bold".to_string(),
                    family: DEFAULT_FAMILY.to_string(),
                    weight: FontWeight::Bold,
                    widths: &afm::HELVETICA_BOLD,
                },
            ],
        }
    }

    pub fn registered_fonts(&self) -> &[FontFaceInfo] {
        &self.faces
    }

    /// Finds the face for a family and weight.
    ///
    /// An unknown family falls back to the default family with the same
    /// boldness, so a theme naming a font we cannot measure still lays out.
    pub fn resolve(&self, family: &str, weight: &FontWeight) -> &FontFaceInfo {
        let bold = weight.is_bold();
        let exact = self
            .faces
            .iter()
            .find(|f| f.family.eq_ignore_ascii_case(family) && f.is_bold() == bold);
        if let Some(face) = exact {
            return face;
        }

        log::debug!(
            "No face registered for '{}' ({}); falling back to {}",
            family,
            weight.numeric_value(),
            DEFAULT_FAMILY
        );
        self.faces
            .iter()
            .find(|f| f.family == DEFAULT_FAMILY && f.is_bold() == bold)
            .unwrap_or(&self.faces[0])
    }

    /// The PostScript name a renderer should reference for `font`.
    pub fn postscript_name(&self, font: &FontSpec) -> &str {
        &self.resolve(&font.family, &font.weight).postscript_name
    }

    /// Width of `text` set in `font`, in the same units as `font.size`.
    pub fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        let face = self.resolve(&font.family, &font.weight);
        let units: u32 = normalize(text).chars().map(|c| face.advance(c) as u32).sum();
        units as f32 * font.size / 1000.0
    }
}
