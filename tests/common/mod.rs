pub mod fixtures;
pub mod pdf_assertions;

use deckline::{Campaign, DeckReport, GeneratorConfig, IcpDeckGenerator};
use lopdf::Document as LopdfDocument;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// A generator that never finds a logo.
pub fn generator_without_logo(dir: &Path) -> IcpDeckGenerator {
    IcpDeckGenerator::new(GeneratorConfig::default().with_logo_path(dir.join("missing.png")))
}

/// Generates `campaign` into `dir` and reads the PDF back.
pub fn generate(
    generator: &IcpDeckGenerator,
    campaign: &Campaign,
    dir: &Path,
) -> Result<(DeckReport, GeneratedPdf), Box<dyn std::error::Error>> {
    let path = dir.join("deck.pdf");
    let report = generator.generate_to_file(campaign, &path)?;
    Ok((report, GeneratedPdf::from_file(&path)?))
}
