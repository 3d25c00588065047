use crate::error::RenderError;
use deckline_layout::LogoRef;

/// Metadata written into the document's info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A decoded raster, split into 8-bit RGB samples and an optional alpha
/// channel. `alpha` is `None` when every pixel is opaque.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl ImageAsset {
    /// Decodes PNG, JPEG or GIF bytes.
    pub fn decode(key: impl Into<String>, bytes: &[u8]) -> Result<Self, RenderError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        let pixels = (width as usize) * (height as usize);
        let mut rgb = Vec::with_capacity(pixels * 3);
        let mut alpha = Vec::with_capacity(pixels);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }
        let alpha = if alpha.iter().all(|&a| a == u8::MAX) {
            None
        } else {
            Some(alpha)
        };

        Ok(Self {
            key: key.into(),
            width,
            height,
            rgb,
            alpha,
        })
    }

    /// Layout handle for placing this image on a slide.
    pub fn logo_ref(&self) -> LogoRef {
        LogoRef::new(self.key.clone(), self.width, self.height)
    }
}
