//! Logo loading. A logo that cannot be read never fails generation: the
//! deck is produced without it and a warning is logged.

use deckline_layout::LogoRef;
use deckline_render_core::ImageAsset;
use std::path::Path;

pub const LOGO_KEY: &str = "logo";

/// A decoded logo ready to be placed on slides and embedded in the output.
#[derive(Debug, Clone)]
pub struct LogoAsset {
    image: ImageAsset,
}

impl LogoAsset {
    pub fn from_image(image: ImageAsset) -> Self {
        Self { image }
    }

    /// Reads and decodes the file at `path`. Returns `None`, after logging a
    /// warning, when the file is missing or is not a supported image.
    pub fn load(path: &Path) -> Option<Self> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Logo not found at {}: {}", path.display(), e);
                return None;
            }
        };
        match ImageAsset::decode(LOGO_KEY, &bytes) {
            Ok(image) => {
                log::debug!(
                    "Loaded logo {} ({}x{})",
                    path.display(),
                    image.width,
                    image.height
                );
                Some(Self { image })
            }
            Err(e) => {
                log::warn!("Could not decode logo {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn image(&self) -> &ImageAsset {
        &self.image
    }

    pub fn logo_ref(&self) -> LogoRef {
        self.image.logo_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_no_logo() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LogoAsset::load(&dir.path().join("nope.png")).is_none());
    }

    #[test]
    fn undecodable_file_is_no_logo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(LogoAsset::load(&path).is_none());
    }
}
