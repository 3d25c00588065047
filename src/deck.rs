//! Sequencing, decorating and writing slides.

use crate::assets::LogoAsset;
use crate::config::GeneratorConfig;
use crate::error::DeckError;
use deckline_layout::{
    Anchor, ComposedSlide, FontLibrary, LayoutComposer, LogoPlacement, SlideKind, SlideSpec,
    TruncationNotice,
};
use deckline_render_core::{DocumentInfo, DocumentRenderer, ImageAsset};
use deckline_render_lopdf::LopdfRenderer;
use deckline_types::Size;
use std::io::Write;
use std::path::Path;

/// Builds a deck one slide at a time.
///
/// Slides are composed as they are pushed, so page numbers follow call order.
/// Every slide except the title gets a `"{brand} | Page {n}"` footer and, on
/// card templates, a logo centered on the header band.
pub struct DeckBuilder {
    composer: LayoutComposer,
    brand_name: String,
    include_logo: bool,
    /// In layout inches.
    header_logo_size: f32,
    logo: Option<LogoAsset>,
    warned_missing_logo: bool,
    info: DocumentInfo,
    slides: Vec<ComposedSlide>,
}

impl DeckBuilder {
    pub fn new(config: &GeneratorConfig, fonts: FontLibrary, logo: Option<LogoAsset>) -> Self {
        let composer = LayoutComposer::new(
            config.canvas.size(),
            fonts,
            config.palette.clone(),
            config.layout_config(),
        )
        .with_brand_name(config.brand_name.clone());

        let mut info = DocumentInfo::new(format!("{} deck", config.brand_name));
        info.author = Some(config.brand_name.clone());
        info.creator = Some(concat!("deckline ", env!("CARGO_PKG_VERSION")).to_string());

        Self {
            composer,
            brand_name: config.brand_name.clone(),
            include_logo: config.include_logo,
            header_logo_size: config.header_logo_size.in_inches(),
            logo,
            warned_missing_logo: false,
            info,
            slides: Vec::new(),
        }
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    pub fn composer(&self) -> &LayoutComposer {
        &self.composer
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Composes `spec` as the next page and decorates it.
    pub fn push(&mut self, spec: &SlideSpec) -> &ComposedSlide {
        let logo = match (&self.logo, self.include_logo) {
            (Some(logo), true) => Some(logo.logo_ref()),
            _ => None,
        };
        let mut slide = self.composer.compose(spec, logo.as_ref());
        let page = self.slides.len() + 1;
        self.decorate(&mut slide, page);
        self.slides.push(slide);
        &self.slides[page - 1]
    }

    fn decorate(&mut self, slide: &mut ComposedSlide, page: usize) {
        if slide.kind == SlideKind::Title {
            return;
        }
        if let Some(header) = slide.header {
            let placement =
                LogoPlacement::new(Anchor::TopRight, self.header_logo_size).centered_on(header.center().y);
            self.add_logo(slide, &placement);
        }
        let footer = format!("{} | Page {}", self.brand_name, page);
        self.composer.draw_footer(slide, &footer);
    }

    /// Draws the logo at `placement`. Without a loaded logo this draws nothing
    /// and warns once per builder.
    pub fn add_logo(&mut self, slide: &mut ComposedSlide, placement: &LogoPlacement) {
        if !self.include_logo {
            return;
        }
        let Some(logo) = &self.logo else {
            if !self.warned_missing_logo {
                log::warn!("No logo loaded; slides are drawn without it");
                self.warned_missing_logo = true;
            }
            return;
        };
        let rect = self
            .composer
            .place_logo(&mut slide.canvas, &logo.logo_ref(), placement);
        slide.regions.insert("header-logo".to_string(), rect);
    }

    pub fn finish(self) -> Deck {
        let logo_used = self.slides.iter().any(|s| s.canvas.images().next().is_some());
        let images = match self.logo {
            Some(logo) if logo_used => vec![logo.image().clone()],
            _ => Vec::new(),
        };
        Deck {
            size: self.composer.size(),
            fonts: self.composer.fonts().clone(),
            info: self.info,
            slides: self.slides,
            images,
        }
    }
}

/// A truncation on a given page, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTruncation {
    pub page: usize,
    pub notice: TruncationNotice,
}

/// Summary of a generated deck.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckReport {
    pub pages: usize,
    pub truncations: Vec<PageTruncation>,
    pub logo_drawn: bool,
}

/// An ordered, finished set of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    size: Size,
    fonts: FontLibrary,
    info: DocumentInfo,
    slides: Vec<ComposedSlide>,
    images: Vec<ImageAsset>,
}

impl Deck {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn slides(&self) -> &[ComposedSlide] {
        &self.slides
    }

    pub fn page_count(&self) -> usize {
        self.slides.len()
    }

    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    pub fn report(&self) -> DeckReport {
        let truncations = self
            .slides
            .iter()
            .enumerate()
            .flat_map(|(i, slide)| {
                slide.truncations.iter().map(move |notice| PageTruncation {
                    page: i + 1,
                    notice: notice.clone(),
                })
            })
            .collect();
        DeckReport {
            pages: self.slides.len(),
            truncations,
            logo_drawn: !self.images.is_empty(),
        }
    }

    /// Renders every slide as a PDF page into `writer` and hands it back.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<W, DeckError> {
        let mut renderer: Box<LopdfRenderer<W>> = Box::new(LopdfRenderer::new(self.fonts.clone()));
        renderer.begin_document(writer, &self.info)?;
        for image in &self.images {
            renderer.register_image(image)?;
        }
        for slide in &self.slides {
            renderer.render_page(&slide.canvas)?;
        }
        Ok(renderer.finish()?)
    }

    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, DeckError> {
        self.write_to(Vec::new())
    }

    /// Writes the deck to `path`. The document is rendered in memory first,
    /// so a failure leaves no partial file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DeckError> {
        let path = path.as_ref();
        let bytes = self.to_pdf_bytes()?;
        std::fs::write(path, &bytes)?;
        log::info!(
            "Wrote {} pages ({} bytes) to {}",
            self.slides.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}
