//! Slide templates.
//!
//! `LayoutComposer` turns a `SlideSpec` into a `ComposedSlide`: a canvas of
//! draw commands plus named regions and a record of everything the
//! template had to leave out. Composition never fails. Content that does not
//! fit is capped or clipped and reported as a `TruncationNotice`.

mod content;
pub mod decor;
mod frame;
mod funnel_slide;
mod grid;
mod icp;
mod title;

pub use decor::{Anchor, LogoPlacement, LogoRef};

use crate::config::LayoutConfig;
use crate::fonts::FontLibrary;
use crate::primitives::{SlideCanvas, TextRun};
use deckline_style::{FontSpec, Palette, TextAlign};
use deckline_types::{Color, Point, Rect, Scale, Size};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionStyle {
    #[default]
    Bullets,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBlock {
    pub header: String,
    pub items: Vec<String>,
    pub style: SectionStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSlide {
    pub title: String,
    pub sections: Vec<SectionBlock>,
}

/// One corner of the card grid: a colored circle with a caption and a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrant {
    /// Caption inside the circle. `\n` splits it over lines.
    pub label: String,
    pub color: Color,
    pub items: Vec<String>,
}

/// Quadrants are placed top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSlide {
    pub title: String,
    pub quadrants: Vec<Quadrant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub title: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelLevel {
    pub label: String,
    pub vendors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelSlide {
    pub title: String,
    pub stages: Vec<FunnelStage>,
    pub levels: Vec<FunnelLevel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalItem {
    pub description: String,
    pub vendors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IcpSlide {
    pub number: u32,
    pub title: String,
    pub industries: Vec<String>,
    /// Free text, wrapped to `max_body_lines`.
    pub departments: String,
    pub key_roles: Vec<String>,
    pub legacy_signals: Vec<SignalItem>,
    pub expansion_signals: Vec<SignalItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideSpec {
    Title(TitleSlide),
    Content(ContentSlide),
    Grid(GridSlide),
    Funnel(FunnelSlide),
    Icp(IcpSlide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Title,
    Content,
    Grid,
    Funnel,
    Icp,
}

impl SlideSpec {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideSpec::Title(_) => SlideKind::Title,
            SlideSpec::Content(_) => SlideKind::Content,
            SlideSpec::Grid(_) => SlideKind::Grid,
            SlideSpec::Funnel(_) => SlideKind::Funnel,
            SlideSpec::Icp(_) => SlideKind::Icp,
        }
    }
}

/// Content a template hid to stay inside its frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationNotice {
    pub section: String,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct ComposedSlide {
    pub kind: SlideKind,
    pub canvas: SlideCanvas,
    /// Named geometry, e.g. `badge-0` or `funnel-level-2`.
    pub regions: BTreeMap<String, Rect>,
    pub truncations: Vec<TruncationNotice>,
    /// Header band of card templates. Decorations align to it.
    pub header: Option<Rect>,
}

impl ComposedSlide {
    pub fn region(&self, name: &str) -> Option<Rect> {
        self.regions.get(name).copied()
    }

    /// Regions whose name starts with `prefix`, in name order.
    pub fn regions_with_prefix(&self, prefix: &str) -> Vec<(&str, Rect)> {
        self.regions
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), *v))
            .collect()
    }
}

/// The first `max` items. A section gets one truncation notice, so callers
/// report what was hidden after drawing, against the uncapped length.
fn capped<T>(items: &[T], max: usize) -> &[T] {
    &items[..items.len().min(max)]
}

/// Slide under construction.
pub(crate) struct Draft {
    kind: SlideKind,
    canvas: SlideCanvas,
    regions: BTreeMap<String, Rect>,
    truncations: Vec<TruncationNotice>,
    header: Option<Rect>,
}

impl Draft {
    fn new(kind: SlideKind, size: Size) -> Self {
        Self {
            kind,
            canvas: SlideCanvas::new(size),
            regions: BTreeMap::new(),
            truncations: Vec::new(),
            header: None,
        }
    }

    fn region(&mut self, name: impl Into<String>, rect: Rect) {
        self.regions.insert(name.into(), rect);
    }

    fn note_truncation(&mut self, section: &str, shown: usize, total: usize) {
        if shown >= total {
            return;
        }
        log::debug!(
            "{:?} slide: '{}' shows {} of {} items",
            self.kind,
            section,
            shown,
            total
        );
        self.truncations.push(TruncationNotice {
            section: section.to_string(),
            shown,
            total,
        });
    }

    fn finish(self) -> ComposedSlide {
        ComposedSlide {
            kind: self.kind,
            canvas: self.canvas,
            regions: self.regions,
            truncations: self.truncations,
            header: self.header,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutComposer {
    fonts: FontLibrary,
    palette: Palette,
    config: LayoutConfig,
    size: Size,
    scale: Scale,
    brand_name: String,
}

impl LayoutComposer {
    pub fn new(size: Size, fonts: FontLibrary, palette: Palette, config: LayoutConfig) -> Self {
        Self {
            fonts,
            palette,
            config,
            size,
            scale: Scale::for_page_width(size.width),
            brand_name: String::new(),
        }
    }

    /// Text drawn where the grid slide's center logo would go when no logo is loaded.
    pub fn with_brand_name(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = brand_name.into();
        self
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn compose(&self, spec: &SlideSpec, logo: Option<&LogoRef>) -> ComposedSlide {
        let mut draft = Draft::new(spec.kind(), self.size);
        draft
            .canvas
            .fill_rect(Rect::from_size(self.size), self.palette.background.clone());

        match spec {
            SlideSpec::Title(slide) => self.compose_title(&mut draft, slide, logo),
            SlideSpec::Content(slide) => self.compose_content(&mut draft, slide),
            SlideSpec::Grid(slide) => self.compose_grid(&mut draft, slide, logo),
            SlideSpec::Funnel(slide) => self.compose_funnel(&mut draft, slide),
            SlideSpec::Icp(slide) => self.compose_icp(&mut draft, slide),
        }
        draft.finish()
    }

    /// Centers `text` near the bottom edge in the secondary text color.
    pub fn draw_footer(&self, slide: &mut ComposedSlide, text: &str) {
        let font = self.font(9.0, false);
        let run = self.run_aligned(
            self.size.width / 2.0,
            self.scale.inch(0.3),
            text,
            &font,
            &self.palette.text_secondary,
            TextAlign::Center,
        );
        slide.regions.insert("footer".to_string(), run.bounds());
        slide.canvas.text(run);
    }

    /// A Helvetica face at `size` layout points, scaled to the page.
    fn font(&self, size: f32, bold: bool) -> FontSpec {
        let size = self.scale.pt(size);
        if bold {
            FontSpec::bold(size)
        } else {
            FontSpec::regular(size)
        }
    }

    fn run(&self, x: f32, y: f32, text: &str, font: &FontSpec, color: &Color) -> TextRun {
        TextRun {
            origin: Point::new(x, y),
            text: text.to_string(),
            font: font.clone(),
            color: color.clone(),
            width: self.fonts.measure(text, font),
        }
    }

    fn run_aligned(
        &self,
        anchor_x: f32,
        y: f32,
        text: &str,
        font: &FontSpec,
        color: &Color,
        align: TextAlign,
    ) -> TextRun {
        let mut run = self.run(anchor_x, y, text, font, color);
        run.origin.x = align.line_start(anchor_x, run.width);
        run
    }
}
