use crate::error::RenderError;
use crate::types::{DocumentInfo, ImageAsset};
use deckline_layout::SlideCanvas;
use std::io::Write;

/// A paged output backend.
///
/// Call order is `begin_document`, any number of `register_image` and
/// `render_page` calls, then `finish`. Images must be registered before a
/// page that references their key is rendered.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    fn register_image(&mut self, asset: &ImageAsset) -> Result<(), RenderError>;

    /// Appends one page sized to the canvas.
    fn render_page(&mut self, canvas: &SlideCanvas) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    /// Writes the document out and hands the writer back.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
