//! PDF renderer for deckline slides using lopdf.
//!
//! The renderer builds the whole object graph in memory and writes it out on
//! `finish`. Text is set in the base-14 Helvetica faces with WinAnsi
//! encoding, so no font files are embedded.

mod helpers;
mod renderer;

pub use helpers::render_canvas_to_content;
pub use renderer::LopdfRenderer;
