use deckline_render_core::RenderError;
use deckline_types::ColorError;
use thiserror::Error;

/// Everything that can stop a deck from being produced.
///
/// Layout never fails: content that does not fit is truncated and reported.
/// Only reading inputs and writing the document can go wrong.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),
}
