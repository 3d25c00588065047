//! Rendering abstractions shared by deckline backends.
//!
//! - `DocumentRenderer` turns composed slide canvases into pages
//! - `RenderError` covers everything a backend can fail on
//! - `ImageAsset` is a decoded raster ready to embed
//! - `utils` holds color and resource-naming helpers

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
pub use types::{DocumentInfo, ImageAsset};
