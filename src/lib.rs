//! Branded slide decks from campaign and Ideal Customer Profile data.
//!
//! ```no_run
//! use deckline::{Campaign, GeneratorConfig, IcpDeckGenerator};
//!
//! # fn main() -> Result<(), deckline::DeckError> {
//! let campaign = Campaign::from_file("campaign.json")?;
//! let generator = IcpDeckGenerator::new(GeneratorConfig::default());
//! let report = generator.generate_to_file(&campaign, "deck.pdf")?;
//! println!("{} pages", report.pages);
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod campaign;
pub mod config;
pub mod deck;
pub mod error;
pub mod generator;

pub use assets::LogoAsset;
pub use campaign::{Campaign, FunnelLevelSpec, IcpRecord, Signal, TechnographicFit};
pub use config::{CanvasProfile, GeneratorConfig};
pub use deck::{Deck, DeckBuilder, DeckReport, PageTruncation};
pub use error::DeckError;
pub use generator::IcpDeckGenerator;

pub use deckline_layout as layout;
pub use deckline_render_core as render;
pub use deckline_style as style;
pub use deckline_types as types;
