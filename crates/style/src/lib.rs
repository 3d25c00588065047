pub mod dimension;
pub mod font;
pub mod palette;
pub mod parsers;
pub mod shape;
pub mod text;

pub use dimension::Length;
pub use font::{FontSpec, FontWeight};
pub use palette::Palette;
pub use parsers::StyleParseError;
pub use shape::{DashPattern, ShapeStyle, Stroke};
pub use text::TextAlign;
