pub mod color;
pub mod geometry;
pub mod units;

pub use color::{Color, ColorError};
pub use geometry::{Insets, Point, Rect, Size};
pub use units::{INCH, Scale};
