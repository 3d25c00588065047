pub mod encoding;
pub mod truncate;
pub mod wrapper;

pub use encoding::{normalize, to_win_ansi};
pub use truncate::{ELLIPSIS, truncate_chars, truncate_to_width};
pub use wrapper::{TextBlock, TextLine, wrap};
