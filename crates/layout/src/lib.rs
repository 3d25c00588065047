//! Slide layout for deckline.
//!
//! Everything here works in page points with the origin at the bottom-left
//! corner. `LayoutComposer` is the entry point: it turns a `SlideSpec` into a
//! `SlideCanvas` of draw commands that a renderer replays in order.

pub mod badges;
pub mod composer;
pub mod config;
pub mod flow;
pub mod fonts;
pub mod funnel;
pub mod primitives;
pub mod text;
pub mod tree;

pub use self::composer::{
    Anchor, ComposedSlide, ContentSlide, FunnelLevel, FunnelSlide, FunnelStage, GridSlide,
    IcpSlide, LayoutComposer, LogoPlacement, LogoRef, Quadrant, SectionBlock, SectionStyle,
    SignalItem, SlideKind, SlideSpec, TitleSlide, TruncationNotice,
};
pub use self::config::{CapacityPolicy, IcpLayout, LayoutConfig};
pub use self::fonts::{FontFaceInfo, FontLibrary};
pub use self::primitives::{DrawCommand, SlideCanvas, TextRun};

// Geometry shared with the renderers.
pub use deckline_types::{Point, Rect, Size};

#[cfg(test)]
mod text_test;
