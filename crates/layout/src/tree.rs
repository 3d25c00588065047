//! Declarative box tree for slide regions.
//!
//! Templates describe their frame once, as nested rows and columns with
//! fixed, fractional or fill extents, and read the resolved rects back by
//! slot name. Columns stack top-down in page space, rows left to right.

use deckline_types::{Insets, Rect};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Size of a box along its parent's main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Page points.
    Fixed(f32),
    /// Share of the parent's main-axis length left after gaps.
    Fraction(f32),
    /// An equal share of whatever fixed and fractional children leave over.
    Fill,
}

#[derive(Debug, Clone)]
pub struct LayoutBox {
    name: Option<&'static str>,
    extent: Extent,
    padding: Insets,
    axis: Axis,
    gap: f32,
    children: Vec<LayoutBox>,
}

impl LayoutBox {
    fn container(axis: Axis, children: Vec<LayoutBox>) -> Self {
        Self {
            name: None,
            extent: Extent::Fill,
            padding: Insets::default(),
            axis,
            gap: 0.0,
            children,
        }
    }

    pub fn column(children: Vec<LayoutBox>) -> Self {
        Self::container(Axis::Vertical, children)
    }

    pub fn row(children: Vec<LayoutBox>) -> Self {
        Self::container(Axis::Horizontal, children)
    }

    /// A named leaf.
    pub fn slot(name: &'static str) -> Self {
        Self::container(Axis::Vertical, Vec::new()).named(name)
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn extent(mut self, extent: Extent) -> Self {
        self.extent = extent;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Lays the tree out inside `bounds`. A named box records its outer
    /// rect; its children are placed inside that rect minus its padding.
    pub fn resolve(&self, bounds: Rect) -> Regions {
        let mut regions = Regions::default();
        self.place(bounds, &mut regions);
        regions
    }

    fn place(&self, outer: Rect, regions: &mut Regions) {
        if let Some(name) = self.name {
            regions.0.insert(name, outer);
        }
        if self.children.is_empty() {
            return;
        }

        let inner = outer.inset(self.padding);
        let main = match self.axis {
            Axis::Horizontal => inner.width,
            Axis::Vertical => inner.height,
        };
        let gaps = self.gap * (self.children.len() - 1) as f32;
        let available = (main - gaps).max(0.0);

        let claimed: f32 = self
            .children
            .iter()
            .map(|c| match c.extent {
                Extent::Fixed(v) => v.max(0.0),
                Extent::Fraction(f) => f.max(0.0) * available,
                Extent::Fill => 0.0,
            })
            .sum();
        let fills = self
            .children
            .iter()
            .filter(|c| c.extent == Extent::Fill)
            .count();
        let fill_share = if fills > 0 {
            (available - claimed).max(0.0) / fills as f32
        } else {
            0.0
        };

        let mut cursor = 0.0;
        for child in &self.children {
            let len = match child.extent {
                Extent::Fixed(v) => v.max(0.0),
                Extent::Fraction(f) => f.max(0.0) * available,
                Extent::Fill => fill_share,
            };
            let rect = match self.axis {
                Axis::Horizontal => Rect::new(inner.x + cursor, inner.y, len, inner.height),
                Axis::Vertical => {
                    Rect::new(inner.x, inner.top() - cursor - len, inner.width, len)
                }
            };
            child.place(rect, regions);
            cursor += len + self.gap;
        }
    }
}

/// Resolved slot rects by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Regions(BTreeMap<&'static str, Rect>);

impl Regions {
    pub fn get(&self, name: &str) -> Option<Rect> {
        self.0.get(name).copied()
    }

    /// The rect for `name`, or an empty rect at the origin when the tree has no such slot.
    pub fn rect(&self, name: &str) -> Rect {
        self.get(name).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rect)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}
