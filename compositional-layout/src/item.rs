use alloc::string::String;
use alloc::vec::Vec;

use crate::{EdgeInsets, LayoutSize, Point, Rect, Size};

bitflags::bitflags! {
    /// The owner edges a supplementary item is pinned to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AnchorEdges: u8 {
        const TOP = 0b0001;
        const LEADING = 0b0010;
        const BOTTOM = 0b0100;
        const TRAILING = 0b1000;
    }
}

/// Positions a supplementary item relative to its owner's frame.
///
/// `fractional_offset` is measured in units of the supplementary item's own size, so
/// `(-0.5, -0.5)` with `TOP | LEADING` centers it on the owner's top-leading corner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub edges: AnchorEdges,
    pub fractional_offset: Point,
}

impl Anchor {
    pub fn new(edges: AnchorEdges) -> Self {
        Self {
            edges,
            fractional_offset: Point::ZERO,
        }
    }

    pub fn with_fractional_offset(mut self, x: f32, y: f32) -> Self {
        self.fractional_offset = Point::new(x, y);
        self
    }

    /// Places a box of `size` against `owner`.
    ///
    /// An axis with no named edge is centered. When both opposing edges are named the top
    /// (or leading) one wins.
    pub fn place(&self, owner: Rect, size: Size) -> Rect {
        let x = if self.edges.contains(AnchorEdges::LEADING) {
            owner.min_x()
        } else if self.edges.contains(AnchorEdges::TRAILING) {
            owner.max_x() - size.width
        } else {
            owner.mid_x() - size.width / 2.0
        };
        let y = if self.edges.contains(AnchorEdges::TOP) {
            owner.min_y()
        } else if self.edges.contains(AnchorEdges::BOTTOM) {
            owner.max_y() - size.height
        } else {
            owner.mid_y() - size.height / 2.0
        };
        Rect {
            origin: Point::new(
                x + self.fractional_offset.x * size.width,
                y + self.fractional_offset.y * size.height,
            ),
            size,
        }
    }
}

/// A decoration anchored to an item's frame (a badge, for example).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupplementaryItem {
    pub size: LayoutSize,
    pub element_kind: String,
    pub anchor: Anchor,
}

impl SupplementaryItem {
    pub fn new(size: LayoutSize, element_kind: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            size,
            element_kind: element_kind.into(),
            anchor,
        }
    }
}

/// A leaf layout node representing one renderable unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub size: LayoutSize,
    pub content_insets: EdgeInsets,
    pub supplementary_items: Vec<SupplementaryItem>,
}

impl Item {
    pub fn new(size: LayoutSize) -> Self {
        Self {
            size,
            content_insets: EdgeInsets::ZERO,
            supplementary_items: Vec::new(),
        }
    }

    pub fn with_content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self
    }

    pub fn with_supplementary_items(
        mut self,
        items: impl IntoIterator<Item = SupplementaryItem>,
    ) -> Self {
        self.supplementary_items = items.into_iter().collect();
        self
    }
}
