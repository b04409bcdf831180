use alloc::string::String;
use alloc::vec::Vec;

use crate::{ListRow, OrthogonalScroll, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    Item,
    Group,
    SupplementaryItem,
    BoundarySupplementaryItem,
}

/// Stable identity of a resolved frame within one section.
///
/// - `Item`: `index` is the data index, `slot` is 0.
/// - `SupplementaryItem`: `index` is the owner's data index, `slot` its position in the owner's
///   supplementary list.
/// - `Group`: `index` is the group's pre-order ordinal within the pass.
/// - `BoundarySupplementaryItem`: `index` is its position in the section's boundary list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId {
    pub kind: FrameKind,
    pub index: usize,
    pub slot: usize,
}

impl FrameId {
    pub fn item(index: usize) -> Self {
        Self {
            kind: FrameKind::Item,
            index,
            slot: 0,
        }
    }

    pub fn group(ordinal: usize) -> Self {
        Self {
            kind: FrameKind::Group,
            index: ordinal,
            slot: 0,
        }
    }

    pub fn supplementary(owner_index: usize, slot: usize) -> Self {
        Self {
            kind: FrameKind::SupplementaryItem,
            index: owner_index,
            slot,
        }
    }

    pub fn boundary(index: usize) -> Self {
        Self {
            kind: FrameKind::BoundarySupplementaryItem,
            index,
            slot: 0,
        }
    }
}

/// Absolute geometry for one node, produced by a resolution pass.
///
/// Frames are never mutated; the next pass supersedes them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedFrame {
    pub id: FrameId,
    pub frame: Rect,
    /// `frame` minus the node's content insets.
    pub content_frame: Rect,
    /// The data item this frame maps to (items and their supplementaries).
    pub data_index: Option<usize>,
    /// Host element kind for supplementary frames.
    pub element_kind: Option<String>,
}

impl ResolvedFrame {
    pub fn kind(&self) -> FrameKind {
        self.id.kind
    }

    /// Frames that render something (items and supplementaries), as opposed to groups.
    pub fn is_renderable(&self) -> bool {
        self.id.kind != FrameKind::Group
    }
}

/// The output of resolving one section, in section-local coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedSection {
    /// Pre-order: a group precedes its children, an item precedes its supplementaries.
    pub frames: Vec<ResolvedFrame>,
    /// Extent of the section's content (along the orthogonal axis for orthogonal sections).
    pub content_size: Size,
    /// Row decorations; only list-mode sections produce rows.
    pub rows: Vec<ListRow>,
    /// Root-group frame of every tile, in tiling order.
    pub tiles: Vec<FrameId>,
    pub orthogonal_scroll: OrthogonalScroll,
}

impl ResolvedSection {
    pub fn items(&self) -> impl Iterator<Item = &ResolvedFrame> {
        self.frames.iter().filter(|f| f.id.kind == FrameKind::Item)
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    pub fn frame(&self, id: FrameId) -> Option<&ResolvedFrame> {
        self.frames.iter().find(|f| f.id == id)
    }

    pub fn item_frame(&self, data_index: usize) -> Option<&ResolvedFrame> {
        self.frame(FrameId::item(data_index))
    }

    /// Root-group tiles, in tiling order.
    pub fn root_groups(&self) -> impl Iterator<Item = &ResolvedFrame> {
        self.tiles.iter().filter_map(|id| self.frame(*id))
    }

    pub fn row(&self, index: usize) -> Option<&ListRow> {
        self.rows.iter().find(|r| r.index == index)
    }

    /// Renderable frames (items and item supplementaries) intersecting `viewport`.
    pub fn visible_frames(&self, viewport: Rect) -> impl Iterator<Item = &ResolvedFrame> {
        self.frames.iter().filter(move |f| {
            matches!(f.id.kind, FrameKind::Item | FrameKind::SupplementaryItem)
                && f.frame.intersects(&viewport)
        })
    }

    /// Returns a copy with every frame moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let mut out = self.clone();
        for f in &mut out.frames {
            f.frame = f.frame.translated(dx, dy);
            f.content_frame = f.content_frame.translated(dx, dy);
        }
        out
    }
}
