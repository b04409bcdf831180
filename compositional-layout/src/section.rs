use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    EdgeInsets, FrameTransform, Group, InvalidationHandler, LayoutEnvironment, LayoutSize,
    ListConfiguration, Point, ResolvedFrame,
};

/// How a section scrolls relative to the collection's (vertical) scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrthogonalScroll {
    /// Tiles stack along the collection's scroll axis.
    #[default]
    None,
    /// Tiles run horizontally and scroll freely.
    Continuous,
    /// Tiles run horizontally; scrolling settles with a tile centered in the viewport.
    GroupPagingCentered,
}

impl OrthogonalScroll {
    pub fn is_orthogonal(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryAlignment {
    Top,
    Bottom,
}

/// A section-level supplementary (header or footer) spanning the section's width.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundarySupplementaryItem {
    pub size: LayoutSize,
    pub element_kind: String,
    pub alignment: BoundaryAlignment,
}

impl BoundarySupplementaryItem {
    pub fn new(
        size: LayoutSize,
        element_kind: impl Into<String>,
        alignment: BoundaryAlignment,
    ) -> Self {
        Self {
            size,
            element_kind: element_kind.into(),
            alignment,
        }
    }
}

#[derive(Clone, Debug)]
pub enum SectionLayout {
    /// Generic group math: the root group is tiled until every item is placed.
    Compositional(Group),
    /// Stacked full-width rows with per-row hooks.
    List(ListConfiguration),
}

/// The top-level layout unit, one per logical content section.
///
/// Built once by the host and treated as immutable value data afterwards. Hooks are stored in
/// `Arc`s so sections are cheap to clone.
#[derive(Clone)]
pub struct Section {
    pub layout: SectionLayout,
    /// Space between consecutive root-group tiles.
    pub inter_group_spacing: f32,
    pub content_insets: EdgeInsets,
    pub orthogonal_scroll: OrthogonalScroll,
    /// Per-frame presentation hook, run on every scroll-position change.
    pub invalidation_handler: Option<InvalidationHandler>,
    pub boundary_supplementary_items: Vec<BoundarySupplementaryItem>,
}

impl Section {
    pub fn new(root_group: Group) -> Self {
        Self::with_layout(SectionLayout::Compositional(root_group))
    }

    pub fn list(configuration: ListConfiguration) -> Self {
        Self::with_layout(SectionLayout::List(configuration))
    }

    fn with_layout(layout: SectionLayout) -> Self {
        Self {
            layout,
            inter_group_spacing: 0.0,
            content_insets: EdgeInsets::ZERO,
            orthogonal_scroll: OrthogonalScroll::None,
            invalidation_handler: None,
            boundary_supplementary_items: Vec::new(),
        }
    }

    pub fn root_group(&self) -> Option<&Group> {
        match &self.layout {
            SectionLayout::Compositional(group) => Some(group),
            SectionLayout::List(_) => None,
        }
    }

    pub fn list_configuration(&self) -> Option<&ListConfiguration> {
        match &self.layout {
            SectionLayout::Compositional(_) => None,
            SectionLayout::List(configuration) => Some(configuration),
        }
    }

    pub fn with_inter_group_spacing(mut self, spacing: f32) -> Self {
        self.inter_group_spacing = spacing;
        self
    }

    pub fn with_content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self
    }

    pub fn with_orthogonal_scroll(mut self, orthogonal_scroll: OrthogonalScroll) -> Self {
        self.orthogonal_scroll = orthogonal_scroll;
        self
    }

    pub fn with_invalidation_handler(
        mut self,
        f: Option<
            impl Fn(&[ResolvedFrame], Point, &LayoutEnvironment) -> Vec<FrameTransform>
            + Send
            + Sync
            + 'static,
        >,
    ) -> Self {
        self.invalidation_handler = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_boundary_supplementary_items(
        mut self,
        items: impl IntoIterator<Item = BoundarySupplementaryItem>,
    ) -> Self {
        self.boundary_supplementary_items = items.into_iter().collect();
        self
    }
}

impl core::fmt::Debug for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Section")
            .field("layout", &self.layout)
            .field("inter_group_spacing", &self.inter_group_spacing)
            .field("content_insets", &self.content_insets)
            .field("orthogonal_scroll", &self.orthogonal_scroll)
            .field("boundary_supplementary_items", &self.boundary_supplementary_items)
            .finish_non_exhaustive()
    }
}
