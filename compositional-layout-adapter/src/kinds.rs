use alloc::sync::Arc;

use compositional_layout::{
    Anchor, AnchorEdges, BoundaryAlignment, BoundarySupplementaryItem, Dimension, EdgeInsets,
    Group, Item, LayoutNode, LayoutSize, ListConfiguration, OrthogonalScroll, Section,
    SeparatorConfig, SupplementaryItem, SwipeAction, SwipeActionStyle, SwipeActions,
    carousel_transforms,
};

use crate::SectionProvider;

pub const HEADER_ELEMENT_KIND: &str = "section-header";
pub const BADGE_ELEMENT_KIND: &str = "badge";

/// The four reference section shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionKind {
    HorizontalRow,
    Grid,
    List,
    Carousel,
}

/// What a [`SectionKind`] does, looked up by tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionCapabilities {
    pub scrolls_orthogonally: bool,
    pub pages: bool,
    pub uses_list_layout: bool,
    pub shows_badges: bool,
    pub transforms_on_scroll: bool,
    pub shows_header: bool,
}

// Indexed by `SectionKind as usize`.
const CAPABILITIES: [SectionCapabilities; 4] = [
    // HorizontalRow
    SectionCapabilities {
        scrolls_orthogonally: true,
        pages: false,
        uses_list_layout: false,
        shows_badges: true,
        transforms_on_scroll: false,
        shows_header: true,
    },
    // Grid
    SectionCapabilities {
        scrolls_orthogonally: false,
        pages: false,
        uses_list_layout: false,
        shows_badges: false,
        transforms_on_scroll: false,
        shows_header: true,
    },
    // List
    SectionCapabilities {
        scrolls_orthogonally: false,
        pages: false,
        uses_list_layout: true,
        shows_badges: false,
        transforms_on_scroll: false,
        shows_header: false,
    },
    // Carousel
    SectionCapabilities {
        scrolls_orthogonally: true,
        pages: true,
        uses_list_layout: false,
        shows_badges: false,
        transforms_on_scroll: true,
        shows_header: true,
    },
];

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::HorizontalRow,
        SectionKind::Grid,
        SectionKind::List,
        SectionKind::Carousel,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn capabilities(self) -> &'static SectionCapabilities {
        &CAPABILITIES[self as usize]
    }

    /// Builds this kind's constraint tree, driven by its capability table entry.
    pub fn section(self) -> Section {
        let caps = self.capabilities();
        let mut section = if caps.uses_list_layout {
            Section::list(list_configuration())
        } else {
            Section::new(self.root_group(caps))
                .with_content_insets(EdgeInsets::symmetric(8.0, 16.0))
                .with_inter_group_spacing(if caps.pages { 12.0 } else { 8.0 })
        };

        section.orthogonal_scroll = match (caps.scrolls_orthogonally, caps.pages) {
            (false, _) => OrthogonalScroll::None,
            (true, false) => OrthogonalScroll::Continuous,
            (true, true) => OrthogonalScroll::GroupPagingCentered,
        };
        if caps.transforms_on_scroll {
            section = section.with_invalidation_handler(Some(carousel_transforms));
        }
        if caps.shows_header {
            section = section.with_boundary_supplementary_items([BoundarySupplementaryItem::new(
                LayoutSize::new(Dimension::FractionalOfParent(1.0), Dimension::Estimated(44.0)),
                HEADER_ELEMENT_KIND,
                BoundaryAlignment::Top,
            )]);
        }
        section
    }

    fn root_group(self, caps: &SectionCapabilities) -> Group {
        let mut cell = Item::new(LayoutSize::new(
            Dimension::Ignored,
            Dimension::FractionalOfParent(1.0),
        ))
        .with_content_insets(EdgeInsets::uniform(4.0));
        if caps.shows_badges {
            cell = cell.with_supplementary_items([SupplementaryItem::new(
                LayoutSize::absolute(20.0, 20.0),
                BADGE_ELEMENT_KIND,
                Anchor::new(AnchorEdges::TOP | AnchorEdges::TRAILING)
                    .with_fractional_offset(0.3, -0.3),
            )]);
        }

        match self {
            Self::HorizontalRow => {
                Group::horizontal_repeating(LayoutSize::absolute(110.0, 110.0), cell, 1)
            }
            Self::Carousel => Group::horizontal_repeating(
                LayoutSize::new(
                    Dimension::FractionalOfContainer(0.8),
                    Dimension::Absolute(220.0),
                ),
                cell,
                1,
            ),
            // 1-2-1: a full-width cell, a pair, a full-width cell. The outer height is the sum.
            Self::Grid | Self::List => {
                let wide = || {
                    LayoutNode::from(Item::new(LayoutSize::new(
                        Dimension::FractionalOfParent(1.0),
                        Dimension::Absolute(150.0),
                    )))
                };
                let pair = Group::horizontal_repeating(
                    LayoutSize::new(Dimension::FractionalOfParent(1.0), Dimension::Absolute(100.0)),
                    cell,
                    2,
                )
                .with_inter_item_spacing(Dimension::Absolute(8.0));
                Group::vertical(
                    LayoutSize::new(
                        Dimension::FractionalOfContainer(1.0),
                        Dimension::Estimated(400.0),
                    ),
                    [wide(), pair.into(), wide()],
                )
                .with_inter_item_spacing(Dimension::Absolute(8.0))
            }
        }
    }
}

/// Rows alternate by evenness: even rows can be deleted and show an inset separator, odd rows
/// can be flagged and hide theirs.
fn list_configuration() -> ListConfiguration {
    ListConfiguration::new(44.0)
        .with_trailing_swipe_actions(Some(|index: usize| {
            (index % 2 == 0).then(|| {
                SwipeActions::new([SwipeAction::new("Delete", SwipeActionStyle::Destructive)])
            })
        }))
        .with_leading_swipe_actions(Some(|index: usize| {
            (index % 2 == 1)
                .then(|| SwipeActions::new([SwipeAction::new("Flag", SwipeActionStyle::Normal)]))
        }))
        .with_separator(Some(|index: usize| {
            if index % 2 == 0 {
                SeparatorConfig::VISIBLE.with_leading_inset(16.0)
            } else {
                SeparatorConfig::HIDDEN
            }
        }))
}

/// A provider serving [`SectionKind::ALL`] by index.
pub fn reference_provider() -> SectionProvider {
    Arc::new(|index| SectionKind::from_index(index).map(SectionKind::section))
}
