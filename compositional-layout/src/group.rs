use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{Axis, Dimension, EdgeInsets, Item, LayoutSize};

/// A child of a [`Group`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutNode {
    Item(Item),
    Group(Box<Group>),
}

impl LayoutNode {
    pub fn size(&self) -> LayoutSize {
        match self {
            Self::Item(item) => item.size,
            Self::Group(group) => group.size,
        }
    }

    /// Number of items (data slots) this node consumes per instance.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Group(group) => group.leaf_count(),
        }
    }
}

impl From<Item> for LayoutNode {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<Group> for LayoutNode {
    fn from(group: Group) -> Self {
        Self::Group(Box::new(group))
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupChildren {
    /// `count` copies of one child sharing the group's main-axis extent equally.
    Repeated { child: Box<LayoutNode>, count: usize },
    /// An explicit ordered list, each child sized by its own dimensions.
    List(Vec<LayoutNode>),
}

/// A composite layout node arranging its children along one axis.
///
/// Groups own their children exclusively; the tree has no shared or cyclic references.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub axis: Axis,
    pub size: LayoutSize,
    pub children: GroupChildren,
    pub inter_item_spacing: Dimension,
    pub content_insets: EdgeInsets,
}

impl Group {
    pub fn new(axis: Axis, size: LayoutSize, children: GroupChildren) -> Self {
        Self {
            axis,
            size,
            children,
            inter_item_spacing: Dimension::Absolute(0.0),
            content_insets: EdgeInsets::ZERO,
        }
    }

    pub fn horizontal(size: LayoutSize, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        Self::new(
            Axis::Horizontal,
            size,
            GroupChildren::List(children.into_iter().collect()),
        )
    }

    pub fn vertical(size: LayoutSize, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        Self::new(
            Axis::Vertical,
            size,
            GroupChildren::List(children.into_iter().collect()),
        )
    }

    pub fn horizontal_repeating(
        size: LayoutSize,
        child: impl Into<LayoutNode>,
        count: usize,
    ) -> Self {
        Self::new(
            Axis::Horizontal,
            size,
            GroupChildren::Repeated {
                child: Box::new(child.into()),
                count,
            },
        )
    }

    pub fn vertical_repeating(
        size: LayoutSize,
        child: impl Into<LayoutNode>,
        count: usize,
    ) -> Self {
        Self::new(
            Axis::Vertical,
            size,
            GroupChildren::Repeated {
                child: Box::new(child.into()),
                count,
            },
        )
    }

    pub fn with_inter_item_spacing(mut self, spacing: Dimension) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    pub fn with_content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self
    }

    /// Number of items one instance of this group lays out.
    pub fn leaf_count(&self) -> usize {
        match &self.children {
            GroupChildren::Repeated { child, count } => child.leaf_count().saturating_mul(*count),
            GroupChildren::List(children) => children.iter().map(LayoutNode::leaf_count).sum(),
        }
    }
}
