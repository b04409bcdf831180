//! A headless compositional layout resolver.
//!
//! Layouts are described declaratively as a tree of sizing constraints: items nested in groups
//! nested in sections. Given a runtime [`LayoutEnvironment`] (container size, insets, scroll
//! offset, measured sizes), the resolver turns a [`Section`] into absolute frames for every item,
//! group and supplementary item.
//!
//! It is UI-agnostic. A rendering layer is expected to:
//! - build the constraint trees once (per section index)
//! - supply an environment snapshot on every layout pass
//! - place/reuse its views from the returned [`ResolvedFrame`]s
//! - feed scroll offsets to the [`ScrollInvalidationDriver`] and apply the returned presentation
//!   transforms
//!
//! For host-side utilities (section registry, measurement cache, paging tweens), see the
//! `compositional-layout-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dimension;
mod environment;
mod error;
mod frame;
mod geometry;
mod group;
mod invalidation;
mod item;
mod list;
mod paging;
mod resolver;
mod section;


pub use dimension::{Dimension, DimensionContext, LayoutSize};
pub use environment::{LayoutEnvironment, MeasurementMap};
pub use error::LayoutError;
pub use frame::{FrameId, FrameKind, ResolvedFrame, ResolvedSection};
pub use geometry::{Axis, EdgeInsets, Point, Rect, Size, Transform};
pub use group::{Group, GroupChildren, LayoutNode};
pub use invalidation::{
    CAROUSEL_SCALE_FACTOR, FrameTransform, InvalidationHandler, ScrollInvalidationDriver,
    carousel_transforms,
};
pub use item::{Anchor, AnchorEdges, Item, SupplementaryItem};
pub use list::{
    ListConfiguration, ListRow, SeparatorConfig, SeparatorProvider, SwipeAction, SwipeActionStyle,
    SwipeActions, SwipeActionsProvider,
};
pub use paging::paging_target_offset;
pub use resolver::resolve_section;
pub use section::{
    BoundaryAlignment, BoundarySupplementaryItem, OrthogonalScroll, Section, SectionLayout,
};
