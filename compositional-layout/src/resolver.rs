use alloc::vec::Vec;

use crate::{
    Axis, BoundaryAlignment, Dimension, DimensionContext, FrameId, Group, GroupChildren, Item,
    LayoutEnvironment, LayoutError, LayoutNode, Point, Rect, ResolvedFrame, ResolvedSection,
    Section, SectionLayout, Size,
};

// Float slack when deciding whether a child starts past its group's far edge.
const OVERFLOW_EPSILON: f32 = 1e-3;

/// Per-axis extents that may still be unknown (content-driven).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Extents {
    width: Option<f32>,
    height: Option<f32>,
}

impl Extents {
    const UNKNOWN: Self = Self {
        width: None,
        height: None,
    };

    fn known(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    fn from_axes(axis: Axis, main: Option<f32>, cross: Option<f32>) -> Self {
        match axis {
            Axis::Horizontal => Self {
                width: main,
                height: cross,
            },
            Axis::Vertical => Self {
                width: cross,
                height: main,
            },
        }
    }

    fn along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

fn offset_along(origin: Point, axis: Axis, distance: f32) -> Point {
    match axis {
        Axis::Horizontal => Point::new(origin.x + distance, origin.y),
        Axis::Vertical => Point::new(origin.x, origin.y + distance),
    }
}

/// Resolves `section` into section-local frames.
///
/// The root group is tiled along the section's scroll axis (horizontal for orthogonal
/// sections, vertical otherwise) until `item_count` items are placed. The call is pure: the
/// same section, environment and count always produce identical output.
pub fn resolve_section(
    section: &Section,
    env: &LayoutEnvironment,
    item_count: usize,
) -> Result<ResolvedSection, LayoutError> {
    ldebug!(
        item_count,
        width = env.effective_content_size.width,
        height = env.effective_content_size.height,
        "resolve_section"
    );
    let insets = section.content_insets;
    let section_env = env.inset_by(insets);
    let section_width = env.effective_content_size.width;
    let mut out = ResolvedSection {
        orthogonal_scroll: section.orthogonal_scroll,
        ..ResolvedSection::default()
    };

    let mut y = place_boundaries(
        section,
        &section_env,
        BoundaryAlignment::Top,
        0.0,
        &mut out.frames,
    )?;
    let content_origin = Point::new(insets.leading, y + insets.top);

    let (main_extent, cross_extent) = match &section.layout {
        SectionLayout::List(configuration) => {
            let height = configuration.stack_rows(
                content_origin,
                section_env.effective_content_size.width,
                item_count,
                |index| env.measured(index).map(|size| size.height),
                &mut out.frames,
                &mut out.rows,
            );
            (height, section_env.effective_content_size.width)
        }
        SectionLayout::Compositional(group) => {
            validate_group(group)?;
            let scroll_axis = if section.orthogonal_scroll.is_orthogonal() {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            let mut pass = Pass::new(&section_env, item_count);
            let (main, cross) = pass.tile(
                group,
                content_origin,
                scroll_axis,
                section.inter_group_spacing,
                &mut out.tiles,
            )?;
            out.frames.append(&mut pass.frames);
            if scroll_axis == Axis::Horizontal {
                (cross, main)
            } else {
                (main, cross)
            }
        }
    };

    // `main_extent` is vertical content height; `cross_extent` is horizontal content width.
    y = content_origin.y + main_extent + insets.bottom;
    y = place_boundaries(
        section,
        &section_env,
        BoundaryAlignment::Bottom,
        y,
        &mut out.frames,
    )?;

    let width = if section.orthogonal_scroll.is_orthogonal() {
        insets.leading + cross_extent + insets.trailing
    } else {
        section_width
    };
    out.content_size = Size::new(width, y);
    ldebug!(
        frames = out.frames.len(),
        width = out.content_size.width,
        height = out.content_size.height,
        "resolve_section done"
    );
    Ok(out)
}

/// Stacks the section's boundary items with `alignment` from `y`; returns the next free `y`.
fn place_boundaries(
    section: &Section,
    section_env: &LayoutEnvironment,
    alignment: BoundaryAlignment,
    mut y: f32,
    frames: &mut Vec<ResolvedFrame>,
) -> Result<f32, LayoutError> {
    let width = section_env.effective_content_size.width;
    for (index, boundary) in section.boundary_supplementary_items.iter().enumerate() {
        if boundary.alignment != alignment {
            continue;
        }
        let ctx = DimensionContext::new(section_env.effective_content_size, "boundary item")
            .with_parent(Some(width), None);
        let size = Size::new(
            boundary.size.width.resolve(Axis::Horizontal, &ctx)?,
            boundary.size.height.resolve(Axis::Vertical, &ctx)?,
        );
        let frame = Rect {
            origin: Point::new(section.content_insets.leading, y),
            size,
        };
        frames.push(ResolvedFrame {
            id: FrameId::boundary(index),
            frame,
            content_frame: frame,
            data_index: None,
            element_kind: Some(boundary.element_kind.clone()),
        });
        y += size.height;
    }
    Ok(y)
}

/// Rejects malformed trees before any geometry is computed.
fn validate_group(group: &Group) -> Result<(), LayoutError> {
    match &group.children {
        GroupChildren::Repeated { child, count } => {
            if *count == 0 {
                return Err(LayoutError::InvalidRepeatCount { count: *count });
            }
            if let LayoutNode::Group(child) = child.as_ref() {
                validate_group(child)?;
            }
        }
        GroupChildren::List(children) => {
            for child in children {
                if let LayoutNode::Group(child) = child {
                    validate_group(child)?;
                }
            }
        }
    }
    Ok(())
}

/// State of one top-down resolution pass over a section's tiles.
struct Pass<'a> {
    env: &'a LayoutEnvironment,
    item_count: usize,
    next_item: usize,
    next_group: usize,
    frames: Vec<ResolvedFrame>,
}

impl<'a> Pass<'a> {
    fn new(env: &'a LayoutEnvironment, item_count: usize) -> Self {
        Self {
            env,
            item_count,
            next_item: 0,
            next_group: 0,
            frames: Vec::new(),
        }
    }

    /// Lays out root-group instances along `axis` until every item is covered.
    ///
    /// Returns the extents covered along `axis` and across it.
    fn tile(
        &mut self,
        group: &Group,
        origin: Point,
        axis: Axis,
        spacing: f32,
        tiles: &mut Vec<FrameId>,
    ) -> Result<(f32, f32), LayoutError> {
        let per_tile = group.leaf_count();
        if per_tile == 0 || self.item_count == 0 {
            return Ok((0.0, 0.0));
        }
        let tile_count = self.item_count.div_ceil(per_tile);
        let parent = Extents::known(self.env.effective_content_size);

        let mut cursor = 0.0f32;
        let mut cross = 0.0f32;
        for tile in 0..tile_count {
            if tile > 0 {
                cursor += spacing;
            }
            self.next_item = tile * per_tile;
            tiles.push(FrameId::group(self.next_group));
            let size = self.layout_group(
                group,
                offset_along(origin, axis, cursor),
                parent,
                Extents::UNKNOWN,
            )?;
            ltrace!(tile, main = size.along(axis), cross = size.along(axis.cross()), "tile");
            cursor += size.along(axis);
            cross = cross.max(size.along(axis.cross()));
        }
        Ok((cursor, cross))
    }

    fn context(&self, node: &'static str, parent: Extents) -> DimensionContext {
        DimensionContext::new(self.env.effective_content_size, node)
            .with_parent(parent.width, parent.height)
    }

    fn layout_node(
        &mut self,
        node: &LayoutNode,
        origin: Point,
        parent: Extents,
        imposed: Extents,
    ) -> Result<Size, LayoutError> {
        match node {
            LayoutNode::Item(item) => self.layout_item(item, origin, parent, imposed),
            LayoutNode::Group(group) => self.layout_group(group, origin, parent, imposed),
        }
    }

    fn layout_item(
        &mut self,
        item: &Item,
        origin: Point,
        parent: Extents,
        imposed: Extents,
    ) -> Result<Size, LayoutError> {
        let index = self.next_item;
        self.next_item += 1;

        let ctx = self
            .context("item", parent)
            .with_measured(self.env.measured(index));
        let size = Size::new(
            extent(item.size.width, Axis::Horizontal, imposed.width, &ctx)?,
            extent(item.size.height, Axis::Vertical, imposed.height, &ctx)?,
        );
        if index >= self.item_count {
            // Past the end of the data: the geometry still counts towards the group.
            return Ok(size);
        }

        let frame = Rect { origin, size };
        self.frames.push(ResolvedFrame {
            id: FrameId::item(index),
            frame,
            content_frame: frame.inset_by(item.content_insets),
            data_index: Some(index),
            element_kind: None,
        });

        // Supplementaries size against the owner's frame, never its content box.
        let owner = self.context("supplementary item", Extents::known(size));
        for (slot, supplementary) in item.supplementary_items.iter().enumerate() {
            let supplementary_size = Size::new(
                supplementary.size.width.resolve(Axis::Horizontal, &owner)?,
                supplementary.size.height.resolve(Axis::Vertical, &owner)?,
            );
            let placed = supplementary.anchor.place(frame, supplementary_size);
            self.frames.push(ResolvedFrame {
                id: FrameId::supplementary(index, slot),
                frame: placed,
                content_frame: placed,
                data_index: Some(index),
                element_kind: Some(supplementary.element_kind.clone()),
            });
        }
        Ok(size)
    }

    fn layout_group(
        &mut self,
        group: &Group,
        origin: Point,
        parent: Extents,
        imposed: Extents,
    ) -> Result<Size, LayoutError> {
        let ordinal = self.next_group;
        self.next_group += 1;
        let slot = self.frames.len();
        self.frames.push(ResolvedFrame {
            id: FrameId::group(ordinal),
            frame: Rect::default(),
            content_frame: Rect::default(),
            data_index: None,
            element_kind: None,
        });

        let ctx = self.context("group", parent);
        let own = Extents {
            width: group_extent(group.size.width, Axis::Horizontal, imposed.width, &ctx)?,
            height: group_extent(group.size.height, Axis::Vertical, imposed.height, &ctx)?,
        };
        let insets = group.content_insets;
        let content = Extents {
            width: own.width.map(|w| (w - insets.horizontal()).max(0.0)),
            height: own.height.map(|h| (h - insets.vertical()).max(0.0)),
        };

        let axis = group.axis;
        let cross_axis = axis.cross();
        let main_content = content.along(axis);
        let spacing = extent(
            group.inter_item_spacing,
            axis,
            None,
            &self.context("spacing", content),
        )?;
        let start = Point::new(origin.x + insets.leading, origin.y + insets.top);

        let mut cursor = 0.0f32;
        let mut cross = 0.0f32;
        match &group.children {
            GroupChildren::Repeated { child, count } => {
                let count = *count;
                // Parent-imposed share of the main axis; the child's own main dimension is ignored.
                let share = main_content
                    .map(|main| ((main - spacing * (count - 1) as f32) / count as f32).max(0.0));
                let imposed = Extents::from_axes(axis, share, None);
                for i in 0..count {
                    if i > 0 {
                        cursor += spacing;
                    }
                    let size = self.layout_node(
                        child,
                        offset_along(start, axis, cursor),
                        content,
                        imposed,
                    )?;
                    cursor += size.along(axis);
                    cross = cross.max(size.along(cross_axis));
                }
            }
            GroupChildren::List(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        cursor += spacing;
                    }
                    if let Some(far) = main_content {
                        if i > 0 && cursor >= far - OVERFLOW_EPSILON {
                            let dropped: usize =
                                children[i..].iter().map(LayoutNode::leaf_count).sum();
                            lwarn!(
                                group = ordinal,
                                dropped_children = children.len() - i,
                                dropped_items = dropped,
                                "children start past the group's far edge"
                            );
                            self.next_item += dropped;
                            cursor -= spacing;
                            break;
                        }
                    }
                    let size = self.layout_node(
                        child,
                        offset_along(start, axis, cursor),
                        content,
                        Extents::UNKNOWN,
                    )?;
                    cursor += size.along(axis);
                    cross = cross.max(size.along(cross_axis));
                }
            }
        }

        let main = own
            .along(axis)
            .unwrap_or(cursor + insets.along(axis));
        let cross = own
            .along(cross_axis)
            .unwrap_or(cross + insets.along(cross_axis));
        let frame = Rect {
            origin,
            size: Size::from_axes(axis, main, cross),
        };
        self.frames[slot].frame = frame;
        self.frames[slot].content_frame = frame.inset_by(insets);
        Ok(frame.size)
    }
}

/// Resolves an item-like extent: a parent-imposed value wins unconditionally, `Ignored`
/// fills the parent's extent.
fn extent(
    dimension: Dimension,
    axis: Axis,
    imposed: Option<f32>,
    ctx: &DimensionContext,
) -> Result<f32, LayoutError> {
    if let Some(value) = imposed {
        return Ok(value);
    }
    match dimension {
        Dimension::Ignored => ctx
            .parent_extent(axis)
            .ok_or(LayoutError::AmbiguousReference {
                axis,
                node: ctx.node,
            }),
        other => other.resolve(axis, ctx),
    }
}

/// Like [`extent`], but an `Estimated` group extent stays unknown until its children are laid
/// out.
fn group_extent(
    dimension: Dimension,
    axis: Axis,
    imposed: Option<f32>,
    ctx: &DimensionContext,
) -> Result<Option<f32>, LayoutError> {
    if imposed.is_none() && dimension.is_estimated() {
        return Ok(None);
    }
    extent(dimension, axis, imposed, ctx).map(Some)
}
