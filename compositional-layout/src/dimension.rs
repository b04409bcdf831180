use crate::{Axis, LayoutError, Size};

/// A resolvable size expression for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// A literal extent in points.
    Absolute(f32),
    /// A fraction of the environment's effective content size on the same axis.
    FractionalOfContainer(f32),
    /// A fraction of the enclosing node's extent on the same axis.
    FractionalOfParent(f32),
    /// A fraction of the enclosing node's extent on the *other* axis.
    FractionalOfOther(f32),
    /// An initial guess, replaced by a host-measured extent when one is available.
    ///
    /// On a group this means "sum of the resolved children".
    Estimated(f32),
    /// The extent is imposed by the enclosing group and never resolved on its own.
    Ignored,
}

impl Dimension {
    pub fn is_estimated(&self) -> bool {
        matches!(self, Self::Estimated(_))
    }

    /// Resolves this dimension along `axis`.
    ///
    /// `Ignored` only resolves through a parent-imposed extent, so reaching it here is an
    /// ambiguity. Negative results are clamped to zero.
    pub fn resolve(self, axis: Axis, ctx: &DimensionContext) -> Result<f32, LayoutError> {
        let ambiguous = |axis| LayoutError::AmbiguousReference {
            axis,
            node: ctx.node,
        };
        let value = match self {
            Self::Absolute(points) => points,
            Self::FractionalOfContainer(fraction) => fraction * ctx.container.along(axis),
            Self::FractionalOfParent(fraction) => {
                fraction * ctx.parent_extent(axis).ok_or_else(|| ambiguous(axis))?
            }
            Self::FractionalOfOther(fraction) => {
                let other = axis.cross();
                fraction * ctx.parent_extent(other).ok_or_else(|| ambiguous(other))?
            }
            Self::Estimated(points) => ctx
                .measured
                .map(|measured| measured.along(axis))
                .unwrap_or(points),
            Self::Ignored => return Err(ambiguous(axis)),
        };
        if value < 0.0 {
            lwarn!(?axis, value, node = ctx.node, "negative extent clamped to zero");
            return Ok(0.0);
        }
        Ok(value)
    }
}

/// A width/height pair of dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutSize {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    pub fn absolute(width: f32, height: f32) -> Self {
        Self::new(Dimension::Absolute(width), Dimension::Absolute(height))
    }

    pub fn along(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// What a [`Dimension`] may reference while it is being resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionContext {
    /// The environment's effective content size.
    pub container: Size,
    /// Known extents of the enclosing node (`None` while that extent is content-driven).
    pub parent_width: Option<f32>,
    pub parent_height: Option<f32>,
    /// A host-measured size that overrides `Estimated` dimensions.
    pub measured: Option<Size>,
    /// Node label used in errors and logs.
    pub node: &'static str,
}

impl DimensionContext {
    pub fn new(container: Size, node: &'static str) -> Self {
        Self {
            container,
            parent_width: None,
            parent_height: None,
            measured: None,
            node,
        }
    }

    pub fn with_parent(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.parent_width = width;
        self.parent_height = height;
        self
    }

    pub fn with_measured(mut self, measured: Option<Size>) -> Self {
        self.measured = measured;
        self
    }

    pub fn parent_extent(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.parent_width,
            Axis::Vertical => self.parent_height,
        }
    }
}
