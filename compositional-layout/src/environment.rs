use alloc::collections::BTreeMap;

use crate::{EdgeInsets, Point, Size};

/// Host-measured sizes keyed by data index.
///
/// Ordered so that identical measurements always iterate identically.
pub type MeasurementMap = BTreeMap<usize, Size>;

/// A read-only snapshot of the runtime context for one resolution pass.
///
/// The host rebuilds (or updates) it each pass. It holds no UI objects.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutEnvironment {
    pub container_size: Size,
    pub content_insets: EdgeInsets,
    /// `container_size` minus `content_insets`.
    pub effective_content_size: Size,
    pub scroll_offset: Point,
    /// Measured overrides for `Estimated` dimensions.
    pub measurements: MeasurementMap,
}

impl LayoutEnvironment {
    pub fn new(container_size: Size) -> Self {
        Self {
            container_size,
            content_insets: EdgeInsets::ZERO,
            effective_content_size: container_size,
            scroll_offset: Point::ZERO,
            measurements: MeasurementMap::new(),
        }
    }

    pub fn with_content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self.effective_content_size = Size::new(
            (self.container_size.width - insets.horizontal()).max(0.0),
            (self.container_size.height - insets.vertical()).max(0.0),
        );
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: Point) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_measurements(mut self, measurements: MeasurementMap) -> Self {
        self.measurements = measurements;
        self
    }

    pub fn set_scroll_offset(&mut self, scroll_offset: Point) {
        self.scroll_offset = scroll_offset;
    }

    /// Records a host-measured size for the item at `index`.
    ///
    /// Returns `true` when the stored measurement changed.
    pub fn measure(&mut self, index: usize, size: Size) -> bool {
        if self.measurements.get(&index) == Some(&size) {
            return false;
        }
        self.measurements.insert(index, size);
        true
    }

    pub fn measured(&self, index: usize) -> Option<Size> {
        self.measurements.get(&index).copied()
    }

    /// Derives the environment seen by a section with `insets`: the effective content size
    /// shrinks further, everything else is carried over.
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        let mut env = self.clone();
        env.effective_content_size = Size::new(
            (self.effective_content_size.width - insets.horizontal()).max(0.0),
            (self.effective_content_size.height - insets.vertical()).max(0.0),
        );
        env
    }
}
