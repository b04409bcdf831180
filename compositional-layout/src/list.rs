use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{FrameId, Point, Rect, ResolvedFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeActionStyle {
    Normal,
    Destructive,
}

/// A single swipe action. Committing it is the host's business.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeAction {
    pub title: String,
    pub style: SwipeActionStyle,
}

impl SwipeAction {
    pub fn new(title: impl Into<String>, style: SwipeActionStyle) -> Self {
        Self {
            title: title.into(),
            style,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeActions {
    pub actions: Vec<SwipeAction>,
    pub performs_first_action_with_full_swipe: bool,
}

impl SwipeActions {
    pub fn new(actions: impl IntoIterator<Item = SwipeAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            performs_first_action_with_full_swipe: true,
        }
    }
}

/// Separator decision for one row.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatorConfig {
    pub visible: bool,
    pub leading_inset: f32,
    pub trailing_inset: f32,
}

impl SeparatorConfig {
    pub const VISIBLE: Self = Self {
        visible: true,
        leading_inset: 0.0,
        trailing_inset: 0.0,
    };

    pub const HIDDEN: Self = Self {
        visible: false,
        leading_inset: 0.0,
        trailing_inset: 0.0,
    };

    pub fn with_leading_inset(mut self, inset: f32) -> Self {
        self.leading_inset = inset;
        self
    }
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Returns the swipe actions for the row at an index, if any.
pub type SwipeActionsProvider = Arc<dyn Fn(usize) -> Option<SwipeActions> + Send + Sync>;

/// Returns the separator decision for the row at an index.
pub type SeparatorProvider = Arc<dyn Fn(usize) -> SeparatorConfig + Send + Sync>;

/// Configuration of a list-mode section: a vertical stack of full-width rows.
#[derive(Clone)]
pub struct ListConfiguration {
    /// Row height used until the host reports a measurement.
    pub estimated_row_height: f32,
    pub leading_swipe_actions: Option<SwipeActionsProvider>,
    pub trailing_swipe_actions: Option<SwipeActionsProvider>,
    pub separator: Option<SeparatorProvider>,
}

impl ListConfiguration {
    pub fn new(estimated_row_height: f32) -> Self {
        Self {
            estimated_row_height,
            leading_swipe_actions: None,
            trailing_swipe_actions: None,
            separator: None,
        }
    }

    pub fn with_leading_swipe_actions(
        mut self,
        f: Option<impl Fn(usize) -> Option<SwipeActions> + Send + Sync + 'static>,
    ) -> Self {
        self.leading_swipe_actions = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_trailing_swipe_actions(
        mut self,
        f: Option<impl Fn(usize) -> Option<SwipeActions> + Send + Sync + 'static>,
    ) -> Self {
        self.trailing_swipe_actions = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_separator(
        mut self,
        f: Option<impl Fn(usize) -> SeparatorConfig + Send + Sync + 'static>,
    ) -> Self {
        self.separator = f.map(|f| Arc::new(f) as _);
        self
    }

    /// Invokes the configured hooks for one row.
    pub fn row(&self, index: usize) -> ListRow {
        ListRow {
            index,
            frame_id: FrameId::item(index),
            leading_swipe_actions: self.leading_swipe_actions.as_ref().and_then(|f| f(index)),
            trailing_swipe_actions: self.trailing_swipe_actions.as_ref().and_then(|f| f(index)),
            separator: self.separator.as_ref().map(|f| f(index)).unwrap_or_default(),
        }
    }

    /// Stacks `count` rows of width `width` starting at `origin`.
    ///
    /// Each row is as tall as its measurement (if any) or the estimate. Returns the total
    /// height of the stack.
    pub(crate) fn stack_rows(
        &self,
        origin: Point,
        width: f32,
        count: usize,
        measured_height: impl Fn(usize) -> Option<f32>,
        frames: &mut Vec<ResolvedFrame>,
        rows: &mut Vec<ListRow>,
    ) -> f32 {
        let mut cursor = origin.y;
        for index in 0..count {
            let height = measured_height(index)
                .unwrap_or(self.estimated_row_height)
                .max(0.0);
            let frame = Rect::new(origin.x, cursor, width, height);
            frames.push(ResolvedFrame {
                id: FrameId::item(index),
                frame,
                content_frame: frame,
                data_index: Some(index),
                element_kind: None,
            });
            rows.push(self.row(index));
            cursor += height;
        }
        cursor - origin.y
    }
}

impl core::fmt::Debug for ListConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListConfiguration")
            .field("estimated_row_height", &self.estimated_row_height)
            .field(
                "leading_swipe_actions",
                &self.leading_swipe_actions.is_some(),
            )
            .field(
                "trailing_swipe_actions",
                &self.trailing_swipe_actions.is_some(),
            )
            .field("separator", &self.separator.is_some())
            .finish()
    }
}

/// Per-row decorations of a list-mode section, computed on every pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListRow {
    pub index: usize,
    pub frame_id: FrameId,
    pub leading_swipe_actions: Option<SwipeActions>,
    pub trailing_swipe_actions: Option<SwipeActions>,
    pub separator: SeparatorConfig,
}
