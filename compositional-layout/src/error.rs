use crate::Axis;

/// Resolution-time failures. None of these are retried: the constraint tree (or the host's
/// section registry) has to be fixed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A dimension references an extent that is not known at that point of the top-down pass,
    /// e.g. `FractionalOfParent` inside a group whose own extent is content-driven.
    #[error("{node} dimension on the {axis:?} axis references an unresolved extent")]
    AmbiguousReference { axis: Axis, node: &'static str },

    #[error("repeated group count must be positive (got {count})")]
    InvalidRepeatCount { count: usize },

    #[error("no section is registered for index {index}")]
    UnknownSectionIndex { index: usize },
}
