use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    FrameId, LayoutEnvironment, Point, Rect, ResolvedFrame, ResolvedSection, Section, Transform,
};

/// Share of the viewport width by which a carousel cell shrinks per full viewport of distance.
pub const CAROUSEL_SCALE_FACTOR: f32 = 0.25;

/// A presentation transform for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTransform {
    pub id: FrameId,
    pub transform: Transform,
}

/// A per-frame scroll hook.
///
/// Receives the visible renderable frames, the live scroll offset and the section's
/// environment, and returns presentation transforms. It must be a pure function of its
/// arguments: configuration is captured immutably, never mutated.
pub type InvalidationHandler =
    Arc<dyn Fn(&[ResolvedFrame], Point, &LayoutEnvironment) -> Vec<FrameTransform> + Send + Sync>;

/// Drives a section's [`InvalidationHandler`] on scroll without re-running resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollInvalidationDriver;

impl ScrollInvalidationDriver {
    /// The viewport rect, in section-local coordinates, for the environment's scroll offset.
    pub fn viewport(env: &LayoutEnvironment) -> Rect {
        Rect {
            origin: env.scroll_offset,
            size: env.container_size,
        }
    }

    /// Runs `section`'s handler over the frames of `resolved` that intersect the viewport.
    ///
    /// `env` is the environment the section was resolved with, carrying the live scroll
    /// offset. `resolved` is only read: geometry stays canonical for hit-testing.
    pub fn invalidate(
        section: &Section,
        resolved: &ResolvedSection,
        env: &LayoutEnvironment,
    ) -> Vec<FrameTransform> {
        let Some(handler) = &section.invalidation_handler else {
            return Vec::new();
        };
        let section_env = env.inset_by(section.content_insets);
        let visible: Vec<ResolvedFrame> = resolved
            .visible_frames(Self::viewport(env))
            .cloned()
            .collect();
        ltrace!(
            visible = visible.len(),
            offset_x = env.scroll_offset.x,
            offset_y = env.scroll_offset.y,
            "invalidate"
        );
        handler(&visible, env.scroll_offset, &section_env)
    }
}

/// Scales each frame down with its horizontal distance from the viewport center.
///
/// `scale = |center.x - (offset.x + width / 2)| / width * CAROUSEL_SCALE_FACTOR`, emitted as a
/// uniform `1 - scale` transform. A centered frame gets the identity.
pub fn carousel_transforms(
    visible: &[ResolvedFrame],
    offset: Point,
    env: &LayoutEnvironment,
) -> Vec<FrameTransform> {
    let width = env.effective_content_size.width;
    if width <= 0.0 {
        return Vec::new();
    }
    let viewport_center = offset.x + width / 2.0;
    visible
        .iter()
        .map(|f| {
            let delta = f.frame.mid_x() - viewport_center;
            let distance = if delta < 0.0 { -delta } else { delta };
            let scale = distance / width * CAROUSEL_SCALE_FACTOR;
            FrameTransform {
                id: f.id,
                transform: Transform::scale(1.0 - scale),
            }
        })
        .collect()
}
