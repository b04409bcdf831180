use crate::{LayoutEnvironment, OrthogonalScroll, ResolvedSection, Section};

/// Where a horizontal scroll released at `proposed` should settle.
///
/// For [`OrthogonalScroll::GroupPagingCentered`] this is the offset that centers the root-group
/// tile nearest to the proposed viewport center; other modes keep `proposed`. The result is
/// clamped to the scrollable range `[0, content width - container width]`.
pub fn paging_target_offset(
    section: &Section,
    resolved: &ResolvedSection,
    proposed: f32,
    env: &LayoutEnvironment,
) -> f32 {
    let max_offset = (resolved.content_size.width - env.container_size.width).max(0.0);
    if section.orthogonal_scroll != OrthogonalScroll::GroupPagingCentered {
        return proposed.clamp(0.0, max_offset);
    }
    let half = env.inset_by(section.content_insets).effective_content_size.width / 2.0;
    let center = proposed + half;

    let mut best: Option<(f32, f32)> = None;
    for tile in resolved.root_groups() {
        let delta = tile.frame.mid_x() - center;
        let distance = if delta < 0.0 { -delta } else { delta };
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, tile.frame.mid_x()));
        }
    }
    let Some((_, mid_x)) = best else {
        return proposed.clamp(0.0, max_offset);
    };
    ldebug!(proposed, target = mid_x - half, "paging snap");
    (mid_x - half).clamp(0.0, max_offset)
}
