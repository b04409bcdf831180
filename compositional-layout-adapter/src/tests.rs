use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use compositional_layout::{
    EdgeInsets, FrameId, FrameKind, LayoutError, OrthogonalScroll, Point, Size, SwipeActionStyle,
};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// Row, grid, list, carousel.
fn reference_controller() -> LayoutController {
    LayoutController::new(reference_provider(), [6, 8, 5, 5], Size::new(320.0, 640.0))
}

#[test]
fn unknown_sections_are_errors() {
    let mut c = LayoutController::from_fn(
        |index| (index == 0).then(|| SectionKind::Grid.section()),
        [4, 4],
        Size::new(320.0, 640.0),
    );

    assert!(c.section(0).is_ok());
    assert_eq!(
        c.layout_section(1).err(),
        Some(LayoutError::UnknownSectionIndex { index: 1 })
    );
    assert_eq!(
        c.layout_section(7).err(),
        Some(LayoutError::UnknownSectionIndex { index: 7 })
    );
    assert_eq!(
        c.set_item_count(2, 1),
        Err(LayoutError::UnknownSectionIndex { index: 2 })
    );
    assert!(c.layout().is_err());
}

#[test]
fn provider_runs_once_per_index() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut c = LayoutController::from_fn(
        move |index| {
            counter.fetch_add(1, Ordering::SeqCst);
            SectionKind::from_index(index)
                .filter(|kind| *kind != SectionKind::Grid)
                .map(SectionKind::section)
        },
        [3, 3],
        Size::new(320.0, 640.0),
    );

    assert!(c.section(0).is_ok());
    assert!(c.layout_section(0).is_ok());
    assert!(c.measure(0, 0, Size::new(90.0, 90.0)).is_ok());
    assert!(c.layout_section(0).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // A missing section is remembered too.
    assert!(c.section(1).is_err());
    assert!(c.section(1).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn layout_stacks_sections_vertically() {
    let mut c = reference_controller();
    let sections = c.layout().unwrap();
    assert_eq!(sections.len(), 4);

    let heights: Vec<f32> = sections.iter().map(|s| s.content_size.height).collect();
    let expected = [170.0, 900.0, 220.0, 280.0];
    for (h, e) in heights.iter().zip(expected) {
        assert!(approx_eq(*h, e), "heights {heights:?}");
    }

    // Headers sit at the top of each stacked section.
    let header_y = |i: usize| {
        sections[i]
            .frame(FrameId::boundary(0))
            .map(|f| f.frame.origin.y)
    };
    assert_eq!(header_y(0), Some(0.0));
    assert_eq!(header_y(1), Some(170.0));
    assert_eq!(header_y(2), None);
    assert_eq!(header_y(3), Some(1290.0));

    let first_row = sections[2].item_frame(0).unwrap().frame;
    assert!(approx_eq(first_row.origin.y, 1070.0));
    assert!(approx_eq(first_row.size.width, 320.0));

    // Orthogonal sections report their horizontal extent.
    assert!(approx_eq(sections[0].content_size.width, 16.0 + 700.0 + 16.0));
    assert!(approx_eq(sections[3].content_size.width, 1232.0));
    assert!(approx_eq(sections[1].content_size.width, 320.0));
}

#[test]
fn measurement_triggers_a_second_pass_once() {
    let mut c = reference_controller();
    assert!(approx_eq(c.layout_section(2).unwrap().content_size.height, 220.0));

    assert_eq!(c.measure(2, 0, Size::new(320.0, 100.0)), Ok(true));
    assert_eq!(c.measure(2, 0, Size::new(320.0, 100.0)), Ok(false));

    let list = c.layout_section(2).unwrap();
    assert!(approx_eq(list.content_size.height, 276.0));
    assert!(approx_eq(list.item_frame(1).unwrap().frame.origin.y, 100.0));
}

#[test]
fn environment_and_item_count_changes_invalidate() {
    let mut c = reference_controller();
    assert!(approx_eq(c.layout_section(1).unwrap().content_size.width, 320.0));

    c.set_environment(Size::new(400.0, 640.0), EdgeInsets::ZERO);
    let grid = c.layout_section(1).unwrap();
    assert!(approx_eq(grid.content_size.width, 400.0));
    assert!(approx_eq(grid.item_frame(0).unwrap().frame.size.width, 368.0));

    assert_eq!(c.set_item_count(0, 2), Ok(()));
    assert_eq!(c.layout_section(0).unwrap().item_count(), 2);
    assert_eq!(c.item_count(0), Some(2));
}

#[test]
fn carousel_scroll_emits_transforms_without_moving_frames() {
    let mut c = reference_controller();
    let before = c.layout_section(3).unwrap().clone();

    let transforms = c.on_scroll(3, Point::new(200.0, 0.0)).unwrap();
    let ids: Vec<FrameId> = transforms.iter().map(|t| t.id).collect();
    assert_eq!(ids, [FrameId::item(0), FrameId::item(1), FrameId::item(2)]);

    // Item 1 (mid x 373.6) is nearest the viewport center (200 + 144).
    let scale = |i: usize| transforms[i].transform.scale_x;
    assert!(approx_eq(scale(1), 1.0 - 29.6 / 288.0 * 0.25));
    assert!(scale(1) > scale(0) && scale(1) > scale(2));
    assert!(transforms.iter().all(|t| t.transform.scale_x <= 1.0));

    assert_eq!(c.layout_section(3).unwrap(), &before);
    assert_eq!(c.scroll_offset(3), Some(Point::new(200.0, 0.0)));

    // The row has no scroll hook.
    assert!(c.on_scroll(0, Point::new(50.0, 0.0)).unwrap().is_empty());
}

#[test]
fn paging_snap_animates_to_the_nearest_tile() {
    let mut c = reference_controller();
    c.on_scroll(3, Point::new(200.0, 0.0)).unwrap();

    let target = c.end_scroll(3, 0, 100, Easing::Linear).unwrap().unwrap();
    assert!(approx_eq(target, 229.6));
    assert!(c.is_animating(3));

    let mid = c.tick(50).unwrap();
    assert_eq!(mid.len(), 1);
    assert_eq!(mid[0].section, 3);
    assert!(approx_eq(mid[0].offset.x, 214.8));
    assert!(!mid[0].transforms.is_empty());

    let done = c.tick(100).unwrap();
    assert!(approx_eq(done[0].offset.x, target));
    assert!(!c.is_animating(3));
    assert!(c.tick(150).unwrap().is_empty());

    // A scroll during the snap cancels it.
    c.on_scroll(3, Point::new(600.0, 0.0)).unwrap();
    assert!(c.end_scroll(3, 200, 100, Easing::SmoothStep).unwrap().is_some());
    c.on_scroll(3, Point::new(610.0, 0.0)).unwrap();
    assert!(!c.is_animating(3));
}

#[test]
fn end_scroll_without_paging_or_movement_does_nothing() {
    let mut c = reference_controller();
    c.on_scroll(0, Point::new(120.0, 0.0)).unwrap();
    assert_eq!(c.end_scroll(0, 0, 100, Easing::Linear), Ok(None));

    // Already settled on the first tile (the target clamps to 0).
    c.on_scroll(3, Point::ZERO).unwrap();
    assert_eq!(c.end_scroll(3, 0, 100, Easing::Linear), Ok(None));
    assert!(!c.is_animating(3));
}

#[test]
fn capability_table_matches_built_sections() {
    let mut c = reference_controller();
    for (index, kind) in SectionKind::ALL.into_iter().enumerate() {
        let caps = *kind.capabilities();
        let section = kind.section();
        assert_eq!(
            section.orthogonal_scroll.is_orthogonal(),
            caps.scrolls_orthogonally,
            "{kind:?}"
        );
        assert_eq!(
            section.orthogonal_scroll == OrthogonalScroll::GroupPagingCentered,
            caps.pages
        );
        assert_eq!(section.list_configuration().is_some(), caps.uses_list_layout);
        assert_eq!(section.invalidation_handler.is_some(), caps.transforms_on_scroll);
        assert_eq!(!section.boundary_supplementary_items.is_empty(), caps.shows_header);

        let resolved = c.layout_section(index).unwrap();
        let badges = resolved
            .frames
            .iter()
            .filter(|f| f.element_kind.as_deref() == Some(BADGE_ELEMENT_KIND))
            .count();
        assert_eq!(badges > 0, caps.shows_badges, "{kind:?}");
        if caps.shows_badges {
            assert_eq!(badges, resolved.item_count());
            assert!(resolved
                .frames
                .iter()
                .filter(|f| f.kind() == FrameKind::SupplementaryItem)
                .all(|f| f.data_index.is_some()));
        }
    }
    assert_eq!(SectionKind::from_index(4), None);
}

#[test]
fn reference_list_rows_alternate_by_evenness() {
    let mut c = reference_controller();
    let list = c.layout_section(2).unwrap();
    assert_eq!(list.rows.len(), 5);

    for row in &list.rows {
        let even = row.index % 2 == 0;
        assert_eq!(row.trailing_swipe_actions.is_some(), even);
        assert_eq!(row.leading_swipe_actions.is_some(), !even);
        assert_eq!(row.separator.visible, even);
    }

    let delete = list.row(0).unwrap().trailing_swipe_actions.as_ref().unwrap();
    assert_eq!(delete.actions[0].style, SwipeActionStyle::Destructive);
    assert_eq!(delete.actions[0].title, "Delete");
    assert!(approx_eq(list.row(0).unwrap().separator.leading_inset, 16.0));

    let flag = list.row(1).unwrap().leading_swipe_actions.as_ref().unwrap();
    assert_eq!(flag.actions[0].style, SwipeActionStyle::Normal);
}

#[test]
fn tween_is_monotonic_and_retargets_from_current_value() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        let t = Tween::new(0.0, 100.0, 10, 100, easing);
        let mut last = t.sample(0);
        assert!(approx_eq(last, 0.0));
        for now in (10..=120).step_by(5) {
            let v = t.sample(now);
            assert!(v >= last, "{easing:?} went backwards at {now}");
            last = v;
        }
        assert!(approx_eq(last, 100.0));
        assert!(t.is_done(110));
    }

    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    t.retarget(50, 0.0, 50);
    assert!(approx_eq(t.from, 50.0));
    assert!(approx_eq(t.sample(75), 25.0));

    // Zero durations are bumped so sampling never divides by zero.
    assert_eq!(Tween::new(1.0, 2.0, 0, 0, Easing::Linear).duration_ms, 1);
}
