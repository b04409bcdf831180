use compositional_layout::{EdgeInsets, Point, Size};
use compositional_layout_adapter::{Easing, LayoutController, SectionKind, reference_provider};

fn main() {
    // Example: a host driving the four reference sections without holding any UI objects.
    //
    // A host would:
    // - call layout() whenever the collection needs geometry
    // - report measured sizes for estimated rows, then lay out again
    // - forward orthogonal scroll offsets and apply the returned transforms
    // - call tick(now_ms) in a frame loop while a paging snap runs
    let mut c = LayoutController::new(reference_provider(), [6, 8, 5, 5], Size::new(320.0, 640.0));
    c.set_environment(Size::new(320.0, 640.0), EdgeInsets::ZERO);

    let Ok(sections) = c.layout() else {
        return;
    };
    for (kind, resolved) in SectionKind::ALL.iter().zip(&sections) {
        println!(
            "{kind:?}: items={} content_size={:?}",
            resolved.item_count(),
            resolved.content_size
        );
    }

    if let Ok(true) = c.measure(2, 0, Size::new(320.0, 88.0)) {
        if let Ok(list) = c.layout_section(2) {
            println!("list after measuring row 0: height={}", list.content_size.height);
        }
    }

    let carousel = 3;
    if let Ok(transforms) = c.on_scroll(carousel, Point::new(200.0, 0.0)) {
        println!("carousel transforms at 200: {transforms:?}");
    }
    let Ok(Some(target)) = c.end_scroll(carousel, 0, 240, Easing::EaseInOutCubic) else {
        return;
    };
    println!("snapping to {target}");

    let mut now_ms = 0u64;
    while c.is_animating(carousel) {
        now_ms += 16;
        let Ok(updates) = c.tick(now_ms) else {
            break;
        };
        for update in updates {
            if now_ms.is_multiple_of(80) {
                println!("t={now_ms} offset={:?}", update.offset);
            }
        }
    }
    println!("settled at {:?}", c.scroll_offset(carousel));
}
