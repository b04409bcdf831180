// Example: resolve a three-up row and a paging carousel.
use compositional_layout::{
    Dimension, EdgeInsets, Group, Item, LayoutEnvironment, LayoutSize, OrthogonalScroll, Point,
    ScrollInvalidationDriver, Section, Size, carousel_transforms, paging_target_offset,
    resolve_section,
};

fn main() {
    let env = LayoutEnvironment::new(Size::new(320.0, 640.0));

    let row = Section::new(
        Group::horizontal_repeating(
            LayoutSize::new(
                Dimension::FractionalOfContainer(1.0),
                Dimension::Absolute(100.0),
            ),
            Item::new(LayoutSize::new(
                Dimension::Ignored,
                Dimension::FractionalOfParent(1.0),
            )),
            3,
        )
        .with_inter_item_spacing(Dimension::Absolute(10.0)),
    )
    .with_content_insets(EdgeInsets::new(0.0, 10.0, 0.0, 10.0));

    match resolve_section(&row, &env, 6) {
        Ok(resolved) => {
            for f in resolved.items() {
                println!("row item {:?}: {:?}", f.data_index, f.frame);
            }
            println!("row content_size={:?}", resolved.content_size);
        }
        Err(err) => println!("row failed: {err}"),
    }

    let carousel = Section::new(Group::horizontal_repeating(
        LayoutSize::new(
            Dimension::FractionalOfContainer(0.8),
            Dimension::Absolute(200.0),
        ),
        Item::new(LayoutSize::new(
            Dimension::Ignored,
            Dimension::FractionalOfParent(1.0),
        )),
        1,
    ))
    .with_inter_group_spacing(10.0)
    .with_orthogonal_scroll(OrthogonalScroll::GroupPagingCentered)
    .with_invalidation_handler(Some(carousel_transforms));

    let Ok(resolved) = resolve_section(&carousel, &env, 5) else {
        return;
    };
    for offset in [0.0, 125.0, 250.0] {
        let scrolled = env.clone().with_scroll_offset(Point::new(offset, 0.0));
        let transforms = ScrollInvalidationDriver::invalidate(&carousel, &resolved, &scrolled);
        println!("offset={offset} transforms={transforms:?}");
    }
    println!(
        "release at 200 settles at {}",
        paging_target_offset(&carousel, &resolved, 200.0, &env)
    );
}
