use glade::{layout, Direction, Edges, Element, Rect, Size};

#[test]
fn column_stacks_children_vertically() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .children([
            Element::text("a").id("a").height(Size::Fixed(2)),
            Element::text("b").id("b").height(Size::Fixed(3)),
        ]);

    let result = layout(&root, Rect::from_size(10, 10));
    assert_eq!(result["a"].y, 0);
    assert_eq!(result["a"].height, 2);
    assert_eq!(result["b"].y, 2);
    assert_eq!(result["b"].height, 3);
}

#[test]
fn fill_children_share_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .children([
            Element::box_().id("fixed").width(Size::Fixed(4)),
            Element::box_().id("f1").width(Size::Fill),
            Element::box_().id("f2").width(Size::Fill),
        ]);

    let result = layout(&root, Rect::from_size(20, 5));
    assert_eq!(result["fixed"].width, 4);
    assert_eq!(result["f1"].width, 8);
    assert_eq!(result["f2"].width, 8);
    assert_eq!(result["f2"].x, 12);
}

#[test]
fn padding_offsets_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(2))
        .child(Element::text("inner").id("inner").height(Size::Fixed(1)));

    let result = layout(&root, Rect::from_size(10, 10));
    assert_eq!(result["inner"].x, 2);
    assert_eq!(result["inner"].y, 2);
}

#[test]
fn gap_separates_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .gap(1)
        .children([
            Element::text("a").id("a").height(Size::Fixed(1)),
            Element::text("b").id("b").height(Size::Fixed(1)),
        ]);

    let result = layout(&root, Rect::from_size(10, 10));
    assert_eq!(result["a"].y, 0);
    assert_eq!(result["b"].y, 2);
}

#[test]
fn auto_text_sizes_to_content() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .children([
            Element::text("hello").id("t"),
            Element::box_().id("rest").width(Size::Fill),
        ]);

    let result = layout(&root, Rect::from_size(20, 5));
    assert_eq!(result["t"].width, 5);
    assert_eq!(result["rest"].x, 5);
    assert_eq!(result["rest"].width, 15);
}

#[test]
fn children_clamp_to_available_space() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .children([
            Element::box_().id("big").height(Size::Fixed(8)),
            Element::box_().id("overflow").height(Size::Fixed(8)),
        ]);

    let result = layout(&root, Rect::from_size(10, 10));
    assert_eq!(result["big"].height, 8);
    assert_eq!(result["overflow"].height, 2);
}

#[test]
fn nested_direction_switches_axis() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(
            Element::row()
                .id("bar")
                .direction(Direction::Row)
                .height(Size::Fixed(1))
                .children([
                    Element::text("left").id("l"),
                    Element::text("right").id("r"),
                ]),
        );

    let result = layout(&root, Rect::from_size(20, 5));
    assert_eq!(result["l"].x, 0);
    assert_eq!(result["r"].x, 4);
    assert_eq!(result["l"].y, 0);
    assert_eq!(result["r"].y, 0);
}

#[test]
fn rect_contains_is_edge_exclusive() {
    let rect = Rect::new(2, 3, 4, 2);
    assert!(rect.contains(2, 3));
    assert!(rect.contains(5, 4));
    assert!(!rect.contains(6, 4));
    assert!(!rect.contains(5, 5));
}
