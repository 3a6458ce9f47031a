#![cfg(test)]
#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]

use highlight_rects::{
    Page, PageRect, PointerEvent, StaticPage, ViewportRect, project_point_rect,
    project_selection_rects,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn letter_page(number: u32, top: f64) -> Page<StaticPage> {
    Page::new(
        number,
        StaticPage::new(ViewportRect::from_xywh(0.0, top, 800.0, 1000.0)),
    )
}

#[test]
fn fragment_inside_page_projects_unchanged() {
    init_logging();
    let pages = vec![letter_page(1, 0.0)];
    let fragments = vec![ViewportRect {
        top: 100.0,
        left: 50.0,
        right: 300.0,
        bottom: 120.0,
        width: 250.0,
        height: 20.0,
    }];
    assert_eq!(
        project_selection_rects(&fragments, &pages, true),
        vec![PageRect::new(100.0, 50.0, 250.0, 20.0, 1)]
    );
}

#[test]
fn fragment_crossing_page_bottom_is_rejected() {
    init_logging();
    let pages = vec![letter_page(1, 0.0)];
    let fragments = vec![ViewportRect {
        top: 990.0,
        left: 50.0,
        right: 300.0,
        bottom: 1010.0,
        width: 250.0,
        height: 20.0,
    }];
    assert!(project_selection_rects(&fragments, &pages, true).is_empty());
    assert!(project_selection_rects(&fragments, &pages, false).is_empty());
}

#[test]
fn zero_sized_fragments_are_never_emitted() {
    init_logging();
    let pages = vec![letter_page(1, 0.0)];
    let fragments = vec![
        ViewportRect::from_xywh(50.0, 100.0, 0.0, 20.0),
        ViewportRect::from_xywh(50.0, 100.0, 250.0, 0.0),
        ViewportRect::from_xywh(50.0, 100.0, 0.0, 0.0),
    ];
    assert!(project_selection_rects(&fragments, &pages, false).is_empty());
}

#[test]
fn projection_subtracts_page_origin_and_adds_scroll() {
    init_logging();
    // Second page sits below the first; its content is scrolled.
    let pages = vec![
        letter_page(1, 0.0),
        Page::new(
            2,
            StaticPage::new(ViewportRect::from_xywh(20.0, 1010.0, 800.0, 1000.0))
                .with_scroll(30.0, 4.0),
        ),
    ];
    let fragments = vec![ViewportRect::from_xywh(120.0, 1200.0, 200.0, 18.0)];
    assert_eq!(
        project_selection_rects(&fragments, &pages, false),
        vec![PageRect::new(220.0, 104.0, 200.0, 18.0, 2)]
    );
}

#[test]
fn fragments_of_one_line_collapse_when_optimized() {
    init_logging();
    let pages = vec![letter_page(1, 0.0)];
    // A line split into runs by an inline element, plus a duplicate run.
    let fragments = vec![
        ViewportRect::from_xywh(50.0, 100.0, 120.0, 20.0),
        ViewportRect::from_xywh(170.0, 101.0, 80.0, 18.0),
        ViewportRect::from_xywh(170.0, 101.0, 80.0, 18.0),
        ViewportRect::from_xywh(50.0, 124.0, 300.0, 20.0),
    ];
    let raw = project_selection_rects(&fragments, &pages, false);
    assert_eq!(raw.len(), 4);
    let optimized = project_selection_rects(&fragments, &pages, true);
    assert_eq!(
        optimized,
        vec![
            PageRect::new(100.0, 50.0, 200.0, 20.0, 1),
            PageRect::new(124.0, 50.0, 300.0, 20.0, 1),
        ]
    );
}

#[test]
fn empty_inputs_give_empty_output() {
    init_logging();
    let no_pages: Vec<Page<StaticPage>> = Vec::new();
    let fragments = vec![ViewportRect::from_xywh(50.0, 100.0, 250.0, 20.0)];
    assert!(project_selection_rects(&fragments, &no_pages, true).is_empty());

    let no_fragments: Vec<ViewportRect> = Vec::new();
    assert!(project_selection_rects(&no_fragments, &[letter_page(1, 0.0)], true).is_empty());
}

#[test]
fn click_inside_scrolled_page_yields_point() {
    init_logging();
    let pages = vec![Page::new(
        1,
        StaticPage::new(ViewportRect::from_xywh(0.0, 0.0, 800.0, 1000.0))
            .with_scroll(10.0, 5.0)
            .with_nodes([1, 2]),
    )];
    let out = project_point_rect(&PointerEvent::new(40.0, 60.0, Some(2)), &pages);
    assert_eq!(out, vec![PageRect::new(70.0, 45.0, 0.0, 0.0, 1)]);
    assert!(out.iter().all(PageRect::is_point));
}

#[test]
fn click_outside_every_page_yields_nothing() {
    init_logging();
    let pages = vec![
        Page::new(1, StaticPage::new(ViewportRect::from_xywh(0.0, 0.0, 800.0, 1000.0)).with_nodes([1])),
        Page::new(2, StaticPage::new(ViewportRect::from_xywh(0.0, 1000.0, 800.0, 1000.0)).with_nodes([2])),
    ];
    assert!(project_point_rect(&PointerEvent::new(40.0, 60.0, Some(42)), &pages).is_empty());
    assert!(project_point_rect(&PointerEvent::new(40.0, 60.0, None), &pages).is_empty());
}

#[test]
fn repeated_projection_is_stable() {
    init_logging();
    let pages = vec![letter_page(1, 0.0), letter_page(2, 1000.0)];
    let fragments = vec![
        ViewportRect::from_xywh(60.0, 980.0, 100.0, 15.0),
        ViewportRect::from_xywh(60.0, 1010.0, 400.0, 15.0),
        ViewportRect::from_xywh(455.0, 1011.0, 40.0, 14.0),
    ];
    let first = project_selection_rects(&fragments, &pages, true);
    let second = project_selection_rects(&fragments, &pages, true);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            PageRect::new(980.0, 60.0, 100.0, 15.0, 1),
            PageRect::new(10.0, 60.0, 435.0, 15.0, 2),
        ]
    );
}

#[test]
fn fragments_crossing_any_page_edge_are_rejected() {
    init_logging();
    // Page occupies x 100..900, y 200..1200 in the viewport.
    let pages = vec![Page::new(
        1,
        StaticPage::new(ViewportRect::from_xywh(100.0, 200.0, 800.0, 1000.0)),
    )];
    let crossing = [
        ("top", ViewportRect::from_xywh(150.0, 190.0, 250.0, 20.0)),
        ("right", ViewportRect::from_xywh(800.0, 400.0, 150.0, 20.0)),
        ("bottom", ViewportRect::from_xywh(150.0, 1190.0, 250.0, 20.0)),
        ("left", ViewportRect::from_xywh(90.0, 400.0, 250.0, 20.0)),
    ];
    for (edge, fragment) in crossing {
        assert!(
            project_selection_rects(&[fragment][..], &pages, false).is_empty(),
            "fragment crossing the {edge} edge was emitted"
        );
    }
    // Flush with the top and right edges is still inside.
    let flush = vec![ViewportRect::from_xywh(650.0, 200.0, 250.0, 20.0)];
    assert_eq!(
        project_selection_rects(&flush, &pages, false),
        vec![PageRect::new(0.0, 550.0, 250.0, 20.0, 1)]
    );
}
