//! End-to-end annotation workflows over a loaded document.

use crate::helpers::{TestSessionBuilder, assert_annotation_count, click, drag};
use docmark::render::{OverlayPrimitive, page_overlay};
use docmark::types::{AnnotationKind, AnnotationTool};

#[test]
fn test_annotate_two_pages_and_navigate() {
    let mut session = TestSessionBuilder::new()
        .with_pages(3)
        .with_tool(AnnotationTool::Highlight)
        .build();

    // Highlight on page 1.
    drag(&mut session, (50.0, 80.0), (10.0, 80.0));

    // Underline on page 2.
    session.go_to_next_page();
    session.select_tool(AnnotationTool::Underline);
    drag(&mut session, (30.0, 40.0), (30.0, 90.0));

    assert_annotation_count(&session, 2);

    // Each page's overlay shows only its own annotation.
    let page_one: Vec<_> = page_overlay(&session.annotations, 1).collect();
    assert_eq!(page_one.len(), 1);
    assert!(matches!(
        &page_one[0],
        OverlayPrimitive::Rect { opacity, .. } if *opacity == 0.5
    ));

    let page_two: Vec<_> = page_overlay(&session.annotations, 2).collect();
    assert_eq!(
        page_two,
        vec![OverlayPrimitive::Rect {
            x: 30.0,
            y: 90.0,
            width: 0.0,
            height: 3.0,
            color: "#0000ff".to_string(),
            opacity: 1.0,
        }]
    );

    // Going back to page 1 re-derives the original overlay unchanged.
    session.go_to_previous_page();
    let again: Vec<_> = page_overlay(&session.annotations, 1).collect();
    assert_eq!(again, page_one);
}

#[test]
fn test_comment_workflow_consumes_pending_text() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Comment)
        .build();

    session.set_comment_text("check this figure");
    click(&mut session, (120.0, 300.0));

    let overlay: Vec<_> = page_overlay(&session.annotations, 1).collect();
    assert_eq!(
        overlay,
        vec![OverlayPrimitive::NoteBox {
            x: 120.0,
            y: 300.0,
            text: "check this figure".to_string(),
        }]
    );
    assert_eq!(session.tools.comment_text, "");
}

#[test]
fn test_paint_order_is_creation_order() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Highlight)
        .build();

    session.set_highlight_color("#ff0000");
    drag(&mut session, (10.0, 10.0), (110.0, 10.0));
    session.set_highlight_color("#00ff00");
    drag(&mut session, (60.0, 10.0), (160.0, 10.0));

    let overlay: Vec<_> = page_overlay(&session.annotations, 1).collect();
    let colors: Vec<&str> = overlay
        .iter()
        .map(|p| match p {
            OverlayPrimitive::Rect { color, .. } => color.as_str(),
            other => panic!("expected rects, got {other:?}"),
        })
        .collect();

    // The later (green) highlight paints on top of the earlier (red) one.
    assert_eq!(colors, vec!["#ff0000", "#00ff00"]);
}

#[test]
fn test_navigation_does_not_disturb_annotations() {
    let mut session = TestSessionBuilder::new()
        .with_pages(5)
        .with_tool(AnnotationTool::Comment)
        .build();

    click(&mut session, (10.0, 10.0));
    let before: Vec<_> = session.annotations.iter().cloned().collect();

    session.go_to_next_page();
    session.go_to_next_page();
    session.go_to_previous_page();

    let after: Vec<_> = session.annotations.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_mixed_tools_on_one_page() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Highlight)
        .build();

    drag(&mut session, (10.0, 20.0), (110.0, 20.0));

    session.select_tool(AnnotationTool::Comment);
    session.set_comment_text("margin note");
    click(&mut session, (200.0, 40.0));

    session.select_tool(AnnotationTool::Signature);
    session.handle_pointer_move(&docmark::types::PointerEvent::new(300.0, 300.0));
    session.handle_pointer_move(&docmark::types::PointerEvent::new(360.0, 320.0));
    click(&mut session, (360.0, 320.0));

    let kinds: Vec<&'static str> = session
        .annotations
        .iter()
        .map(|a| a.kind.type_label())
        .collect();
    assert_eq!(kinds, vec!["HIGHLIGHT", "COMMENT", "SIGNATURE"]);

    let overlay: Vec<_> = page_overlay(&session.annotations, 1).collect();
    assert_eq!(overlay.len(), 3);
    assert!(matches!(
        &overlay[2],
        OverlayPrimitive::ImageStamp { max_width, max_height, .. }
            if *max_width == 200.0 && *max_height == 100.0
    ));
}

#[test]
fn test_annotation_ids_are_unique_across_the_session() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Comment)
        .build();

    for i in 0..20 {
        click(&mut session, (i as f32 * 10.0, 50.0));
    }

    let mut ids: Vec<String> = session.annotations.iter().map(|a| a.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_annotations_survive_tool_switching() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Highlight)
        .build();
    drag(&mut session, (10.0, 10.0), (60.0, 10.0));

    for tool in AnnotationTool::all() {
        session.select_tool(*tool);
    }

    assert_annotation_count(&session, 1);
    let annotation = session.annotations.iter().next().unwrap();
    assert_eq!(
        annotation.kind,
        AnnotationKind::Highlight {
            color: "#ffff00".to_string(),
            width: 50.0,
            height: 20.0,
        }
    );
}
