//! Unit tests for signature capture.

use crate::helpers::{TestSessionBuilder, drag};
use docmark::signature::SignaturePad;
use docmark::types::{AnnotationKind, AnnotationTool, PointerEvent};

#[test]
fn test_selecting_signature_tool_mounts_a_pad() {
    let mut session = TestSessionBuilder::new().build();
    assert!(session.signature_pad.is_none());

    session.select_tool(AnnotationTool::Signature);
    let pad = session.signature_pad.as_ref().expect("pad should mount");
    // Sized from the surface rect set by the builder.
    assert_eq!(pad.dimensions(), (800, 1100));
}

#[test]
fn test_leaving_signature_tool_drops_the_pad() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Signature)
        .build();
    assert!(session.signature_pad.is_some());

    session.select_tool(AnnotationTool::Select);
    assert!(session.signature_pad.is_none());
}

#[test]
fn test_pointer_moves_stroke_the_pad_without_a_gesture() {
    // The pad draws continuously; no pointer down is required.
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Signature)
        .build();

    session.handle_pointer_move(&PointerEvent::new(100.0, 100.0));
    session.handle_pointer_move(&PointerEvent::new(160.0, 120.0));

    let pad = session.signature_pad.as_ref().unwrap();
    assert!(!pad.is_blank());
}

#[test]
fn test_signature_commit_stamps_the_accumulated_raster() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Signature)
        .build();

    drag(&mut session, (100.0, 100.0), (180.0, 140.0));

    assert_eq!(session.annotations.len(), 1);
    let annotation = session.annotations.iter().next().unwrap();
    assert_eq!(annotation.position, (180.0, 140.0));
    match &annotation.kind {
        AnnotationKind::Signature { image_data } => {
            assert!(image_data.starts_with("data:image/png;base64,"));
        }
        other => panic!("expected signature annotation, got {other:?}"),
    }
}

#[test]
fn test_repeat_commits_reuse_the_same_drawing() {
    // The raster is never cleared between commits of one tool activation.
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Signature)
        .build();

    session.handle_pointer_down(&PointerEvent::new(100.0, 100.0));
    session.handle_pointer_move(&PointerEvent::new(140.0, 120.0));
    session.handle_pointer_move(&PointerEvent::new(180.0, 140.0));
    session.handle_pointer_up(&PointerEvent::new(180.0, 140.0));

    drag(&mut session, (300.0, 300.0), (300.0, 300.0));

    let payloads: Vec<String> = session
        .annotations
        .iter()
        .map(|a| match &a.kind {
            AnnotationKind::Signature { image_data } => image_data.clone(),
            other => panic!("expected signature annotation, got {other:?}"),
        })
        .collect();

    assert_eq!(payloads.len(), 2);
    // Second commit includes the first drag's strokes plus the new ones.
    assert_ne!(payloads[0], payloads[1]);

    // The first payload matches a pad that saw the same pen path.
    let mut reference = SignaturePad::new(800, 1100);
    reference.extend_to((140.0, 120.0));
    reference.extend_to((180.0, 140.0));
    assert_eq!(reference.snapshot().unwrap(), payloads[0]);
}

#[test]
fn test_reselecting_signature_tool_starts_fresh() {
    let mut session = TestSessionBuilder::new()
        .with_tool(AnnotationTool::Signature)
        .build();

    session.handle_pointer_move(&PointerEvent::new(100.0, 100.0));
    session.handle_pointer_move(&PointerEvent::new(200.0, 200.0));
    assert!(!session.signature_pad.as_ref().unwrap().is_blank());

    session.select_tool(AnnotationTool::Select);
    session.select_tool(AnnotationTool::Signature);

    assert!(session.signature_pad.as_ref().unwrap().is_blank());
}

#[test]
fn test_draw_segment_is_symmetric_in_direction() {
    let mut forward = SignaturePad::new(50, 50);
    forward.draw_segment((10.0, 10.0), (40.0, 40.0));
    let mut backward = SignaturePad::new(50, 50);
    backward.draw_segment((40.0, 40.0), (10.0, 10.0));

    assert_eq!(forward.snapshot().unwrap(), backward.snapshot().unwrap());
}
