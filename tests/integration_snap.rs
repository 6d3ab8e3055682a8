use desk_wm::layout::{Framing, Point, Rect, Size};
use desk_wm::snap::{SnapAssist, SnapPolicy, SnapTarget, snap_target, snap_target_framing};

#[test]
fn small_container_detects_edge_but_refuses_framing() {
    let rect = Rect::new(0.0, 0.0, 400.0, 300.0);
    let target = snap_target(Point::new(10.0, 150.0), rect);
    assert_eq!(target, Some(SnapTarget::Left));
    assert_eq!(snap_target_framing(target, rect.size()), None);
}

#[test]
fn halves_on_large_container() {
    let size = Size::new(1280.0, 720.0);
    let rect = Rect::new(0.0, 0.0, size.width, size.height);
    assert_eq!(
        snap_target_framing(snap_target(Point::new(1270.0, 5.0), rect), size),
        Some(Framing::percent(50.0, 0.0, 50.0, 100.0))
    );
    assert_eq!(
        snap_target_framing(snap_target(Point::new(24.0, 700.0), rect), size),
        Some(Framing::percent(0.0, 0.0, 50.0, 100.0))
    );
    assert_eq!(snap_target(Point::new(640.0, 0.0), rect), None);
}

#[test]
fn assist_previews_then_clears_on_drop() {
    let rect = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let mut assist = SnapAssist::new(SnapPolicy::default());
    assist.begin_drag();
    assert!(assist.drag_move(Point::new(500.0, 10.0), rect).is_none());
    let preview = assist.drag_move(Point::new(1020.0, 10.0), rect).unwrap();
    assert_eq!(preview.target, SnapTarget::Right);
    assert_eq!(assist.preview(), Some(preview));

    let framing = assist.drop(Point::new(1020.0, 10.0), rect);
    assert_eq!(framing, Some(SnapTarget::Right.framing()));
    assert!(assist.preview().is_none());
}

#[test]
fn cancel_discards_preview() {
    let rect = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let mut assist = SnapAssist::new(SnapPolicy::default());
    assist.begin_drag();
    assist.drag_move(Point::new(2.0, 10.0), rect);
    assert!(assist.preview().is_some());
    assist.cancel();
    assert!(assist.preview().is_none());
}
