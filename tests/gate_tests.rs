// Host-side tests for the visibility and repaint gates.

#![allow(dead_code)]
#[path = "../src/gate.rs"]
mod gate;

use gate::{PaintGate, ViewportGate};

#[test]
fn viewport_reports_only_flips() {
    let mut g = ViewportGate::new(true);
    assert!(g.is_visible());
    assert_eq!(g.update(true), None);
    assert_eq!(g.update(false), Some(false));
    assert!(!g.is_visible());
    assert_eq!(g.update(false), None);
    assert_eq!(g.update(true), Some(true));
}

#[test]
fn small_viewport_at_mount_starts_hidden() {
    let mut g = ViewportGate::new(false);
    assert!(!g.is_visible());
    // resizing past the breakpoint shows it
    assert_eq!(g.update(true), Some(true));
}

#[test]
fn moving_frames_always_paint() {
    let mut p = PaintGate::new();
    for _ in 0..5 {
        assert!(p.needs_paint(false, false));
    }
}

#[test]
fn rest_is_painted_once_then_skipped() {
    let mut p = PaintGate::new();
    assert!(p.needs_paint(false, false));
    assert!(p.needs_paint(true, false));
    assert!(!p.needs_paint(true, false));
    assert!(!p.needs_paint(true, false));
    // motion resumes
    assert!(p.needs_paint(false, false));
    assert!(p.needs_paint(true, false));
    assert!(!p.needs_paint(true, false));
}

#[test]
fn first_frame_paints_even_when_settled() {
    let mut p = PaintGate::new();
    assert!(p.needs_paint(true, false));
    assert!(!p.needs_paint(true, false));
}

#[test]
fn theme_change_repaints_at_rest() {
    let mut p = PaintGate::new();
    assert!(p.needs_paint(true, false));
    assert!(!p.needs_paint(true, false));
    assert!(p.needs_paint(true, true));
    assert!(!p.needs_paint(true, true));
}

#[test]
fn invalidate_forces_next_paint() {
    let mut p = PaintGate::new();
    assert!(p.needs_paint(true, 1u8));
    assert!(!p.needs_paint(true, 1u8));
    p.invalidate();
    assert!(p.needs_paint(true, 1u8));
}
