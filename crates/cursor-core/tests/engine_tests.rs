// Host-side tests for the composed cursor engine.

use cursor_core::*;
use glam::Vec2;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn engine() -> CursorEngine<RandomJitter<rand::rngs::StdRng>> {
    let cfg = CursorConfig {
        sticky_radius: 100.0,
        breaking_point: 60.0,
        ..CursorConfig::default()
    };
    CursorEngine::new(cfg, RandomJitter::seeded(42)).unwrap()
}

fn button() -> AttractableElement {
    AttractableElement::new(
        ElementHandle(1),
        Rect::centered(Vec2::new(500.0, 500.0), 120.0, 40.0),
    )
}

fn move_to(e: &mut CursorEngine<impl JitterSource>, x: f32, y: f32) -> ResolvedTarget {
    e.on_pointer_move(PointerSample::new(x, y, 0.0))
}

#[test]
fn follows_pointer_with_default_state_when_nothing_is_registered() {
    let mut e = engine();
    for (x, y) in [(10.0, 10.0), (300.0, 200.0), (640.0, 480.0)] {
        let t = move_to(&mut e, x, y);
        assert_eq!(t.position, Vec2::new(x, y));
        assert_eq!(e.visual_state(), VisualState::Default);
    }
}

#[test]
fn click_without_hover_shows_clicked() {
    let mut e = engine();
    move_to(&mut e, 10.0, 10.0);
    e.on_pointer_down();
    assert_eq!(e.visual_state(), VisualState::Clicked);
    e.on_pointer_up();
    assert_eq!(e.visual_state(), VisualState::Default);
}

#[test]
fn hover_lifecycle_snaps_then_releases_with_jitter() {
    let mut e = engine();
    let center = Vec2::new(500.0, 500.0);
    move_to(&mut e, 555.0, 510.0);

    assert_eq!(e.register_attractable(button()), Transition::Entered);
    let snapped = e.target();
    assert!(snapped.position.distance(center) < Vec2::new(555.0, 510.0).distance(center));
    assert_eq!(e.visual_state(), VisualState::Hovered);

    let inside = move_to(&mut e, 520.0, 505.0);
    assert!(inside.position.distance(center) < Vec2::new(520.0, 505.0).distance(center));

    assert_eq!(e.unregister_attractable(ElementHandle(1)), Transition::Exited);
    let released = e.target();
    assert!(released.position.distance(inside.position) > 1e-3);
    assert!(e.active_element().is_none());
    assert_eq!(e.visual_state(), VisualState::Default);

    // once the nudge has been drawn the cursor follows the pointer again
    e.tick(FRAME);
    assert_eq!(move_to(&mut e, 700.0, 700.0).position, Vec2::new(700.0, 700.0));
}

#[test]
fn duplicate_enter_does_not_snap_twice() {
    let mut e = engine();
    move_to(&mut e, 570.0, 500.0);
    e.register_attractable(button());
    let settled = move_to(&mut e, 570.0, 500.0);
    assert_eq!(e.register_attractable(button()), Transition::None);
    assert_eq!(e.target(), settled);
}

#[test]
fn click_while_hovering_suspends_attraction() {
    let mut e = engine();
    move_to(&mut e, 520.0, 500.0);
    e.register_attractable(button());
    e.on_pointer_down();
    let t = move_to(&mut e, 530.0, 505.0);
    assert_eq!(t.position, Vec2::new(530.0, 505.0));
    // hover outranks click
    assert_eq!(e.visual_state(), VisualState::Hovered);
    e.on_pointer_up();
    assert!(e.target().pull > 0.0);
}

#[test]
fn pulling_away_breaks_free_then_recoils() {
    let mut e = engine();
    move_to(&mut e, 510.0, 500.0);
    e.register_attractable(button());

    move_to(&mut e, 595.0, 500.0);
    assert!(e.target().breaking_free);
    assert_eq!(e.visual_state(), VisualState::BreakingFree);

    let out = move_to(&mut e, 620.0, 500.0);
    assert!(!out.breaking_free);
    assert!(out.position.x > 620.0, "expected recoil past the pointer");
    assert_eq!(e.visual_state(), VisualState::Hovered);

    e.tick(FRAME);
    let after = move_to(&mut e, 620.0, 500.0);
    assert_eq!(after.position, Vec2::new(620.0, 500.0));
}

#[test]
fn entering_new_element_ends_breaking_free() {
    let mut e = engine();
    move_to(&mut e, 510.0, 500.0);
    e.register_attractable(button());
    move_to(&mut e, 595.0, 500.0);
    assert!(e.target().breaking_free);

    let other = AttractableElement::new(
        ElementHandle(2),
        Rect::centered(Vec2::new(640.0, 500.0), 60.0, 60.0),
    );
    assert_eq!(e.register_attractable(other), Transition::Entered);
    assert!(!e.target().breaking_free);
    assert_eq!(e.active_element().map(|a| a.handle), Some(ElementHandle(2)));
}

#[test]
fn removed_element_is_an_implicit_exit() {
    let mut e = engine();
    move_to(&mut e, 500.0, 500.0);
    e.register_attractable(button());
    assert_eq!(e.target().position, Vec2::new(500.0, 500.0));
    e.unregister_attractable(ElementHandle(1));
    assert!(e.active_element().is_none());
    let nudge = e.target().position.distance(Vec2::new(500.0, 500.0));
    assert!((nudge - e.config().release_jitter).abs() < 1e-3);
}

#[test]
fn scrolled_bounds_move_the_attraction_centre() {
    let mut e = engine();
    move_to(&mut e, 500.0, 500.0);
    e.register_attractable(button());
    e.update_bounds(
        ElementHandle(1),
        Rect::centered(Vec2::new(500.0, 520.0), 120.0, 40.0),
    );
    assert!(e.target().position.y > 500.0);
}

#[test]
fn nan_sample_holds_last_good_position() {
    let mut e = engine();
    move_to(&mut e, 42.0, 24.0);
    let t = move_to(&mut e, f32::NAN, 1.0);
    assert_eq!(t.position, Vec2::new(42.0, 24.0));
    assert_eq!(e.raw_position(), Vec2::new(42.0, 24.0));
}

#[test]
fn tick_smooths_toward_target_and_centres_box() {
    let mut e = engine();
    move_to(&mut e, 100.0, 100.0);
    let first = e.tick(FRAME);
    assert_eq!(first.position, Vec2::new(100.0, 100.0));
    assert_eq!(first.top_left, Vec2::new(84.0, 84.0));

    move_to(&mut e, 300.0, 100.0);
    let next = e.tick(FRAME);
    assert!(next.position.x > 100.0 && next.position.x < 300.0);

    for _ in 0..180 {
        e.tick(FRAME);
    }
    assert!(e.smoothed_position().distance(Vec2::new(300.0, 100.0)) < 0.05);
}

#[test]
fn tick_before_any_pointer_input_is_stable() {
    let mut e = engine();
    let frame = e.tick(FRAME);
    assert_eq!(frame.position, Vec2::ZERO);
    assert_eq!(frame.state, VisualState::Default);
}

#[test]
fn entry_snap_survives_moves_until_the_next_frame() {
    let mut e = engine();
    let center = Vec2::new(500.0, 500.0);
    move_to(&mut e, 580.0, 500.0);
    e.tick(FRAME);

    e.register_attractable(button());
    let snapped = e.target();
    // several moves arrive before the frame is drawn
    move_to(&mut e, 580.0, 500.0);
    let before_frame = move_to(&mut e, 580.0, 500.0);
    assert_eq!(before_frame.position, snapped.position);
    assert!(e.has_pending_edge());

    let plain = {
        let mut other = engine();
        move_to(&mut other, 580.0, 500.0);
        other.register_attractable(button());
        other.tick(FRAME);
        move_to(&mut other, 580.0, 500.0)
    };
    assert!(before_frame.position.distance(center) < plain.position.distance(center));

    e.tick(FRAME);
    assert!(!e.has_pending_edge());
    assert_eq!(e.target().position, plain.position);
}

#[test]
fn recoil_survives_moves_until_the_next_frame() {
    let mut e = engine();
    move_to(&mut e, 510.0, 500.0);
    e.register_attractable(button());
    e.tick(FRAME);
    move_to(&mut e, 595.0, 500.0);
    move_to(&mut e, 620.0, 500.0);
    let again = move_to(&mut e, 620.0, 500.0);
    assert!(again.position.x > 620.0, "recoil lost before the frame");
    e.tick(FRAME);
    assert_eq!(move_to(&mut e, 620.0, 500.0).position, Vec2::new(620.0, 500.0));
}

#[test]
fn release_nudge_survives_moves_until_the_next_frame() {
    let mut e = engine();
    move_to(&mut e, 530.0, 500.0);
    e.register_attractable(button());
    e.tick(FRAME);
    e.unregister_attractable(ElementHandle(1));
    let nudged = move_to(&mut e, 530.0, 500.0);
    let nudge = nudged.position.distance(Vec2::new(530.0, 500.0));
    assert!((nudge - e.config().release_jitter).abs() < 1e-3, "nudge {nudge}");
    assert!((nudged.edge_offset.length() - nudge).abs() < 1e-3);
}

#[test]
fn first_frame_after_entry_renders_the_snap() {
    let mut fixed = CursorEngine::new(
        CursorConfig {
            sticky_radius: 100.0,
            breaking_point: 60.0,
            ..CursorConfig::default()
        },
        FixedJitter(Vec2::Y),
    )
    .unwrap();
    move_to(&mut fixed, 580.0, 500.0);
    fixed.tick(FRAME);
    fixed.register_attractable(button());
    move_to(&mut fixed, 580.0, 500.0);
    let frame = fixed.tick(FRAME);
    // toward the plain target alone the spring would cover well under 1px
    assert!(580.0 - frame.position.x > 2.0, "x {}", frame.position.x);
    assert!(!fixed.has_pending_edge());
}

#[test]
fn leaving_while_pressed_still_nudges() {
    let mut e = engine();
    move_to(&mut e, 530.0, 500.0);
    e.register_attractable(button());
    e.on_pointer_down();
    let pressed = e.target();
    assert_eq!(pressed.position, Vec2::new(530.0, 500.0));

    e.unregister_attractable(ElementHandle(1));
    let released = move_to(&mut e, 530.0, 500.0);
    assert!(released.position.distance(pressed.position) > 1e-3);
}

#[test]
fn press_drops_an_undrawn_snap() {
    let mut e = engine();
    move_to(&mut e, 560.0, 500.0);
    e.register_attractable(button());
    assert!(e.has_pending_edge());
    e.on_pointer_down();
    assert!(!e.has_pending_edge());
    assert_eq!(move_to(&mut e, 561.0, 500.0).position, Vec2::new(561.0, 500.0));
}

#[test]
fn settles_once_spring_and_style_stop_moving() {
    let mut e = engine();
    move_to(&mut e, 100.0, 100.0);
    e.tick(FRAME);
    move_to(&mut e, 300.0, 100.0);
    assert!(!e.is_settled(0.01));
    for _ in 0..240 {
        e.tick(FRAME);
    }
    assert!(e.is_settled(0.01));

    e.on_pointer_down();
    // the tween toward the clicked look has not run yet
    assert!(!e.is_settled(0.01));
}
