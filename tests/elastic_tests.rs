// Host-side tests for the elastic toggle and slider gesture machines.

#![allow(dead_code)]
mod common;

use common::approx;
use common::engine::elastic::*;
use glam::Vec2;

fn toggle_track() -> TrackRect {
    TrackRect {
        left: 0.0,
        top: 0.0,
        width: 52.0,
        height: 26.0,
    }
}

fn slider_track() -> TrackRect {
    TrackRect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 4.0,
    }
}

// Pointer x for a given thumb offset on the default toggle
fn at_offset(offset: f32) -> Vec2 {
    Vec2::new(offset + 14.5, 13.0)
}

#[test]
fn toggle_travel_and_threshold() {
    let t = ElasticToggle::new(false);
    assert_eq!(t.geometry().max_travel(), 15.0);
    assert_eq!(t.offset(), 0.0);
    assert_eq!(ElasticToggle::new(true).offset(), 15.0);
}

#[test]
fn toggle_commits_past_half_travel() {
    let mut t = ElasticToggle::new(false);
    assert!(t.pointer_down(at_offset(10.0), toggle_track()));
    assert!(t.is_activated());
    assert_eq!(t.pointer_up(), Some(true));
    assert!(t.checked());
    assert!(!t.is_dragging());
    assert_eq!(t.offset(), 15.0);
}

#[test]
fn toggle_release_below_threshold_keeps_value() {
    let mut t = ElasticToggle::new(false);
    t.pointer_down(at_offset(5.0), toggle_track());
    assert!(!t.is_activated());
    assert_eq!(t.pointer_up(), None);
    assert!(!t.checked());
}

#[test]
fn toggle_can_be_dragged_off() {
    let mut t = ElasticToggle::new(true);
    t.pointer_down(at_offset(12.0), toggle_track());
    t.pointer_move(at_offset(2.0), toggle_track());
    assert_eq!(t.offset(), 2.0);
    assert_eq!(t.pointer_up(), Some(false));
}

#[test]
fn toggle_offset_is_clamped_to_travel() {
    let mut t = ElasticToggle::new(false);
    t.pointer_down(Vec2::new(-40.0, 13.0), toggle_track());
    assert_eq!(t.offset(), 0.0);
    t.pointer_move(Vec2::new(400.0, 13.0), toggle_track());
    assert_eq!(t.offset(), 15.0);
    let drag = t.gesture().drag().copied().unwrap_or_default();
    assert!(approx(drag.overflow_pull_x, 400.0 - 14.5 - 15.0));
}

#[test]
fn second_press_during_drag_is_ignored() {
    let mut t = ElasticToggle::new(false);
    assert!(t.pointer_down(at_offset(3.0), toggle_track()));
    assert!(!t.pointer_down(at_offset(14.0), toggle_track()));
    assert_eq!(t.offset(), 3.0);
}

#[test]
fn cancelled_toggle_gesture_commits_nothing() {
    let mut t = ElasticToggle::new(false);
    t.pointer_down(at_offset(14.0), toggle_track());
    t.cancel();
    assert!(!t.is_dragging());
    assert_eq!(t.pointer_up(), None);
    assert!(!t.checked());
}

#[test]
fn toggle_scale_at_rest_and_while_dragging() {
    let mut t = ElasticToggle::new(false);
    assert_eq!(t.scale(), Vec2::ONE);

    t.pointer_down(at_offset(7.0), toggle_track());
    let s = t.scale();
    assert!(approx(s.x, 1.736) && approx(s.y, 1.364), "{s:?}");

    t.pointer_move(Vec2::new(100.0, 13.0), toggle_track());
    assert_eq!(t.scale(), Vec2::new(2.2, 0.6));
}

#[test]
fn toggle_style_transitions() {
    let mut t = ElasticToggle::new(false);
    let settled = t.style();
    assert!(!settled.dragging);
    assert_eq!(
        settled.transition_css("left"),
        "left 0.5s cubic-bezier(0.5, 0, 0.2, 1), scale 0.4s cubic-bezier(0.5, 0, 0.2, 1), \
         background 0.3s ease, backdrop-filter 0.3s ease"
    );

    t.pointer_down(at_offset(4.0), toggle_track());
    let live = t.style();
    assert!(live.dragging);
    assert_eq!(live.transition, Transition::IMMEDIATE);
    assert!(live.transition_css("left").starts_with("left 0s, scale 0s"));
}

#[test]
fn snap_rounds_to_step_and_clamps() {
    let r = SliderRange::new(0.0, 1.0, 0.01);
    assert!(approx(r.snap(0.456), 0.46));
    let f = SliderRange::new(0.1, 10.0, 0.1);
    assert!(approx(f.snap(0.0), 0.1));
    assert!(approx(f.snap(25.0), 10.0));
    assert_eq!(SliderRange::new(0.0, 100.0, 10.0).snap(35.0), 40.0);
}

#[test]
fn step_five_press_at_42_commits_40() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 5.0), 0.0);
    assert_eq!(s.pointer_down(42.0, slider_track()), Some(40.0));
    s.pointer_up(42.0, slider_track());
    assert_eq!(s.percentage(), 40.0);
}

#[test]
fn range_percentage() {
    let r = SliderRange::new(0.0, 64.0, 1.0);
    assert_eq!(r.percentage(16.0), 25.0);
    assert_eq!(SliderRange::new(5.0, 5.0, 1.0).percentage(5.0), 0.0);
}

#[test]
fn slider_press_jumps_to_pointer() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 10.0), 0.0);
    assert_eq!(s.pointer_down(42.0, slider_track()), Some(40.0));
    assert_eq!(s.percentage(), 42.0);
    assert_eq!(s.pointer_up(42.0, slider_track()), None);
    assert_eq!(s.percentage(), 40.0);
    assert_eq!(s.value(), 40.0);
}

#[test]
fn slider_reports_only_changes() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 10.0), 0.0);
    let track = slider_track();
    let seen: Vec<Option<f32>> = vec![
        s.pointer_down(10.0, track),
        s.pointer_move(20.0, track),
        s.pointer_move(24.0, track),
        s.pointer_move(35.0, track),
        s.pointer_up(40.0, track),
    ];
    assert_eq!(seen, vec![Some(10.0), Some(20.0), None, Some(40.0), None]);
}

#[test]
fn slider_ignores_moves_when_idle() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 1.0), 50.0);
    assert_eq!(s.pointer_move(80.0, slider_track()), None);
    assert_eq!(s.pointer_up(80.0, slider_track()), None);
    assert_eq!(s.value(), 50.0);
}

#[test]
fn slider_pointer_outside_track_clamps() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 1.0), 50.0);
    assert_eq!(s.pointer_down(-30.0, slider_track()), Some(0.0));
    assert_eq!(s.pointer_move(500.0, slider_track()), Some(100.0));
    assert_eq!(s.percentage(), 100.0);
}

#[test]
fn slider_velocity_stretch_is_clamped() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 1.0), 0.0);
    assert_eq!(s.scale(), Vec2::ONE);
    s.pointer_down(0.0, slider_track());
    s.pointer_move(90.0, slider_track());
    let drag = s.gesture().drag().copied().unwrap_or_default();
    assert_eq!(drag.velocity, 30.0);
    let scale = s.scale();
    assert_eq!(scale.x, 2.2);
    assert!(approx(scale.y, 1.06), "{scale:?}");
}

#[test]
fn slider_zero_width_track_is_inert() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 1.0), 30.0);
    let flat = TrackRect {
        width: 0.0,
        ..slider_track()
    };
    assert_eq!(s.pointer_down(60.0, flat), None);
    assert_eq!(s.value(), 30.0);
}

#[test]
fn slider_cancel_keeps_last_reported_value() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 1.0), 0.0);
    s.pointer_down(25.0, slider_track());
    s.cancel();
    assert!(!s.is_dragging());
    assert_eq!(s.value(), 25.0);
    assert_eq!(s.percentage(), 25.0);
}

#[test]
fn press_at_the_stored_value_reports_nothing() {
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 1.0, 0.01), 0.6);
    assert_eq!(s.pointer_down(60.0, slider_track()), None);
    assert_eq!(s.pointer_up(60.0, slider_track()), None);
    assert_eq!(s.value(), 0.6);
}

#[test]
fn same_step_tolerates_rounding_only() {
    let r = SliderRange::new(0.0, 1.0, 0.01);
    assert!(r.same_step(r.snap(0.6), 0.6));
    assert!(!r.same_step(r.snap(0.61), 0.6));
    let free = SliderRange::new(0.0, 1.0, 0.0);
    assert!(!free.same_step(0.6, 0.6000001));
}

#[test]
fn gate_belongs_to_the_first_pointer() {
    let mut gate = PointerGate::default();
    assert!(gate.press(1));
    assert!(!gate.press(2));
    assert_eq!(gate.active(), Some(1));
    assert!(gate.accepts(1));
    assert!(!gate.accepts(2));

    // Lifting the second finger does not end the first one's drag
    assert!(!gate.release(2));
    assert_eq!(gate.active(), Some(1));

    assert!(gate.release(1));
    assert_eq!(gate.active(), None);
    assert!(!gate.accepts(1));
    assert!(gate.press(2));
}

#[test]
fn second_finger_cannot_restart_a_slider_drag() {
    let mut gate = PointerGate::default();
    let mut s = ElasticSlider::new(SliderRange::new(0.0, 100.0, 1.0), 0.0);
    let track = slider_track();

    assert!(gate.press(7));
    assert_eq!(s.pointer_down(30.0, track), Some(30.0));
    // A second finger lands and lifts elsewhere; the gate drops both events
    assert!(!gate.press(8));
    assert!(!gate.release(8));
    assert!(s.is_dragging());

    assert!(gate.accepts(7));
    assert_eq!(s.pointer_move(50.0, track), Some(50.0));
    assert!(gate.release(7));
    assert_eq!(s.pointer_up(50.0, track), None);
    assert_eq!(s.value(), 50.0);
}
