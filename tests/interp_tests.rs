// Host-side tests for the interpolation helpers and the hover tween.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interp {
        include!("../src/core/interp.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use app::interp::*;
use app::tween::Tween;

const FRAME: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn lerp_returns_start_when_no_time_elapsed() {
    assert_eq!(lerp(3.0, 10.0, 0.2, 0.0), 3.0);
    assert_eq!(lerp(-4.0, 4.0, 0.9, 0.0), -4.0);
}

#[test]
fn lerp_one_reference_frame_closes_factor_of_gap() {
    assert!(approx(lerp(0.0, 10.0, 0.1, FRAME), 1.0));
    assert!(approx(lerp(0.0, 10.0, 0.1, FRAME), lerp_frame(0.0, 10.0, 0.1)));
}

#[test]
fn lerp_is_bounded_and_monotone() {
    let mut prev = 0.0;
    for step in 1..=600 {
        let v = lerp(0.0, 10.0, 0.1, step as f32 * FRAME);
        assert!(v >= prev, "not monotone at step {step}");
        assert!((0.0..=10.0).contains(&v), "{v} left [0, 10]");
        prev = v;
    }
    assert!(approx(prev, 10.0));

    // Same for a descending approach.
    let v = lerp(5.0, -5.0, 0.2, 0.5);
    assert!(v < 5.0 && v >= -5.0);
}

#[test]
fn lerp_ignores_negative_elapsed() {
    assert_eq!(lerp(1.0, 2.0, 0.5, -1.0), 1.0);
}

#[test]
fn lerp_is_frame_rate_independent() {
    // Two 30 Hz frames land where eight 120 Hz frames do.
    let mut slow = 0.0;
    for _ in 0..2 {
        slow = lerp(slow, 1.0, 0.1, 1.0 / 30.0);
    }
    let mut fast = 0.0;
    for _ in 0..8 {
        fast = lerp(fast, 1.0, 0.1, 1.0 / 120.0);
    }
    assert!(approx(slow, fast));
}

#[test]
fn map_range_hits_both_ends() {
    let n = 11.0;
    assert_eq!(map_range(0.0, 1.0, 0.0, n - 1.0, 0.0), Some(0.0));
    assert_eq!(map_range(0.0, 1.0, 0.0, n - 1.0, 1.0), Some(n - 1.0));
    assert_eq!(map_range(0.0, 1.0, 0.0, n - 1.0, 0.5), Some(5.0));
    assert_eq!(map_range(0.0, 1.0, 1.0, 0.75, 1.0), Some(0.75));
}

#[test]
fn map_range_rejects_degenerate_input() {
    assert_eq!(map_range(2.0, 2.0, 0.0, 1.0, 2.0), None);
    assert_eq!(map_range(0.0, f32::INFINITY, 0.0, 1.0, 0.5), None);
    assert_eq!(map_range(0.0, 1.0, 0.0, 1.0, f32::NAN), None);
}

#[test]
fn easing_curves_are_anchored() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    for i in 0..=10 {
        let x = i as f32 / 10.0;
        assert!(approx(ease_in_out_quad(x) + ease_in_out_quad(1.0 - x), 1.0));
    }
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert!(approx(ease_out_quad(0.5), 0.75));
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
}

#[test]
fn settled_tween_holds_its_value() {
    let mut t = Tween::settled(1.0, 0.5);
    assert!(t.is_done());
    assert_eq!(t.value(), 1.0);
    assert_eq!(t.advance(1.0), 1.0);
}

#[test]
fn tween_follows_ease_out_over_its_duration() {
    let mut t = Tween::settled(1.0, 0.5);
    t.retarget(0.0);
    assert!(!t.is_done());
    assert_eq!(t.value(), 1.0);
    assert!(approx(t.advance(0.25), 0.25));
    assert!(approx(t.advance(1.0), 0.0));
    assert!(t.is_done());
    assert_eq!(t.target(), 0.0);
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut t = Tween::settled(1.0, 0.5);
    t.retarget(0.0);
    let mid = t.advance(0.25);
    t.retarget(1.0);
    assert!(approx(t.value(), mid));
    assert!(approx(t.advance(0.5), 1.0));
}

#[test]
fn tween_retarget_to_same_target_does_not_restart() {
    let mut t = Tween::settled(1.0, 0.5);
    t.retarget(0.0);
    let v = t.advance(0.1);
    t.retarget(0.0);
    assert!(approx(t.value(), v));
}

#[test]
fn tween_ignores_bad_time_steps() {
    let mut t = Tween::settled(0.0, 0.5);
    t.retarget(1.0);
    t.advance(f32::NAN);
    t.advance(-1.0);
    assert_eq!(t.value(), 0.0);

    let z = Tween::settled(2.0, 0.0);
    assert!(z.value().is_finite());
}
