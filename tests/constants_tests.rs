// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for f in [OUTER_SMOOTHING, INNER_SMOOTHING, CAMERA_SMOOTHING, SPEED_SMOOTHING] {
        assert!(f > 0.0 && f < 1.0, "factor {f} out of (0, 1)");
    }
    // The dot leads the ring.
    assert!(INNER_SMOOTHING > OUTER_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_arc_is_outside_surface_arc() {
    assert!(CAMERA_RADIUS > SURFACE_RADIUS);
    assert!(LABEL_DEPTH > 0.0);
    assert!(PLANE_SEGMENTS >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_steps_fill_within_a_few_frames() {
    assert!(HOVER_STEP > 0.0 && HOVER_STEP <= 1.0);
    assert!(CLICK_PRESS_STEP > 0.0 && CLICK_PRESS_STEP <= 1.0);
    // Release is faster than press.
    assert!(CLICK_RELEASE_STEP > CLICK_PRESS_STEP);
    assert!((1.0 / CLICK_PRESS_STEP) <= 10.0);
    assert!((1.0 / CLICK_RELEASE_STEP) <= 10.0);
    assert!(CLICK_SHRINK_SCALE < 1.0);
    assert!(INNER_SIZE < OUTER_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_are_ordered() {
    assert!(MOBILE_MAX_WIDTH < DESKTOP_MIN_WIDTH);
    assert_eq!(DESKTOP_MIN_WIDTH, 769.0);
}

#[test]
fn route_prefix_is_a_directory() {
    assert!(ROUTE_PREFIX.starts_with('/'));
    assert!(ROUTE_PREFIX.ends_with('/'));
    assert_eq!(NAVIGATE_DELAY_MS, 300);
}

#[test]
fn included_sources_carry_no_inner_docs() {
    // These files are pulled into the test crates with `include!`, where `//!` does not parse.
    let sources = [
        include_str!("../src/core/config.rs"),
        include_str!("../src/core/constants.rs"),
        include_str!("../src/core/context.rs"),
        include_str!("../src/core/follower.rs"),
        include_str!("../src/core/gallery.rs"),
        include_str!("../src/core/interp.rs"),
        include_str!("../src/core/layout.rs"),
        include_str!("../src/core/navigation.rs"),
        include_str!("../src/core/projects.rs"),
        include_str!("../src/core/tween.rs"),
        include_str!("../src/camera.rs"),
        include_str!("../src/input.rs"),
        include_str!("../src/render/mesh.rs"),
    ];
    for src in sources {
        assert!(src.lines().all(|l| !l.trim_start().starts_with("//!")));
    }
}
