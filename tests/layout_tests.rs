// Host-side tests for breakpoints, surface placement and camera targets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use app::constants::{CAMERA_RADIUS, SURFACE_RADIUS};
use app::layout::*;
use glam::Vec3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn breakpoints_split_at_480_and_769() {
    assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Mobile);
    assert_eq!(Breakpoint::from_width(479.9), Breakpoint::Mobile);
    assert_eq!(Breakpoint::from_width(480.0), Breakpoint::Tablet);
    assert_eq!(Breakpoint::from_width(768.9), Breakpoint::Tablet);
    assert_eq!(Breakpoint::from_width(769.0), Breakpoint::Desktop);
    assert_eq!(Breakpoint::from_width(2560.0), Breakpoint::Desktop);
}

#[test]
fn breakpoint_params_match_design_table() {
    let m = Breakpoint::Mobile.params();
    assert_eq!(m.plane_size, [0.7, 1.0]);
    assert_eq!((m.distance_x, m.distance_y), (0.05, 3.5));
    let t = Breakpoint::Tablet.params();
    assert_eq!(t.plane_size, [1.4, 0.9]);
    assert_eq!((t.distance_x, t.distance_y), (0.1, 2.0));
    let d = Breakpoint::Desktop.params();
    assert_eq!(d.plane_size, [2.34, 1.36]);
    assert_eq!((d.distance_x, d.distance_y), (0.16, 1.18));
    assert_eq!(Breakpoint::Desktop.name(), "desktop");
}

#[test]
fn placement_is_a_pure_function_of_index_and_breakpoint() {
    for bp in [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop] {
        for i in 0..11 {
            assert_eq!(surface_placement(i, bp), surface_placement(i, bp));
        }
    }
    assert_ne!(
        surface_placement(3, Breakpoint::Mobile),
        surface_placement(3, Breakpoint::Desktop)
    );
}

#[test]
fn surfaces_sit_on_the_arc_and_climb() {
    let p = Breakpoint::Desktop.params();
    for i in 0..11 {
        let pl = surface_placement(i, Breakpoint::Desktop);
        let flat = Vec3::new(pl.position.x, 0.0, pl.position.z);
        assert!(approx(flat.length(), SURFACE_RADIUS));
        assert!(approx(pl.position.y, i as f32 / p.distance_y));
        // Facing straight away from the centre.
        assert!(approx(pl.yaw, p.distance_x * i as f32));
        let normal = pl.rotation() * Vec3::Z;
        assert!(approx(normal.dot(flat.normalize()), 1.0));
    }
    let first = surface_placement(0, Breakpoint::Desktop);
    assert!(approx(first.position.x, 0.0) && approx(first.position.z, SURFACE_RADIUS));
}

#[test]
fn model_matrix_agrees_with_local_to_world() {
    let pl = surface_placement(6, Breakpoint::Tablet);
    let local = Vec3::new(0.3, -0.2, 0.25);
    let a = pl.model_matrix().transform_point3(local);
    let b = pl.local_to_world(local);
    assert!(a.abs_diff_eq(b, 1e-4));
}

#[test]
fn camera_target_rides_the_outer_arc() {
    let t = camera_target(5.0, Breakpoint::Desktop);
    assert!(approx(t.azimuth, 0.8));
    assert!(approx(t.lift, 5.0 / 1.18));
    assert!(approx(t.position.length(), CAMERA_RADIUS));
    assert_eq!(t.look_at, Vec3::new(0.0, t.lift, 0.0));
    // Camera and focused surface share an azimuth.
    let s = surface_placement(5, Breakpoint::Desktop);
    assert!(approx(s.yaw, t.azimuth));
}

#[test]
fn spherical_follows_three_js_convention() {
    let p = spherical(2.0, std::f32::consts::FRAC_PI_2, 0.0);
    assert!(approx(p.x, 0.0) && approx(p.y, 0.0) && approx(p.z, 2.0));
    let q = spherical(2.0, std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
    assert!(approx(q.x, 2.0) && approx(q.z, 0.0));
    let top = spherical(1.0, 0.0, 1.0);
    assert!(approx(top.y, 1.0));
}

#[test]
fn frame_aspect_is_width_over_height() {
    assert!(approx(Breakpoint::Desktop.params().frame_aspect(), 2.34 / 1.36));
    assert!(approx(Breakpoint::Mobile.params().frame_aspect(), 0.7));
}
