// Host-side tests for the scroll-to-camera mapper, surface hover and click navigation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod context {
        include!("../src/core/context.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
    pub mod interp {
        include!("../src/core/interp.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod navigation {
        include!("../src/core/navigation.rs");
    }
    pub mod projects {
        include!("../src/core/projects.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use app::config::GalleryConfig;
use app::context::SharedContext;
use app::gallery::*;
use app::layout::{camera_target, Breakpoint};
use app::navigation::{DelayedNavigation, Router, Scheduler};
use app::projects::projects;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn metrics(scroll_top: f32, max_offset: f32) -> Option<ScrollMetrics> {
    Some(ScrollMetrics {
        scroll_top,
        max_offset,
    })
}

#[test]
fn scroll_extremes_map_to_first_and_last_index() {
    assert_eq!(scroll_progress(0.0, 1000.0, 11), Some(0.0));
    assert_eq!(scroll_progress(1000.0, 1000.0, 11), Some(10.0));
}

#[test]
fn half_scroll_lands_on_middle_project() {
    let value = scroll_progress(500.0, 1000.0, 11);
    assert_eq!(value, Some(5.0));
    let target = camera_target(5.0, Breakpoint::Desktop);
    assert_eq!(target.azimuth, 0.16 * 5.0);
}

#[test]
fn zero_or_bad_scroll_height_has_no_progress() {
    assert_eq!(scroll_progress(10.0, 0.0, 11), None);
    assert_eq!(scroll_progress(10.0, -50.0, 11), None);
    assert_eq!(scroll_progress(f32::NAN, 100.0, 11), None);
    assert_eq!(scroll_progress(10.0, f32::INFINITY, 11), None);
    assert_eq!(scroll_progress(10.0, 100.0, 0), None);
}

#[test]
fn in_view_window_is_clipped_to_collection() {
    assert_eq!(in_view(5.0, 11), 3..8);
    assert_eq!(in_view(4.6, 11), 3..8);
    assert_eq!(in_view(0.0, 11), 0..3);
    assert_eq!(in_view(10.0, 11), 8..11);
    assert_eq!(in_view(0.0, 1), 0..1);
    assert_eq!(in_view(0.0, 0), 0..0);
    assert_eq!(in_view(f32::NAN, 11), 0..0);
}

#[test]
fn frame_writes_scroll_value_and_in_view() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    let mut ctx = SharedContext::default();
    g.frame(&mut ctx, metrics(500.0, 1000.0), FRAME);
    assert_eq!(ctx.scroll_value(), 5.0);
    assert_eq!(g.in_view(), 3..8);
    assert!(g.is_in_view(7));
    assert!(!g.is_in_view(8));
}

#[test]
fn camera_converges_on_target_and_lift() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    let mut ctx = SharedContext::default();
    for _ in 0..600 {
        g.frame(&mut ctx, metrics(500.0, 1000.0), FRAME);
    }
    let target = camera_target(5.0, Breakpoint::Desktop);
    let cam = g.camera();
    assert!(approx(cam.position.x, target.position.x));
    assert!(approx(cam.position.z, target.position.z));
    assert!(approx(cam.position.y, target.position.y + target.lift));
    assert!(approx(cam.look_at.y, target.lift));
    assert!(approx(cam.look_at.x, 0.0));
}

#[test]
fn zero_scroll_height_leaves_camera_and_value_alone() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    let mut ctx = SharedContext::default();
    ctx.set_scroll_value(2.0);
    g.frame(&mut ctx, metrics(40.0, 0.0), FRAME);
    assert_eq!(g.camera().position, CAMERA_START);
    assert_eq!(g.camera().look_at, Vec3::ZERO);
    assert_eq!(ctx.scroll_value(), 2.0);
    // Time still runs.
    assert!(g.time() > 0.0);
}

#[test]
fn missing_scroll_reading_still_advances_time() {
    let mut g = Gallery::new(3, Breakpoint::Mobile);
    let mut ctx = SharedContext::default();
    g.frame(&mut ctx, None, 0.5);
    g.frame(&mut ctx, None, f32::NAN);
    assert_eq!(g.time(), 0.5);
    assert_eq!(ctx.speed(), 0.0);
}

#[test]
fn scroll_speed_is_smoothed_delta() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    let mut ctx = SharedContext::default();
    g.frame(&mut ctx, metrics(100.0, 1000.0), FRAME);
    assert!(approx(ctx.speed(), 3.0));
    assert_eq!(ctx.last_scroll_top(), 100.0);

    // Holding still decays the speed.
    let before = ctx.speed();
    g.frame(&mut ctx, metrics(100.0, 1000.0), FRAME);
    assert!(ctx.speed() < before);
}

#[test]
fn hover_enter_and_leave_drive_tween_and_shared_flag() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    let mut ctx = SharedContext::default();
    assert_eq!(g.surfaces()[2].hover_value(), 1.0);

    let change = g.set_hovered(&mut ctx, Some(2));
    assert_eq!(change.entered, Some(2));
    assert_eq!(change.left, None);
    assert!(ctx.hovering_canvas());
    assert!(g.surfaces()[2].is_hovered());

    g.frame(&mut ctx, None, 0.25);
    assert!(approx(g.surfaces()[2].hover_value(), 0.25));
    g.frame(&mut ctx, None, 0.5);
    assert_eq!(g.surfaces()[2].hover_value(), 0.0);

    // Same surface again is not a change.
    assert!(g.set_hovered(&mut ctx, Some(2)).is_empty());

    let change = g.set_hovered(&mut ctx, Some(4));
    assert_eq!(change.entered, Some(4));
    assert_eq!(change.left, Some(2));
    assert!(!g.surfaces()[2].is_hovered());

    g.release(&mut ctx);
    assert!(!ctx.hovering_canvas());
    assert_eq!(g.hovered(), None);
}

#[test]
fn out_of_range_hover_counts_as_leave() {
    let mut g = Gallery::new(3, Breakpoint::Tablet);
    let mut ctx = SharedContext::default();
    g.set_hovered(&mut ctx, Some(1));
    let change = g.set_hovered(&mut ctx, Some(99));
    assert_eq!(change.left, Some(1));
    assert_eq!(change.entered, None);
    assert!(!ctx.hovering_canvas());
}

#[test]
fn click_offset_rests_surface_in_centre() {
    let g = Gallery::new(11, Breakpoint::Desktop);
    let max = 1000.0;
    assert!(approx(g.click_offset(3, max).unwrap(), 3.0 * max / 10.0));
    assert_eq!(g.click_offset(0, max), Some(0.0));
    assert!(approx(g.click_offset(10, max).unwrap(), max));
    assert_eq!(g.click_offset(11, max), None);
    assert_eq!(g.click_offset(3, 0.0), None);

    // The offset maps back onto the surface index.
    let offset = g.click_offset(3, max).unwrap();
    assert!(approx(scroll_progress(offset, max, 11).unwrap(), 3.0));
}

#[test]
fn click_ignores_stale_hover_after_scroll() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    let mut ctx = SharedContext::default();
    g.set_hovered(&mut ctx, Some(0));

    // Wheel to the end without moving the pointer: hover still says 0.
    for _ in 0..120 {
        g.frame(&mut ctx, metrics(1000.0, 1000.0), FRAME);
    }
    assert_eq!(g.hovered(), Some(0));

    // Nothing under the pointer, so the click does nothing.
    assert_eq!(g.click_target(None), None);
    assert_eq!(g.click_target(Some(10)), Some(10));
    assert_eq!(g.click_target(Some(11)), None);
}

#[test]
fn breakpoint_change_is_reported_once() {
    let mut g = Gallery::new(11, Breakpoint::Desktop);
    assert!(g.set_breakpoint(Breakpoint::Mobile));
    assert!(!g.set_breakpoint(Breakpoint::Mobile));
    assert_eq!(g.breakpoint(), Breakpoint::Mobile);
    assert_eq!(g.placements().count(), 11);
}

#[derive(Default)]
struct RecordingRouter {
    visits: RefCell<Vec<String>>,
}

impl Router for RecordingRouter {
    fn navigate(&self, href: &str) {
        self.visits.borrow_mut().push(href.to_string());
    }
}

type Pending = Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>;

#[derive(Clone, Default)]
struct ManualScheduler {
    pending: Pending,
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}

#[test]
fn clicking_surface_three_navigates_only_after_delay() {
    let config = GalleryConfig::default();
    let router = Rc::new(RecordingRouter::default());
    let scheduler = ManualScheduler::default();
    let nav = DelayedNavigation::new(router.clone(), scheduler.clone(), config.navigate_delay_ms);

    let g = Gallery::new(projects().len(), Breakpoint::Desktop);
    let max = 7000.0;
    let offset = g.click_offset(3, max).unwrap();
    assert!(approx(offset, 3.0 * max / 10.0));

    nav.navigate_later(config.route_for(&projects()[3]));
    assert!(router.visits.borrow().is_empty());

    let (delay, task) = scheduler.pending.borrow_mut().remove(0);
    assert_eq!(delay, 300);
    assert_eq!(nav.delay_ms(), 300);
    task();
    assert_eq!(
        *router.visits.borrow(),
        vec![format!("/works/{}", projects()[3].path)]
    );
}
