// Platform-free state of the custom cursor follower.
//
// The DOM component feeds pointer samples and button state in, calls
// [`FollowerState::step`] once per animation frame and writes the returned
// transforms to the page.

use glam::Vec2;

use super::constants::{
    CLICK_PRESS_STEP, CLICK_RELEASE_STEP, CLICK_SHRINK_SCALE, HOVER_GROW_SCALE, HOVER_STEP,
    INNER_SIZE, INNER_SMOOTHING, OUTER_SIZE, OUTER_SMOOTHING,
};
use super::interp::{ease_in_out_quad, lerp_frame, map_range};

/// Marker class that opts an arbitrary element into hover styling.
pub const HOVER_MARKER_CLASS: &str = "mf-active";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedPoint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TrackedPoint {
    pub fn new(at: Vec2, size: f32) -> Self {
        Self {
            x: at.x,
            y: at.y,
            width: size,
            height: size,
        }
    }

    pub fn follow(&mut self, target: Vec2, factor: f32) {
        if !target.is_finite() {
            return;
        }
        self.x = lerp_frame(self.x, target.x, factor);
        self.y = lerp_frame(self.y, target.y, factor);
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Scalar progress pinned to [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    pub fn get(self) -> f32 {
        self.0
    }

    pub fn step(&mut self, delta: f32) -> f32 {
        self.0 = (self.0 + delta).clamp(0.0, 1.0);
        self.0
    }
}

/// Transforms to apply after one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerFrame {
    pub outer_translate: Vec2,
    pub outer_scale: f32,
    pub inner_translate: Vec2,
}

impl FollowerFrame {
    pub fn outer_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.outer_translate.x, self.outer_translate.y, self.outer_scale
        )
    }

    pub fn inner_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0)",
            self.inner_translate.x, self.inner_translate.y
        )
    }
}

#[derive(Clone, Debug)]
pub struct FollowerState {
    pub outer: TrackedPoint,
    pub inner: TrackedPoint,
    hover: Progress,
    click: Progress,
    hovering: bool,
    pressed: bool,
    revealed: bool,
}

impl FollowerState {
    pub fn new(start: Vec2) -> Self {
        Self {
            outer: TrackedPoint::new(start, OUTER_SIZE),
            inner: TrackedPoint::new(start, INNER_SIZE),
            hover: Progress::default(),
            click: Progress::default(),
            hovering: false,
            pressed: false,
            revealed: false,
        }
    }

    pub fn hover_progress(&self) -> f32 {
        self.hover.get()
    }

    pub fn click_progress(&self) -> f32 {
        self.click.get()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Returns true when the hover flag actually flipped.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// True exactly once: on the first pointer movement after mount.
    pub fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }

    pub fn step(&mut self, pointer: Vec2) -> FollowerFrame {
        self.outer.follow(pointer, OUTER_SMOOTHING);
        self.inner.follow(pointer, INNER_SMOOTHING);

        self.hover.step(if self.hovering { HOVER_STEP } else { -HOVER_STEP });
        if self.pressed {
            self.click.step(CLICK_PRESS_STEP);
        } else {
            self.click.step(-CLICK_RELEASE_STEP);
        }

        // Both points are offset by half the dot so the ring and dot share a centre.
        let half = Vec2::new(self.inner.width, self.inner.height) * 0.5;
        FollowerFrame {
            outer_translate: self.outer.pos() + half,
            outer_scale: outer_scale(self.click.get(), self.hover.get()),
            inner_translate: self.inner.pos() + half,
        }
    }
}

/// Ring scale: shrinks toward 0.75 while clicking, grows by up to 0.25 on hover.
pub fn outer_scale(click: f32, hover: f32) -> f32 {
    let shrink = map_range(0.0, 1.0, 1.0, CLICK_SHRINK_SCALE, ease_in_out_quad(click)).unwrap_or(1.0);
    shrink + ease_in_out_quad(hover) * HOVER_GROW_SCALE
}

/// Whether an element with this tag name / marker qualifies as a hover target.
pub fn is_hover_target(node_name: &str, has_marker: bool) -> bool {
    has_marker || node_name.eq_ignore_ascii_case("BUTTON") || node_name.eq_ignore_ascii_case("A")
}
