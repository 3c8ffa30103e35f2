// Scroll-synchronised gallery model: scroll progress, camera rig and
// per-surface hover state.
//
// The web layer reads the scroll container once per frame, hands the numbers
// to [`Gallery::frame`] and then pushes the resulting state to the GPU and
// the overlays. Nothing in here touches the DOM.

use std::ops::Range;

use glam::Vec3;

use super::constants::{CAMERA_SMOOTHING, HOVER_TWEEN_SEC, IN_VIEW_RADIUS, SPEED_SMOOTHING};
use super::context::SharedContext;
use super::interp::{lerp, map_range};
use super::layout::{camera_target, surface_placement, Breakpoint, CameraTarget, Placement};
use super::tween::Tween;

/// Starting camera pose before the first scroll sample arrives.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 24.0);

/// One frame's reading of the scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    /// Scrollable distance: spacer height minus viewport height.
    pub max_offset: f32,
}

/// Scroll offset in `[0, max_offset]` mapped onto `[0, len - 1]`.
///
/// `None` when there is nothing to scroll or an input is not finite.
pub fn scroll_progress(offset: f32, max_offset: f32, len: usize) -> Option<f32> {
    if len == 0 || !offset.is_finite() || !max_offset.is_finite() || max_offset <= 0.0 {
        return None;
    }
    map_range(0.0, 1.0, 0.0, (len - 1) as f32, offset / max_offset)
}

/// Scroll offset at which surface `index` sits dead centre.
pub fn resting_offset(index: usize, len: usize, max_offset: f32) -> Option<f32> {
    if len < 2 || index >= len || !max_offset.is_finite() || max_offset <= 0.0 {
        return None;
    }
    Some(index as f32 * (max_offset / (len - 1) as f32))
}

/// Indices within `IN_VIEW_RADIUS` of the rounded scroll value.
pub fn in_view(scroll_value: f32, len: usize) -> Range<usize> {
    if len == 0 || !scroll_value.is_finite() {
        return 0..0;
    }
    let focus = scroll_value.round().clamp(0.0, (len - 1) as f32) as usize;
    focus.saturating_sub(IN_VIEW_RADIUS)..(focus + IN_VIEW_RADIUS + 1).min(len)
}

/// Live camera pose, smoothed toward a [`CameraTarget`] every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: CAMERA_START,
            look_at: Vec3::ZERO,
        }
    }
}

impl CameraRig {
    pub fn step(&mut self, target: &CameraTarget, dt_sec: f32) {
        let f = CAMERA_SMOOTHING;
        let mut p = Vec3::new(
            lerp(self.position.x, target.position.x, f, dt_sec),
            lerp(self.position.y, target.position.y, f, dt_sec),
            lerp(self.position.z, target.position.z, f, dt_sec),
        );
        // Second pass lifts the camera; it settles at exactly `target.lift`.
        p.y = lerp(p.y, p.y + target.lift, f, dt_sec);
        let l = self.look_at;
        let look_at = Vec3::new(
            lerp(l.x, target.look_at.x, f, dt_sec),
            lerp(l.y, target.look_at.y, f, dt_sec),
            lerp(l.z, target.look_at.z, f, dt_sec),
        );
        if p.is_finite() && look_at.is_finite() {
            self.position = p;
            self.look_at = look_at;
        }
    }
}

#[derive(Clone, Debug)]
pub struct Surface {
    pub index: usize,
    hovered: bool,
    hover: Tween,
}

impl Surface {
    fn new(index: usize) -> Self {
        Self {
            index,
            hovered: false,
            hover: Tween::settled(1.0, HOVER_TWEEN_SEC),
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Distortion shader hover parameter: 1 at rest, 0 fully hovered.
    pub fn hover_value(&self) -> f32 {
        self.hover.value()
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.hover.retarget(if hovered { 0.0 } else { 1.0 });
    }
}

/// Which surfaces gained or lost the pointer in one hover update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverChange {
    pub entered: Option<usize>,
    pub left: Option<usize>,
}

impl HoverChange {
    pub fn is_empty(&self) -> bool {
        self.entered.is_none() && self.left.is_none()
    }
}

pub struct Gallery {
    breakpoint: Breakpoint,
    time: f32,
    camera: CameraRig,
    surfaces: Vec<Surface>,
    hovered: Option<usize>,
    in_view: Range<usize>,
}

impl Gallery {
    pub fn new(len: usize, breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            time: 0.0,
            camera: CameraRig::default(),
            surfaces: (0..len).map(Surface::new).collect(),
            hovered: None,
            in_view: in_view(0.0, len),
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Returns true when the breakpoint actually changed.
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) -> bool {
        let changed = self.breakpoint != breakpoint;
        self.breakpoint = breakpoint;
        changed
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn placement(&self, index: usize) -> Placement {
        surface_placement(index, self.breakpoint)
    }

    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.len()).map(|i| self.placement(i))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn in_view(&self) -> Range<usize> {
        self.in_view.clone()
    }

    pub fn is_in_view(&self, index: usize) -> bool {
        self.in_view.contains(&index)
    }

    /// Advance one rendered frame.
    ///
    /// Time and hover tweens always advance. Scroll speed needs a scroll
    /// reading; scroll value and camera additionally need a positive
    /// scrollable height, otherwise they keep last frame's state.
    pub fn frame(&mut self, ctx: &mut SharedContext, scroll: Option<ScrollMetrics>, dt_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.time += dt;
        for s in &mut self.surfaces {
            s.hover.advance(dt);
        }

        let Some(m) = scroll else {
            return;
        };
        if m.scroll_top.is_finite() {
            let raw = (m.scroll_top - ctx.last_scroll_top()).abs();
            ctx.set_speed(lerp(ctx.speed(), raw, SPEED_SMOOTHING, dt));
            ctx.set_last_scroll_top(m.scroll_top);
        }

        let Some(value) = scroll_progress(m.scroll_top, m.max_offset, self.len()) else {
            return;
        };
        ctx.set_scroll_value(value);
        self.in_view = in_view(value, self.len());
        let target = camera_target(value, self.breakpoint);
        self.camera.step(&target, dt);
    }

    /// Move the pointer-over state to `index` (or off every surface).
    pub fn set_hovered(&mut self, ctx: &mut SharedContext, index: Option<usize>) -> HoverChange {
        let index = index.filter(|&i| i < self.len());
        if index == self.hovered {
            return HoverChange::default();
        }
        let left = self.hovered.take();
        if let Some(i) = left {
            self.surfaces[i].set_hovered(false);
        }
        if let Some(i) = index {
            self.surfaces[i].set_hovered(true);
        }
        self.hovered = index;
        ctx.set_hovering_canvas(index.is_some());
        HoverChange {
            entered: index,
            left,
        }
    }

    /// Surface a click lands on. Only a fresh pick counts; the hover state may
    /// be stale after a wheel scroll with no pointer movement.
    pub fn click_target(&self, hit: Option<usize>) -> Option<usize> {
        hit.filter(|&i| i < self.len())
    }

    /// Scroll offset to jump to when surface `index` is clicked.
    pub fn click_offset(&self, index: usize, max_offset: f32) -> Option<f32> {
        resting_offset(index, self.len(), max_offset)
    }

    /// Drop pointer state on teardown so nothing else believes the canvas is hovered.
    pub fn release(&mut self, ctx: &mut SharedContext) {
        self.set_hovered(ctx, None);
        ctx.set_hovering_canvas(false);
    }
}
