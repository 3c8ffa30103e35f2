// Scalars shared between the input handlers and the two frame loops.
//
// Owned as `Rc<RefCell<SharedContext>>` on the main thread only. Each field
// has one writer: pointer handlers write `mouse_pos`, the scene loop writes
// the scroll-derived values, surface hover writes `hovering_canvas`.
// Non-finite writes are dropped so smoothed state can never be poisoned.

use glam::Vec2;

#[derive(Clone, Debug)]
pub struct SharedContext {
    mouse_pos: Vec2,
    last_scroll_top: f32,
    speed: f32,
    scroll_value: f32,
    hovering_canvas: bool,
}

impl SharedContext {
    /// Pointer starts at the viewport centre.
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        let centre = Vec2::new(viewport_w, viewport_h) * 0.5;
        Self {
            mouse_pos: if centre.is_finite() { centre } else { Vec2::ZERO },
            last_scroll_top: 0.0,
            speed: 0.0,
            scroll_value: 0.0,
            hovering_canvas: false,
        }
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    pub fn set_mouse_pos(&mut self, pos: Vec2) {
        if pos.is_finite() {
            self.mouse_pos = pos;
        }
    }

    pub fn last_scroll_top(&self) -> f32 {
        self.last_scroll_top
    }

    pub fn set_last_scroll_top(&mut self, top: f32) {
        if top.is_finite() {
            self.last_scroll_top = top;
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed;
        }
    }

    pub fn scroll_value(&self) -> f32 {
        self.scroll_value
    }

    pub fn set_scroll_value(&mut self, value: f32) {
        if value.is_finite() {
            self.scroll_value = value;
        }
    }

    pub fn hovering_canvas(&self) -> bool {
        self.hovering_canvas
    }

    pub fn set_hovering_canvas(&mut self, hovering: bool) {
        self.hovering_canvas = hovering;
    }
}

impl Default for SharedContext {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
