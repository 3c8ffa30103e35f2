use super::interp::{clamp01, ease_out_quad};

/// Time-based scalar tween, restarted from wherever it currently is.
///
/// Unlike the cursor follower's fixed per-frame steps, progress here depends
/// only on accumulated seconds, so a retarget mid-flight continues smoothly
/// from the present value.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    age: f32,
}

impl Tween {
    pub fn settled(value: f32, duration: f32) -> Self {
        let duration = duration.max(f32::EPSILON);
        Self {
            from: value,
            to: value,
            duration,
            age: duration,
        }
    }

    pub fn value(&self) -> f32 {
        let t = clamp01(self.age / self.duration);
        self.from + (self.to - self.from) * ease_out_quad(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.age >= self.duration
    }

    /// Start heading to `to` from the current value. No-op if already headed there.
    pub fn retarget(&mut self, to: f32) {
        if to == self.to {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.age = 0.0;
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.age = (self.age + dt_sec).min(self.duration);
        }
        self.value()
    }
}
