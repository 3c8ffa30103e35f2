// Interpolation helpers shared by the cursor follower and the gallery.
//
// Everything here is a pure function of its arguments. Smoothing is
// expressed as "fraction of the remaining distance covered per 60 Hz frame"
// and corrected for the real frame duration, so motion converges at the same
// wall-clock rate on 30, 60 or 144 Hz displays.

use super::constants::REFERENCE_FPS;

/// Frame-rate independent exponential approach from `start` toward `end`.
///
/// `factor` is the share of the gap closed in one reference frame and
/// `elapsed` is the real time since the previous frame in seconds.
#[inline]
pub fn lerp(start: f32, end: f32, factor: f32, elapsed: f32) -> f32 {
    let t = 1.0 - (1.0 - factor).powf(elapsed.max(0.0) * REFERENCE_FPS);
    start + (end - start) * t
}

/// Plain per-frame form: closes `factor` of the gap once.
#[inline]
pub fn lerp_frame(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Affine map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Returns `None` for a degenerate input range instead of a non-finite value.
#[inline]
pub fn map_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> Option<f32> {
    let span = in_max - in_min;
    if span == 0.0 || !span.is_finite() {
        return None;
    }
    let out = (value - in_min) * (out_max - out_min) / span + out_min;
    out.is_finite().then_some(out)
}

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

#[inline]
pub fn ease_in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

/// Quadratic ease-out; the default curve for timed tweens.
#[inline]
pub fn ease_out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}
