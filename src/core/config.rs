// Runtime knobs for the works page.
//
// Defaults come from `constants.rs`; the host page may override any of them
// with `data-*` attributes on the canvas element, e.g.
// `<canvas id="app-canvas" data-route-prefix="/projects/">`.

use super::constants::{DESKTOP_MIN_WIDTH, NAVIGATE_DELAY_MS, PROJECT_HEIGHT_VH, ROUTE_PREFIX};
use super::projects::Project;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    /// Scroll spacer height per project step, in `vh`.
    pub per_item_vh: f32,
    /// Prefix joined with a project's path to form its route.
    pub route_prefix: String,
    pub navigate_delay_ms: u32,
    /// Narrowest viewport (CSS px) that gets the custom cursor.
    pub desktop_min_width: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            per_item_vh: PROJECT_HEIGHT_VH,
            route_prefix: ROUTE_PREFIX.to_string(),
            navigate_delay_ms: NAVIGATE_DELAY_MS,
            desktop_min_width: DESKTOP_MIN_WIDTH,
        }
    }
}

impl GalleryConfig {
    /// Apply overrides from a dataset-style lookup (`routePrefix`, `perItemVh`, ...).
    /// Unparseable or out-of-range values are logged and skipped.
    pub fn with_overrides(mut self, get: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = get("perItemVh") {
            match v.trim().parse::<f32>() {
                Ok(vh) if vh.is_finite() && vh > 0.0 => self.per_item_vh = vh,
                _ => log::warn!("[config] ignoring data-per-item-vh={:?}", v),
            }
        }
        if let Some(v) = get("routePrefix") {
            let v = v.trim();
            if v.starts_with('/') {
                self.route_prefix = if v.ends_with('/') {
                    v.to_string()
                } else {
                    format!("{v}/")
                };
            } else {
                log::warn!("[config] ignoring data-route-prefix={:?}", v);
            }
        }
        if let Some(v) = get("navigateDelayMs") {
            match v.trim().parse::<u32>() {
                Ok(ms) => self.navigate_delay_ms = ms,
                Err(_) => log::warn!("[config] ignoring data-navigate-delay-ms={:?}", v),
            }
        }
        if let Some(v) = get("desktopMinWidth") {
            match v.trim().parse::<f64>() {
                Ok(px) if px.is_finite() && px > 0.0 => self.desktop_min_width = px,
                _ => log::warn!("[config] ignoring data-desktop-min-width={:?}", v),
            }
        }
        self
    }

    /// CSS height of the scroll spacer for `len` projects.
    pub fn spacer_height_css(&self, len: usize) -> String {
        format!("{}vh", len.saturating_sub(1) as f32 * self.per_item_vh)
    }

    pub fn route_for(&self, project: &Project) -> String {
        format!("{}{}", self.route_prefix, project.path)
    }

    pub fn desktop_media_query(&self) -> String {
        format!("(min-width: {}px)", self.desktop_min_width)
    }
}
