// DOM contract and render tuning for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const SCROLL_AREA_ID: &str = "scroll-area";
pub const LABELS_ID: &str = "labels";
pub const SCROLL_PROGRESS_BAR_ID: &str = "scroll-progress-bar";
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const LOADING_ID: &str = "loading";
pub const LOADING_BAR_ID: &str = "loading-bar";

pub const FOLLOWER_ID: &str = "mouse-follower";
pub const FOLLOWER_INNER_ID: &str = "mf-inner";
pub const FOLLOWER_OUTER_WRAPPER_ID: &str = "mf-outer-wrapper";
pub const FOLLOWER_OUTER_ID: &str = "mf-outer";
pub const FOLLOWER_HOVER_ID: &str = "mf-hover";

// Ring border colour when not hovering a target
pub const FOLLOWER_BORDER_COLOR: &str = "var(--color-primary, rgb(59, 130, 246))";
pub const FOLLOWER_HOVER_FILL_IDLE_SCALE: f32 = 0.01;

// Canvas backing store never exceeds this device pixel ratio
pub const MAX_DPR: f64 = 1.5;

// Clear colour behind the planes
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

// Distortion tuning fed to the shader
pub const RGB_SHIFT_STRENGTH: f32 = 0.0;
