use std::f32::consts::FRAC_PI_2;

// Shared layout/interaction tuning constants for the works gallery.

// Scene layout
pub const SURFACE_RADIUS: f32 = 20.0; // arc radius the project planes sit on
pub const CAMERA_RADIUS: f32 = 21.5; // camera rides a slightly larger arc
pub const ARC_POLAR: f32 = FRAC_PI_2; // everything lives on the equator
pub const PLANE_SEGMENTS: u32 = 32; // subdivisions per side for vertex distortion
pub const LABEL_DEPTH: f32 = 0.25; // label anchor in front of the plane (local z)

// Scroll mapping
pub const PROJECT_HEIGHT_VH: f32 = 70.0; // scroll spacer height per project step
pub const IN_VIEW_RADIUS: usize = 2; // surfaces either side of the focused one

// Smoothing factors (fraction of the remaining distance per 60 Hz frame)
pub const OUTER_SMOOTHING: f32 = 0.2;
pub const INNER_SMOOTHING: f32 = 0.8;
pub const CAMERA_SMOOTHING: f32 = 0.1;
pub const SPEED_SMOOTHING: f32 = 0.03;
pub const REFERENCE_FPS: f32 = 60.0;

// Cursor follower progress steps (per frame)
pub const HOVER_STEP: f32 = 0.125;
pub const CLICK_PRESS_STEP: f32 = 0.125;
pub const CLICK_RELEASE_STEP: f32 = 0.275;
pub const CLICK_SHRINK_SCALE: f32 = 0.75; // ring scale at full click progress
pub const HOVER_GROW_SCALE: f32 = 0.25; // additive ring growth at full hover

// Cursor follower geometry (CSS px)
pub const OUTER_SIZE: f32 = 40.0;
pub const INNER_SIZE: f32 = 5.0;

// Surface hover tween
pub const HOVER_TWEEN_SEC: f32 = 0.5;

// Navigation
pub const NAVIGATE_DELAY_MS: u32 = 300;
pub const ROUTE_PREFIX: &str = "/works/";

// Breakpoints (CSS px)
pub const MOBILE_MAX_WIDTH: f64 = 480.0; // exclusive
pub const DESKTOP_MIN_WIDTH: f64 = 769.0; // inclusive

// Overlay
pub const SCROLL_HINT_THRESHOLD_PX: f32 = 5.0;
