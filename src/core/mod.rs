pub mod config;
pub mod constants;
pub mod context;
pub mod follower;
pub mod gallery;
pub mod interp;
pub mod layout;
pub mod navigation;
pub mod projects;
pub mod tween;

pub use config::*;
pub use constants::*;
pub use context::*;
pub use follower::*;
pub use gallery::*;
pub use interp::*;
pub use layout::*;
pub use navigation::*;
pub use projects::*;
pub use tween::*;

// Shaders bundled as string constants
pub static DISTORTION_WGSL: &str = include_str!("../../shaders/distortion.wgsl");
