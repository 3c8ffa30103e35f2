// Responsive breakpoints and the arc placement shared by surfaces and camera.

use glam::{Mat4, Quat, Vec3};

use super::constants::{ARC_POLAR, CAMERA_RADIUS, DESKTOP_MIN_WIDTH, MOBILE_MAX_WIDTH, SURFACE_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Per-breakpoint sizing and spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    /// Plane width/height in world units.
    pub plane_size: [f32; 2],
    /// Azimuth step (radians) per project index.
    pub distance_x: f32,
    /// Index units per world unit of vertical lift.
    pub distance_y: f32,
}

impl Breakpoint {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width_px < DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn params(self) -> LayoutParams {
        match self {
            Breakpoint::Mobile => LayoutParams {
                plane_size: [0.7, 1.0],
                distance_x: 0.05,
                distance_y: 3.5,
            },
            Breakpoint::Tablet => LayoutParams {
                plane_size: [1.4, 0.9],
                distance_x: 0.1,
                distance_y: 2.0,
            },
            Breakpoint::Desktop => LayoutParams {
                plane_size: [2.34, 1.36],
                distance_x: 0.16,
                distance_y: 1.18,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }
}

impl LayoutParams {
    pub fn frame_aspect(&self) -> f32 {
        self.plane_size[0] / self.plane_size[1]
    }

    /// Vertical lift for a (possibly fractional) index.
    pub fn lift(&self, index: f32) -> f32 {
        index / self.distance_y
    }

    pub fn azimuth(&self, index: f32) -> f32 {
        self.distance_x * index
    }
}

/// Point on a sphere, three.js convention: polar from +Y, azimuth from +Z toward +X.
#[inline]
pub fn spherical(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    let s = polar.sin() * radius;
    Vec3::new(s * azimuth.sin(), polar.cos() * radius, s * azimuth.cos())
}

/// Resting pose of one project plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// Rotation about +Y that turns the plane's +Z normal away from the origin.
    pub yaw: f32,
}

impl Placement {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position)
    }

    /// World position of a point given in the plane's local frame.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation() * local
    }
}

/// Pose for surface `index` under `breakpoint`; depends on nothing else.
pub fn surface_placement(index: usize, breakpoint: Breakpoint) -> Placement {
    let p = breakpoint.params();
    let i = index as f32;
    let on_arc = spherical(SURFACE_RADIUS, ARC_POLAR, p.azimuth(i));
    // Face the mirror point 2·pos, i.e. straight away from the centre.
    let facing = on_arc * 2.0 - on_arc;
    let yaw = facing.x.atan2(facing.z);
    Placement {
        position: on_arc + Vec3::Y * p.lift(i),
        yaw,
    }
}

/// Where the camera wants to be for a scroll progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
    pub lift: f32,
    pub azimuth: f32,
}

pub fn camera_target(scroll_value: f32, breakpoint: Breakpoint) -> CameraTarget {
    let p = breakpoint.params();
    let azimuth = p.azimuth(scroll_value);
    let lift = p.lift(scroll_value);
    CameraTarget {
        position: spherical(CAMERA_RADIUS, ARC_POLAR, azimuth),
        look_at: Vec3::new(0.0, lift, 0.0),
        lift,
        azimuth,
    }
}
