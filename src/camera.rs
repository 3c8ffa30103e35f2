use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera, same defaults as a stock three.js camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to NDC. `None` when it is behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

#[inline]
/// Compute a world-space ray through a point given in normalized device coordinates.
///
/// Returns `(ray_origin, ray_direction)` in world space; origin is the camera eye.
pub fn ndc_to_world_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}

/// NDC → CSS pixel position inside a `width` × `height` viewport.
#[inline]
pub fn ndc_to_css(ndc: Vec3, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}

/// CSS transform that centres an element on the CSS pixel point `css`.
pub fn centred_transform(css: Vec2) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)",
        css.x, css.y
    )
}
