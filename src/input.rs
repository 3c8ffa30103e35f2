use glam::{Quat, Vec2, Vec3};

/// Hover/click picking against the gallery planes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickQuad {
    pub center: Vec3,
    /// Unit vectors along the plane's local X and Y.
    pub axis_x: Vec3,
    pub axis_y: Vec3,
    pub half_size: Vec2,
}

impl PickQuad {
    pub fn from_pose(center: Vec3, rotation: Quat, size: [f32; 2]) -> Self {
        Self {
            center,
            axis_x: rotation * Vec3::X,
            axis_y: rotation * Vec3::Y,
            half_size: Vec2::from(size) * 0.5,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.axis_x.cross(self.axis_y)
    }
}

/// Pointer position → normalized device coordinates.
///
/// `offset_y` is measured inside the scrolled content, so the container's
/// `scroll_top` is subtracted to get back to viewport space. `None` for an
/// empty viewport or non-finite input.
#[inline]
pub fn pointer_ndc(offset_x: f32, offset_y: f32, scroll_top: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x = offset_x;
    let y = offset_y - scroll_top;
    let ndc = Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0);
    ndc.is_finite().then_some(ndc)
}

/// Distance along the ray to the quad, if the ray crosses it in front of the origin.
#[inline]
pub fn ray_quad(ray_origin: Vec3, ray_dir: Vec3, quad: &PickQuad) -> Option<f32> {
    let n = quad.normal();
    let denom = n.dot(ray_dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = n.dot(quad.center - ray_origin) / denom;
    if !(t >= 0.0) {
        return None;
    }
    let local = ray_origin + ray_dir * t - quad.center;
    let u = local.dot(quad.axis_x);
    let v = local.dot(quad.axis_y);
    (u.abs() <= quad.half_size.x && v.abs() <= quad.half_size.y).then_some(t)
}

// ---------------- Selection helpers ----------------
/// Index of the closest quad hit by the ray.
#[inline]
pub fn pick_nearest<'a>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    quads: impl IntoIterator<Item = &'a PickQuad>,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, q) in quads.into_iter().enumerate() {
        if let Some(t) = ray_quad(ray_origin, ray_dir, q) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
