/// Vertex of the subdivided project plane.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed plane of `width` × `height` centred on the origin in the XY plane,
/// facing +Z, with `segments` subdivisions per side. UV (0,0) is the top-left.
pub fn plane_geometry(width: f32, height: f32, segments: u32) -> (Vec<PlaneVertex>, Vec<u32>) {
    let seg = segments.max(1);
    let row = seg + 1;
    let mut vertices = Vec::with_capacity((row * row) as usize);
    for iy in 0..row {
        let v = iy as f32 / seg as f32;
        let y = height * 0.5 - v * height;
        for ix in 0..row {
            let u = ix as f32 / seg as f32;
            let x = u * width - width * 0.5;
            vertices.push(PlaneVertex {
                position: [x, y, 0.0],
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity((seg * seg * 6) as usize);
    for iy in 0..seg {
        for ix in 0..seg {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = (ix + 1) + row * (iy + 1);
            let d = (ix + 1) + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    (vertices, indices)
}
