use wgpu;
use super::helpers;

/// Depth buffer matching the swapchain size.
///
/// Planes on neighbouring arc positions overlap in screen space, so the
/// scene pass depth-tests instead of relying on draw order.
pub(crate) struct DepthTarget {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) = Self::create(device, width, height);
        Self {
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.depth_tex, self.depth_view) = Self::create(device, width, height);
    }

    fn create(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_texture_device(
            device,
            "depth_tex",
            width,
            height,
            helpers::DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }
}
