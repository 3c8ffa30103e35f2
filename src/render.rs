use glam::Mat4;
use web_sys as web;

mod helpers;
pub mod mesh;
mod planes;
mod targets;
pub mod textures;

use planes::{create_plane_resources, CameraUniforms, PlaneMesh, PlaneResources, SurfaceResources};
pub use planes::SurfaceUniforms;
use targets::DepthTarget;

use crate::constants::CLEAR_COLOR;
use crate::core::PLANE_SEGMENTS;

const PLACEHOLDER_RGBA: [u8; 4] = [24, 24, 28, 255];

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth: DepthTarget,
    planes: PlaneResources,
    mesh: PlaneMesh,
    surfaces: Vec<SurfaceResources>,
    linear_sampler: wgpu::Sampler,

    width: u32,
    height: u32,
    view_proj: Mat4,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        surface_count: usize,
        plane_size: [f32; 2],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let planes = create_plane_resources(&device, format);
        let mesh = PlaneMesh::new(&device, plane_size, PLANE_SEGMENTS);
        let linear_sampler = helpers::create_linear_sampler(&device);
        let surfaces = (0..surface_count)
            .map(|_| {
                let placeholder =
                    helpers::create_placeholder_texture(&device, &queue, PLACEHOLDER_RGBA);
                planes::create_surface_resources(
                    &device,
                    &planes.surface_bgl,
                    placeholder,
                    &linear_sampler,
                )
            })
            .collect();

        log::info!(
            "[gpu] ready {}x{} format={:?} surfaces={}",
            width,
            height,
            format,
            surface_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            planes,
            mesh,
            surfaces,
            linear_sampler,
            width,
            height,
            view_proj: Mat4::IDENTITY,
        })
    }

    pub fn set_camera(&mut self, view_proj: Mat4) {
        self.view_proj = view_proj;
    }

    /// Rebuild the shared plane mesh when the breakpoint changes its size.
    pub fn set_plane_size(&mut self, size: [f32; 2]) {
        if self.mesh.size != size {
            self.mesh = PlaneMesh::new(&self.device, size, PLANE_SEGMENTS);
        }
    }

    pub fn texture_aspect(&self, index: usize) -> f32 {
        self.surfaces.get(index).map_or(1.0, |s| s.texture_aspect)
    }

    /// Upload a decoded cover for surface `index`.
    pub fn set_cover(&mut self, index: usize, bitmap: &web::ImageBitmap) {
        let Some(slot) = self.surfaces.get_mut(index) else {
            return;
        };
        let (w, h) = (bitmap.width(), bitmap.height());
        if w == 0 || h == 0 {
            log::warn!("[gpu] cover {} is empty", index);
            return;
        }
        let (texture, view) = helpers::create_texture_device(
            &self.device,
            "cover",
            w,
            h,
            helpers::COVER_FORMAT,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        self.queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::ImageBitmap(bitmap.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );
        slot.bind_group = planes::surface_bind_group(
            &self.device,
            &self.planes.surface_bgl,
            &slot.uniform_buffer,
            &view,
            &self.linear_sampler,
        );
        slot.texture = texture;
        slot.texture_aspect = w as f32 / h as f32;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Draw every plane. `uniforms[i]` belongs to surface `i`.
    pub fn render(&mut self, uniforms: &[SurfaceUniforms]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let cam = CameraUniforms {
            view_proj: self.view_proj.to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.planes.camera_buffer, 0, bytemuck::bytes_of(&cam));
        for (slot, u) in self.surfaces.iter().zip(uniforms) {
            self.queue
                .write_buffer(&slot.uniform_buffer, 0, bytemuck::bytes_of(u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.planes.pipeline);
            rpass.set_bind_group(0, &self.planes.camera_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            for slot in self.surfaces.iter().take(uniforms.len()) {
                rpass.set_bind_group(1, &slot.bind_group, &[]);
                rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
