use wgpu;
use wgpu::util::DeviceExt;

use super::helpers;
use super::mesh::{plane_geometry, PlaneVertex};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
}

/// Per-surface distortion material parameters, laid out for WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceUniforms {
    pub model: [[f32; 4]; 4],
    pub time: f32,
    pub speed: f32,
    pub hover_value: f32,
    pub rgb_shift_strength: f32,
    pub texture_aspect: f32,
    pub frame_aspect: f32,
    pub _pad: [f32; 2],
}

pub(crate) struct PlaneMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) size: [f32; 2],
}

impl PlaneMesh {
    pub(crate) fn new(device: &wgpu::Device, size: [f32; 2], segments: u32) -> Self {
        let (vertices, indices) = plane_geometry(size[0], size[1], segments);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("plane_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            size,
        }
    }
}

/// GPU side of one project plane: its uniforms, cover texture and bind group.
pub(crate) struct SurfaceResources {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) texture: wgpu::Texture,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) texture_aspect: f32,
}

pub(crate) struct PlaneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) camera_buffer: wgpu::Buffer,
    pub(crate) camera_bind_group: wgpu::BindGroup,
    pub(crate) surface_bgl: wgpu::BindGroupLayout,
}

pub(crate) fn create_plane_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PlaneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("distortion_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::DISTORTION_WGSL.into()),
    });
    let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("camera_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let surface_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("surface_bgl"),
        entries: &[
            helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("planes_pl"),
        bind_group_layouts: &[&camera_bgl, &surface_bgl],
        push_constant_ranges: &[],
    });
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PlaneVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
    };
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("planes_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("camera_uniforms"),
        size: std::mem::size_of::<CameraUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("camera_bg"),
        layout: &camera_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: camera_buffer.as_entire_binding(),
        }],
    });

    PlaneResources {
        pipeline,
        camera_buffer,
        camera_bind_group,
        surface_bgl,
    }
}

pub(crate) fn surface_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("surface_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

pub(crate) fn create_surface_resources(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    placeholder: (wgpu::Texture, wgpu::TextureView),
    sampler: &wgpu::Sampler,
) -> SurfaceResources {
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("surface_uniforms"),
        size: std::mem::size_of::<SurfaceUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let (texture, view) = placeholder;
    let bind_group = surface_bind_group(device, layout, &uniform_buffer, &view, sampler);
    SurfaceResources {
        uniform_buffer,
        texture,
        bind_group,
        texture_aspect: 1.0,
    }
}
