use super::helpers;
use crate::model::{Model, TextureData};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalsUniform {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) hover_point: [f32; 4],
    pub(crate) hover: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) light_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniform {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal: [[f32; 4]; 4],
}

impl MeshUniform {
    pub(crate) fn from_world(world: Mat4) -> Self {
        Self {
            model: world.to_cols_array_2d(),
            normal: world.inverse().transpose().to_cols_array_2d(),
        }
    }
}

pub(crate) struct PlanetPipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) globals_bgl: wgpu::BindGroupLayout,
    pub(crate) mesh_bgl: wgpu::BindGroupLayout,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) sampler: wgpu::Sampler,
}

pub(crate) fn create_planet_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PlanetPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("planet_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::PLANET_WGSL.into()),
    });
    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("planet_globals_bgl"),
        entries: &[
            helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
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
    let mesh_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("planet_mesh_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("planet_pl"),
        bind_group_layouts: &[&globals_bgl, &mesh_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("planet_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
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
    let globals_buffer = helpers::create_uniform_buffer(
        device,
        "planet_globals",
        std::mem::size_of::<GlobalsUniform>(),
    );
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("base_color_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    PlanetPipeline {
        pipeline,
        globals_bgl,
        mesh_bgl,
        globals_buffer,
        sampler,
    }
}

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

/// GPU-side copy of a [`Model`]: one buffer set per mesh plus the shared
/// base-color texture bound alongside the globals.
pub(crate) struct GpuModel {
    pub(crate) meshes: Vec<GpuMesh>,
    pub(crate) texture: wgpu::Texture,
    pub(crate) globals_bind_group: wgpu::BindGroup,
}

impl GpuModel {
    pub(crate) fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        planet: &PlanetPipeline,
        model: &Model,
    ) -> Self {
        let fallback;
        let tex_data = match &model.texture {
            Some(t) => t,
            None => {
                fallback = TextureData::white();
                &fallback
            }
        };
        let (texture, texture_view) = helpers::upload_base_color(device, queue, tex_data);
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("planet_globals_bg"),
            layout: &planet.globals_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: planet.globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&planet.sampler),
                },
            ],
        });

        let meshes = model
            .meshes
            .iter()
            .map(|m| {
                let vertices: Vec<Vertex> = m
                    .positions
                    .iter()
                    .enumerate()
                    .map(|(i, p)| Vertex {
                        position: p.to_array(),
                        normal: m.normals.get(i).copied().unwrap_or_default().to_array(),
                        uv: m.uvs.get(i).copied().unwrap_or_default().to_array(),
                    })
                    .collect();
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("planet_vb"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("planet_ib"),
                    contents: bytemuck::cast_slice(&m.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let uniform_buffer = helpers::create_uniform_buffer(
                    device,
                    "planet_mesh_uniforms",
                    std::mem::size_of::<MeshUniform>(),
                );
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("planet_mesh_bg"),
                    layout: &planet.mesh_bgl,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                GpuMesh {
                    vertex_buffer,
                    index_buffer,
                    index_count: m.indices.len() as u32,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        Self {
            meshes,
            texture,
            globals_bind_group,
        }
    }

    /// Release GPU memory eagerly instead of waiting for the last handle.
    pub(crate) fn destroy(&self) {
        self.texture.destroy();
        for m in &self.meshes {
            m.vertex_buffer.destroy();
            m.index_buffer.destroy();
            m.uniform_buffer.destroy();
        }
    }
}
