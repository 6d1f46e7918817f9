use crate::camera::Camera;
use crate::model::Model;
use crate::uniforms::ShaderUniforms;
use glam::Mat4;

mod helpers;
mod planet;
mod sky;
mod targets;

use planet::{create_planet_pipeline, GlobalsUniform, GpuModel, MeshUniform, PlanetPipeline};
use sky::{create_sky_resources, SkyResources};
use targets::DepthTarget;

impl GlobalsUniform {
    fn new(camera: &Camera, uniforms: &ShaderUniforms) -> Self {
        let h = &uniforms.hover;
        let l = &uniforms.lights;
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            hover_point: h.hover_point.extend(1.0).to_array(),
            hover: [h.hover_strength, h.hover_radius, 0.0, 0.0],
            ambient: l.ambient_color.extend(l.ambient_intensity).to_array(),
            light_color: l.directional_color.extend(l.directional_intensity).to_array(),
            light_dir: l.directional_direction.extend(l.specular_strength).to_array(),
        }
    }
}

/// Pick a non-sRGB swapchain format: the planet shader applies its own gamma.
fn pick_surface_format(caps: &wgpu::SurfaceCapabilities) -> wgpu::TextureFormat {
    caps.formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
            )
        })
        .unwrap_or_else(|| caps.formats[0].remove_srgb_suffix())
}

pub struct PlanetRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    sky: SkyResources,
    planet: PlanetPipeline,
    model: Option<GpuModel>,
    width: u32,
    height: u32,
}

impl<'a> PlanetRenderer<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        if caps.formats.is_empty() {
            anyhow::bail!("surface reports no supported formats");
        }
        let format = pick_surface_format(&caps);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let depth = DepthTarget::new(&device, width, height);
        let sky = create_sky_resources(&device, &queue, format);
        let planet = create_planet_pipeline(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            sky,
            planet,
            model: None,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Upload `model` the first time it is seen; later calls are no-ops.
    pub fn ensure_model(&mut self, model: &Model) {
        if self.model.is_none() {
            self.model = Some(GpuModel::upload(&self.device, &self.queue, &self.planet, model));
            log::info!("[gpu] model uploaded ({} meshes)", model.meshes.len());
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface at the current size, e.g. after `Lost`.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, self.width, self.height);
    }

    /// Draw one frame: sky, then every mesh with its world matrix.
    ///
    /// `mesh_worlds` is indexed like the uploaded model's meshes; with no
    /// model uploaded only the sky is drawn.
    pub fn render(
        &mut self,
        camera: &Camera,
        uniforms: &ShaderUniforms,
        mesh_worlds: &[Mat4],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: sky gradient
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sky_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.sky.pipeline);
            rpass.set_bind_group(0, &self.sky.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }

        // Pass 2: planet
        if let Some(model) = &self.model {
            self.queue.write_buffer(
                &self.planet.globals_buffer,
                0,
                bytemuck::bytes_of(&GlobalsUniform::new(camera, uniforms)),
            );
            for (mesh, world) in model.meshes.iter().zip(mesh_worlds) {
                self.queue.write_buffer(
                    &mesh.uniform_buffer,
                    0,
                    bytemuck::bytes_of(&MeshUniform::from_world(*world)),
                );
            }

            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("planet_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.planet.pipeline);
            rpass.set_bind_group(0, &model.globals_bind_group, &[]);
            for mesh in model.meshes.iter().take(mesh_worlds.len()) {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Drop for PlanetRenderer<'_> {
    fn drop(&mut self) {
        if let Some(model) = self.model.take() {
            model.destroy();
        }
        self.depth.tex.destroy();
        self.sky.uniform_buffer.destroy();
        self.planet.globals_buffer.destroy();
        log::info!("[gpu] renderer released");
    }
}
