use glam::Vec2;
use planet_core::pointer::client_to_ndc;
use planet_core::{
    load_glb, Camera, HoverTransition, Model, OrbitControls, PlanetRenderer, PlanetScene,
    PointerSample, SceneParams, MODEL_ASSET_PATH,
};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

fn load_model(path: &str) -> anyhow::Result<Model> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("read {}: {}", path, e))?;
    log::info!("[asset] read {} ({} bytes)", path, bytes.len());
    Ok(load_glb(&bytes)?)
}

fn log_transition(t: Option<HoverTransition>) {
    match t {
        Some(HoverTransition::Enter) => log::info!("[hover] enter"),
        Some(HoverTransition::Leave) => log::info!("[hover] leave"),
        None => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // First argument overrides the bundled model path
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| MODEL_ASSET_PATH.to_string());
    let mut scene = PlanetScene::new(SceneParams::default());
    match load_model(&path) {
        Ok(model) => scene.set_model(model),
        Err(e) => scene.set_unavailable(format!("{e:#}")),
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Planet (native)")
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut gpu = pollster::block_on(PlanetRenderer::new(&window, size.width, size.height))?;
    let mut orbit = OrbitControls::default();
    let mut camera = Camera::new(
        orbit.eye(),
        orbit.target,
        Camera::aspect_for(size.width, size.height),
    );
    let mut cursor = Vec2::ZERO;
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize_if_needed(size.width, size.height),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let client = Vec2::new(position.x as f32, position.y as f32);
                cursor = client;
                let size = window.inner_size();
                let viewport = Vec2::new(size.width as f32, size.height as f32);
                if orbit.is_dragging() {
                    orbit.drag_to(client, viewport.y);
                }
                let sample = PointerSample {
                    client,
                    viewport,
                    surface_ndc: client_to_ndc(client.x, client.y, viewport.x, viewport.y),
                };
                log_transition(scene.pointer_moved(sample, &camera));
            }
            WindowEvent::CursorLeft { .. } => log_transition(scene.pointer_left()),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => orbit.begin_drag(cursor),
                ElementState::Released => orbit.end_drag(),
            },
            _ => {}
        },
        Event::AboutToWait => {
            let (width, height) = gpu.size();
            let eye = orbit.update();
            camera = Camera::new(eye, orbit.target, Camera::aspect_for(width, height));
            scene.frame(&camera);
            if let Some(model) = scene.model() {
                gpu.ensure_model(model);
            }
            match gpu.render(&camera, scene.uniforms(), &scene.mesh_world_matrices()) {
                Ok(()) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
