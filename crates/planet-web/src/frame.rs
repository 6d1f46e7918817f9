use planet_core::{Camera, OrbitControls, PlanetRenderer, PlanetScene};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<PlanetScene>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub camera: Rc<RefCell<Camera>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<PlanetRenderer<'static>>,
    pub frames: u64,
}

impl FrameContext {
    /// One displayed frame: camera, scene update chain, draw.
    pub fn frame(&mut self) {
        let width = self.canvas.width();
        let height = self.canvas.height();

        let camera = {
            let mut orbit = self.orbit.borrow_mut();
            let eye = orbit.update();
            Camera::new(eye, orbit.target, Camera::aspect_for(width, height))
        };
        *self.camera.borrow_mut() = camera.clone();

        let update = self.scene.borrow_mut().frame(&camera);
        if let Some(u) = update {
            if self.frames % 600 == 0 {
                log::debug!(
                    "[frame] n={} rot={:.3} speed={:.4} hit={}",
                    self.frames,
                    u.rotation_y,
                    u.rotation_speed,
                    u.hit.is_some()
                );
            }
            self.frames += 1;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let scene = self.scene.borrow();
            if let Some(model) = scene.model() {
                g.ensure_model(model);
            }
            match g.render(&camera, scene.uniforms(), &scene.mesh_world_matrices()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<PlanetRenderer<'static>> {
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match PlanetRenderer::new(target, canvas.width(), canvas.height()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// A running `requestAnimationFrame` loop; dropping it stops the loop and
/// releases the frame context.
pub struct AnimationLoop {
    handle: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.handle.get());
        }
        // Breaks the closure's self-reference so the context is freed.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<i32>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(0));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    AnimationLoop { handle, tick }
}
