#![cfg(target_arch = "wasm32")]
use planet_core::{Camera, OrbitControls, PlanetScene, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mount;

/// Everything owned by a mounted viewer. Dropping it cancels the frame loop,
/// detaches listeners and releases GPU resources.
struct Mounted {
    _listeners: Vec<dom::Listener>,
    _animation: frame::AnimationLoop,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("planet-web starting");

    spawn_local(async move {
        if let Err(e) = mount().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down the viewer. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    mount::invalidate();
    let taken = MOUNTED.with(|m| m.borrow_mut().take());
    if taken.is_some() {
        log::info!("planet-web unmounted");
    }
}

async fn mount() -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::warn!("[mount] already mounted; ignoring");
        return Ok(());
    }
    let token = mount::MountToken::begin();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let resize = dom::wire_canvas_resize(&canvas)?;

    let scene = Rc::new(RefCell::new(PlanetScene::new(SceneParams::default())));
    let orbit = Rc::new(RefCell::new(OrbitControls::default()));
    let camera = Rc::new(RefCell::new(Camera::new(
        orbit.borrow().eye(),
        orbit.borrow().target,
        Camera::aspect_for(canvas.width(), canvas.height()),
    )));

    // Only await in setup; everything after it runs without yielding.
    let gpu = frame::init_gpu(&canvas).await;
    if !token.is_current() {
        // Dropping `resize` and `gpu` here releases what was set up so far.
        log::info!("[mount] unmounted during setup; aborting");
        return Ok(());
    }

    let mut listeners = events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
        orbit: orbit.clone(),
        camera: camera.clone(),
    })?;
    listeners.push(resize);

    // Model loads in the background; frames are no-ops until it is ready.
    let scene_for_asset = scene.clone();
    spawn_local(async move {
        let url = constants::model_url();
        match asset::load_model(&url).await {
            Ok(model) => scene_for_asset.borrow_mut().set_model(model),
            Err(e) => scene_for_asset.borrow_mut().set_unavailable(format!("{e:#}")),
        }
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit,
        camera,
        canvas,
        gpu,
        frames: 0,
    }));
    let animation = frame::start_loop(frame_ctx);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Mounted {
            _listeners: listeners,
            _animation: animation,
        })
    });
    log::info!("[mount] viewer mounted");
    Ok(())
}
