use crate::dom::Listener;
use crate::input;
use planet_core::{Camera, HoverTransition, OrbitControls, PlanetScene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<PlanetScene>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    /// Camera used by the last rendered frame; enter/leave probes use it.
    pub camera: Rc<RefCell<Camera>>,
}

/// Register every pointer listener. Dropping the returned listeners detaches
/// them.
pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(&w)?,
        wire_pointerleave(&w)?,
        wire_pointerdown(&w)?,
        wire_pointerup(&w)?,
    ])
}

fn log_transition(t: Option<HoverTransition>) {
    match t {
        Some(HoverTransition::Enter) => log::info!("[hover] enter"),
        Some(HoverTransition::Leave) => log::info!("[hover] leave"),
        None => {}
    }
}

// Global: always registered while mounted; the scene gates tracking on the
// hover flag.
fn wire_pointermove(w: &InputWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: &web::EventTarget = w.window.as_ref();
    let target = target.clone();
    Listener::pointer(&target, "pointermove", move |ev| {
        let sample = input::pointer_sample(ev, &w.window, &w.canvas);

        {
            let mut orbit = w.orbit.borrow_mut();
            if orbit.is_dragging() {
                let [_, _, _, height] = input::canvas_rect(&w.canvas);
                orbit.drag_to(sample.client, height);
            }
        }

        let camera = w.camera.borrow();
        let t = w.scene.borrow_mut().pointer_moved(sample, &camera);
        log_transition(t);
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: &web::EventTarget = w.canvas.as_ref();
    let target = target.clone();
    Listener::pointer(&target, "pointerleave", move |_ev| {
        let t = w.scene.borrow_mut().pointer_left();
        log_transition(t);
    })
}

fn wire_pointerdown(w: &InputWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: &web::EventTarget = w.canvas.as_ref();
    let target = target.clone();
    Listener::pointer(&target, "pointerdown", move |ev| {
        if ev.button() != 0 {
            return;
        }
        w.orbit.borrow_mut().begin_drag(input::pointer_client(ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointerup(w: &InputWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: &web::EventTarget = w.window.as_ref();
    let target = target.clone();
    Listener::pointer(&target, "pointerup", move |ev| {
        let mut orbit = w.orbit.borrow_mut();
        if orbit.is_dragging() {
            orbit.end_drag();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
            log::debug!(
                "[orbit] drag end azimuth={:.3} polar={:.3}",
                orbit.azimuth,
                orbit.polar
            );
        }
    })
}
