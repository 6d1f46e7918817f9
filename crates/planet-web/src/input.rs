use glam::Vec2;
use planet_core::pointer::client_to_ndc;
use planet_core::PointerSample;
use web_sys as web;

// ---------------- Pure helpers (host-testable) ----------------

/// NDC of a client-space point within an element rect, or `None` when the
/// point is outside the rect or the rect is empty.
#[inline]
pub fn rect_ndc(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    let x = client.x - left;
    let y = client.y - top;
    if x < 0.0 || y < 0.0 || x > width || y > height {
        return None;
    }
    client_to_ndc(x, y, width, height)
}

#[inline]
pub fn make_sample(client: Vec2, viewport: Vec2, rect: [f32; 4]) -> PointerSample {
    let [left, top, width, height] = rect;
    PointerSample {
        client,
        viewport,
        surface_ndc: rect_ndc(client, left, top, width, height),
    }
}

// ---------------- DOM readers ----------------

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Window inner size in CSS pixels.
#[inline]
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// `[left, top, width, height]` of the canvas in CSS pixels.
#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> [f32; 4] {
    let r = canvas.get_bounding_client_rect();
    [
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ]
}

pub fn pointer_sample(
    ev: &web::PointerEvent,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> PointerSample {
    make_sample(pointer_client(ev), viewport_size(window), canvas_rect(canvas))
}
