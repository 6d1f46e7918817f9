// DOM wiring constants for the web frontend.

pub const CANVAS_ID: &str = "planet-canvas";

#[inline]
pub fn model_url() -> String {
    format!("/{}", planet_core::MODEL_ASSET_PATH)
}
