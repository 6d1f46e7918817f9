pub mod camera;
pub mod constants;
pub mod error;
pub mod model;
pub mod orbit;
pub mod pointer;
pub mod ray;
pub mod raycast;
pub mod render;
pub mod rotation;
pub mod scene;
pub mod shading;
pub mod uniforms;

pub use camera::*;
pub use constants::*;
pub use error::AssetError;
pub use model::{load_glb, Model};
pub use orbit::{OrbitControls, OrbitParams};
pub use render::PlanetRenderer;
pub use scene::*;
pub use uniforms::*;

// Shaders bundled as string constants
pub static PLANET_WGSL: &str = include_str!("../shaders/planet.wgsl");
pub static SKY_WGSL: &str = include_str!("../shaders/sky.wgsl");
