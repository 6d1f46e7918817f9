use glam::Vec3;

// Shared interaction and shading constants used by both web and native frontends.

// Hover displacement
pub const HOVER_STRENGTH: f32 = 0.05; // outward displacement at the hover point (world units)
pub const HOVER_RADIUS: f32 = 0.2; // exponential falloff distance (world units)

// Rotation easing (radians per frame)
pub const ROTATION_SPEED_IDLE: f32 = 0.004;
pub const ROTATION_SPEED_HOVER: f32 = 0.001;
pub const ROTATION_EASE_FACTOR: f32 = 0.05; // lerp factor applied once per frame

// Light rig, matching the scene's ambient + directional lights
pub const AMBIENT_LIGHT_COLOR: [f32; 3] = [0.702, 0.804, 0.878]; // #b3cde0
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_LIGHT_COLOR: [f32; 3] = [1.0, 0.961, 0.902]; // #fff5e6
pub const DIRECTIONAL_LIGHT_POSITION: [f32; 3] = [10.0, 20.0, 10.0];
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 1.2;
pub const SPECULAR_STRENGTH: f32 = 0.3;

// Fixed shading terms (mirrored in planet.wgsl)
pub const SHININESS: f32 = 32.0;
pub const DISPLAY_GAMMA: f32 = 2.2;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 5.0, 5.0);
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls: rotate only, polar angle measured from +Y
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::FRAC_PI_4;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

// Sky gradient drawn behind the planet
pub const SKY_TOP_COLOR: [f32; 3] = [0.529, 0.808, 0.922]; // #87ceeb
pub const SKY_BOTTOM_COLOR: [f32; 3] = [0.353, 0.675, 0.804]; // #5aaccd

// Asset location, relative to the page root (web) or working directory (native)
pub const MODEL_ASSET_PATH: &str = "assets/low_poly_planet_earth.glb";

#[inline]
pub fn directional_light_direction() -> Vec3 {
    Vec3::from(DIRECTIONAL_LIGHT_POSITION).normalize()
}
