//! CPU mirror of `planet.wgsl`.
//!
//! Keeps the displacement falloff and the tone-map/gamma order in one place
//! that host tests can check. Changes here must be mirrored in the shader.

use crate::constants::{DISPLAY_GAMMA, SHININESS};
use crate::uniforms::{HoverUniforms, LightRig};
use glam::{Vec3, Vec4};

/// Outward displacement for a vertex `distance` away from the hover point.
#[inline]
pub fn displacement(strength: f32, radius: f32, distance: f32) -> f32 {
    strength * (-distance / radius).exp()
}

/// Displace an object-space vertex along its normal. The falloff distance is
/// measured from the undisplaced world position.
pub fn displace_vertex(position: Vec3, normal: Vec3, world_position: Vec3, hover: &HoverUniforms) -> Vec3 {
    let d = world_position.distance(hover.hover_point);
    position + normal * displacement(hover.hover_strength, hover.hover_radius, d)
}

/// Reinhard operator, per channel.
#[inline]
pub fn tone_map_reinhard(c: Vec3) -> Vec3 {
    c / (c + Vec3::ONE)
}

#[inline]
pub fn gamma_correct(c: Vec3) -> Vec3 {
    c.powf(1.0 / DISPLAY_GAMMA)
}

/// Shade one fragment: ambient + Lambert + Blinn-Phong, tone-mapped, then
/// gamma-corrected. Alpha passes through from `base`.
pub fn shade(base: Vec4, normal: Vec3, world_position: Vec3, camera_position: Vec3, lights: &LightRig) -> Vec4 {
    let albedo = base.truncate();
    let n = normal.normalize_or_zero();
    let l = lights.directional_direction;

    let ambient = lights.ambient_color * lights.ambient_intensity * albedo;
    let diff = n.dot(l).max(0.0);
    let diffuse = lights.directional_color * diff * lights.directional_intensity * albedo;
    let view_dir = (camera_position - world_position).normalize_or_zero();
    let half_dir = (l + view_dir).normalize_or_zero();
    let spec = n.dot(half_dir).max(0.0).powf(SHININESS);
    let specular = lights.directional_color * spec * lights.specular_strength;

    let color = gamma_correct(tone_map_reinhard(ambient + diffuse + specular));
    color.extend(base.w)
}
