//! The shader uniform set shared by every mesh of the model.
//!
//! Only two places write it each frame: the hover raycast result
//! ([`HoverUniforms::apply_raycast`]) and construction. The light rig is
//! static after construction and mirrors the scene's ambient + directional
//! lights so the custom shading matches standard lighting.

use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct HoverParams {
    pub strength: f32,
    pub radius: f32,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            strength: HOVER_STRENGTH,
            radius: HOVER_RADIUS,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HoverUniforms {
    pub hover_point: Vec3,
    pub hover_strength: f32,
    pub hover_radius: f32,
    params: HoverParams,
}

impl HoverUniforms {
    pub fn new(params: HoverParams) -> Self {
        Self {
            hover_point: Vec3::ZERO,
            hover_strength: 0.0,
            hover_radius: params.radius,
            params,
        }
    }

    /// Feed one frame's raycast result.
    ///
    /// Strength is a hard switch between the configured value and zero. The
    /// hover point is only written on a live hit and otherwise left stale.
    pub fn apply_raycast(&mut self, hit_point: Option<Vec3>, hover_active: bool) {
        match hit_point {
            Some(p) if hover_active => {
                self.hover_point = p;
                self.hover_strength = self.params.strength;
            }
            _ => self.hover_strength = 0.0,
        }
    }
}

impl Default for HoverUniforms {
    fn default() -> Self {
        Self::new(HoverParams::default())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LightRig {
    pub ambient_color: Vec3,
    pub ambient_intensity: f32,
    pub directional_color: Vec3,
    /// Unit vector pointing from the surface towards the light.
    pub directional_direction: Vec3,
    pub directional_intensity: f32,
    pub specular_strength: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::from(AMBIENT_LIGHT_COLOR),
            ambient_intensity: AMBIENT_LIGHT_INTENSITY,
            directional_color: Vec3::from(DIRECTIONAL_LIGHT_COLOR),
            directional_direction: directional_light_direction(),
            directional_intensity: DIRECTIONAL_LIGHT_INTENSITY,
            specular_strength: SPECULAR_STRENGTH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ShaderUniforms {
    pub hover: HoverUniforms,
    pub lights: LightRig,
}
