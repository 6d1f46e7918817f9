//! Rotate-only orbit controls with damping.
//!
//! Dragging accumulates a pending spherical delta; every frame applies a
//! fraction of it and decays the rest, so the camera glides to a stop after
//! the pointer is released. Zoom and pan are not supported.

use crate::constants::*;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct OrbitParams {
    pub min_polar: f32,
    pub max_polar: f32,
    pub damping_factor: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub radius: f32,
    /// Angle from +Y.
    pub polar: f32,
    /// Angle around +Y, zero along +Z.
    pub azimuth: f32,
    delta_polar: f32,
    delta_azimuth: f32,
    drag_from: Option<Vec2>,
    params: OrbitParams,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3, params: OrbitParams) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let polar = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        let azimuth = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            polar,
            azimuth,
            delta_polar: 0.0,
            delta_azimuth: 0.0,
            drag_from: None,
            params,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, px: Vec2) {
        self.drag_from = Some(px);
    }

    /// Continue a drag to `px`; `surface_height` is the element height in
    /// the same pixel units. A full-height drag turns the camera once.
    pub fn drag_to(&mut self, px: Vec2, surface_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        if surface_height > 0.0 {
            let d = (px - from) * self.params.rotate_speed;
            let turn = std::f32::consts::TAU / surface_height;
            self.delta_azimuth -= turn * d.x;
            self.delta_polar -= turn * d.y;
        }
        self.drag_from = Some(px);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Apply one frame of damped motion and return the eye position.
    pub fn update(&mut self) -> Vec3 {
        let k = self.params.damping_factor;
        self.azimuth += self.delta_azimuth * k;
        self.polar += self.delta_polar * k;
        self.polar = self
            .polar
            .clamp(self.params.min_polar, self.params.max_polar)
            .clamp(1e-6, std::f32::consts::PI - 1e-6);
        self.delta_azimuth *= 1.0 - k;
        self.delta_polar *= 1.0 - k;
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.target + Vec3::new(sp * sa, cp, sp * ca) * self.radius
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(CAMERA_EYE, Vec3::ZERO, OrbitParams::default())
    }
}
