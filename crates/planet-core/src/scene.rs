//! Owned per-mount interaction state for the planet.
//!
//! A single [`PlanetScene`] is created at mount and handed by reference to the
//! pointer listener and to the frame callback. Both run on the one UI thread,
//! so there is no locking; the last pointer event before a frame wins.

use crate::camera::Camera;
use crate::model::Model;
use crate::pointer::PointerTracker;
use crate::raycast::{nearest_hit, Hit};
use crate::rotation::{RotationEasing, RotationParams};
use crate::uniforms::{HoverParams, HoverUniforms, LightRig, ShaderUniforms};
use glam::{Mat4, Vec2};

#[derive(Clone, Debug, Default)]
pub enum AssetState {
    #[default]
    Loading,
    Ready(Model),
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTransition {
    Enter,
    Leave,
}

/// Viewport-relative and canvas-relative positions of one pointer event.
///
/// `client` is measured against the viewport (`viewport` = window inner
/// size) and drives the tracked NDC. `surface_ndc` is the position within
/// the rendering surface and drives enter/leave detection.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub client: Vec2,
    pub viewport: Vec2,
    pub surface_ndc: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
    pub hit: Option<Hit>,
    pub rotation_y: f32,
    pub rotation_speed: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SceneParams {
    pub hover: HoverParams,
    pub rotation: RotationParams,
    pub lights: LightRig,
}

#[derive(Debug, Default)]
pub struct PlanetScene {
    asset: AssetState,
    pointer: PointerTracker,
    hover_active: bool,
    uniforms: ShaderUniforms,
    rotation: RotationEasing,
}

impl PlanetScene {
    pub fn new(params: SceneParams) -> Self {
        Self {
            asset: AssetState::Loading,
            pointer: PointerTracker::default(),
            hover_active: false,
            uniforms: ShaderUniforms {
                hover: HoverUniforms::new(params.hover),
                lights: params.lights,
            },
            rotation: RotationEasing::new(params.rotation),
        }
    }

    pub fn asset(&self) -> &AssetState {
        &self.asset
    }

    pub fn model(&self) -> Option<&Model> {
        match &self.asset {
            AssetState::Ready(m) => Some(m),
            _ => None,
        }
    }

    pub fn set_model(&mut self, model: Model) {
        self.asset = AssetState::Ready(model);
    }

    pub fn set_unavailable(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("[asset] model unavailable: {}", reason);
        self.asset = AssetState::Unavailable(reason);
    }

    pub fn hover_active(&self) -> bool {
        self.hover_active
    }

    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer.ndc()
    }

    pub fn uniforms(&self) -> &ShaderUniforms {
        &self.uniforms
    }

    pub fn rotation(&self) -> &RotationEasing {
        &self.rotation
    }

    /// Model-to-world transform: rotation about the model's own origin,
    /// then the centering offset.
    pub fn model_matrix(&self) -> Mat4 {
        let center = self.model().map(|m| m.center).unwrap_or_default();
        Mat4::from_translation(-center) * Mat4::from_rotation_y(self.rotation.angle)
    }

    /// World matrices for every mesh, in model order.
    pub fn mesh_world_matrices(&self) -> Vec<Mat4> {
        let root = self.model_matrix();
        self.model()
            .map(|m| m.meshes.iter().map(|mesh| root * mesh.local).collect())
            .unwrap_or_default()
    }

    /// Explicit enter/leave from the host's per-object pointer events.
    pub fn set_hover(&mut self, active: bool) -> Option<HoverTransition> {
        if active == self.hover_active {
            return None;
        }
        self.hover_active = active;
        log::debug!("[hover] active={}", active);
        Some(if active {
            HoverTransition::Enter
        } else {
            HoverTransition::Leave
        })
    }

    /// Handle one global pointer-move.
    ///
    /// The tracker sees the flag as it was when the event arrived; the
    /// enter/leave probe against the surface then updates the flag for the
    /// moves that follow.
    pub fn pointer_moved(&mut self, sample: PointerSample, camera: &Camera) -> Option<HoverTransition> {
        self.pointer.track(
            self.hover_active,
            sample.client.x,
            sample.client.y,
            sample.viewport.x,
            sample.viewport.y,
        );
        let over = match sample.surface_ndc {
            Some(ndc) => self.probe(ndc, camera).is_some(),
            None => false,
        };
        self.set_hover(over)
    }

    /// The pointer left the rendering surface.
    pub fn pointer_left(&mut self) -> Option<HoverTransition> {
        self.set_hover(false)
    }

    /// Raycast the model from an arbitrary NDC position without touching
    /// any state.
    pub fn probe(&self, ndc: Vec2, camera: &Camera) -> Option<Hit> {
        let model = self.model()?;
        nearest_hit(model, self.model_matrix(), &camera.ray_through(ndc))
    }

    /// One frame of the update chain: raycast, uniform feed, rotation.
    ///
    /// Returns `None` and leaves all state untouched until a model is ready.
    pub fn frame(&mut self, camera: &Camera) -> Option<FrameUpdate> {
        self.model()?;
        let hit = self.probe(self.pointer.ndc(), camera);
        self.uniforms
            .hover
            .apply_raycast(hit.map(|h| h.point), self.hover_active);
        let rotation_y = self.rotation.step(self.hover_active);
        Some(FrameUpdate {
            hit,
            rotation_y,
            rotation_speed: self.rotation.speed,
        })
    }
}

