use crate::constants::{ROTATION_EASE_FACTOR, ROTATION_SPEED_HOVER, ROTATION_SPEED_IDLE};

#[derive(Clone, Copy, Debug)]
pub struct RotationParams {
    pub idle_speed: f32,
    pub hover_speed: f32,
    pub ease_factor: f32,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            idle_speed: ROTATION_SPEED_IDLE,
            hover_speed: ROTATION_SPEED_HOVER,
            ease_factor: ROTATION_EASE_FACTOR,
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Y-axis spin whose speed eases toward a hover-dependent target.
///
/// The ease is applied once per frame with a fixed factor, so convergence is
/// measured in frames rather than seconds.
#[derive(Clone, Copy, Debug)]
pub struct RotationEasing {
    pub speed: f32,
    pub angle: f32,
    params: RotationParams,
}

impl RotationEasing {
    pub fn new(params: RotationParams) -> Self {
        Self {
            speed: params.idle_speed,
            angle: 0.0,
            params,
        }
    }

    pub fn target(&self, hover_active: bool) -> f32 {
        if hover_active {
            self.params.hover_speed
        } else {
            self.params.idle_speed
        }
    }

    /// Advance one frame; returns the new angle in radians.
    pub fn step(&mut self, hover_active: bool) -> f32 {
        self.speed = lerp(self.speed, self.target(hover_active), self.params.ease_factor);
        self.angle += self.speed;
        self.angle
    }
}

impl Default for RotationEasing {
    fn default() -> Self {
        Self::new(RotationParams::default())
    }
}
