//! Pointer tracking in normalized device coordinates.
//!
//! The tracker is fed by a single, always-registered global listener. Updates
//! are gated by the hover flag: while the pointer is off the model the last
//! tracked position is kept as-is rather than reset.

use glam::Vec2;

/// Map client coordinates to NDC using the viewport size.
///
/// `x = (px / width) * 2 - 1`, `y = -(py / height) * 2 + 1`. Returns `None`
/// for an empty viewport.
#[inline]
pub fn client_to_ndc(px: f32, py: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    ndc: Vec2,
}

impl PointerTracker {
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Record a pointer move. Returns whether the stored position changed.
    pub fn track(&mut self, hover_active: bool, px: f32, py: f32, width: f32, height: f32) -> bool {
        if !hover_active {
            return false;
        }
        match client_to_ndc(px, py, width, height) {
            Some(ndc) => {
                self.ndc = ndc;
                true
            }
            None => false,
        }
    }
}
