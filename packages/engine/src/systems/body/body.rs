use crate::error::{EngineError, Result};

use super::vec2::Vec2;

/// Circular body
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    // === Physics State ===
    /// Centre position
    pub pos: Vec2,
    /// Velocity (pixels per reference frame)
    pub velocity: Vec2,
    /// Fixed at construction
    radius: f32,

    // === Lifecycle ===
    /// Unique ID within the owning system (0 until added)
    pub id: u32,
    /// Popped bodies are skipped everywhere and dropped at the next step
    pub popped: bool,

    /// Fill colour (ABGR), opaque to the physics
    pub fill: u32,
}

impl Body {
    /// Create a body. Rejects a radius that is not positive and finite,
    /// since it would turn every later position into NaN.
    pub fn new(pos: Vec2, velocity: Vec2, radius: f32, fill: u32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(EngineError::InvalidRadius(radius));
        }
        Ok(Self {
            pos,
            velocity,
            radius,
            id: 0,
            popped: false,
            fill,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inverse-mass stand-in used by collision response
    #[inline]
    pub fn inv_weight(&self) -> f32 {
        1.0 / self.radius
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.popped
    }

    /// Point-in-circle test (boundary counts as inside)
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    pub fn pop(&mut self) {
        self.popped = true;
    }
}
