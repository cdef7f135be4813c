use crate::error::{EngineError, Result};

/// Rectangular simulation bounds, origin at the top-left, y pointing down
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(EngineError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Result of a circle-circle overlap test
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub colliding: bool,
    /// `radius_sum - centre_distance`; positive when overlapping
    pub depth: f32,
}

/// Counters from one pair pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: u32,
    /// Overlapping pairs with a usable normal
    pub contacts: u32,
    /// Contacts that were approaching and received an impulse
    pub impulses: u32,
    /// Overlapping pairs skipped because their centres coincide
    pub degenerate: u32,
}
