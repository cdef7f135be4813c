//! Runtime physics configuration
//!
//! Loaded from JSON the same way the host ships other content, e.g.
//!
//! ```json
//! { "gravity": 0.5, "maxParticles": 600, "particleLifetimeMs": null }
//! ```
//!
//! Missing keys fall back to [`PhysicsConfig::default`]. A `null` lifetime
//! keeps debris until the glyph changes (still bounded by `maxParticles`).

use serde::{Deserialize, Serialize};

use crate::domain::constants::*;
use crate::error::{EngineError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    pub reference_interval_ms: f32,
    pub gravity: f32,
    pub wall_restitution: f32,
    pub floor_restitution: f32,
    pub ceiling_bias: f32,
    /// Body-body restitution
    pub bounce: f32,
    pub correction_percent: f32,
    pub correction_slop: f32,
    pub particle_friction: f32,
    pub explosion_particles: u32,
    pub explosion_jitter_x: f32,
    pub explosion_lift_y: f32,
    pub particle_radius_min: f32,
    pub particle_radius_max: f32,
    pub max_particles: u32,
    pub particle_lifetime_ms: Option<f32>,
    /// Let debris bounce off each other (O(n²), off by default)
    pub particle_collisions: bool,
    pub debounce_ms: f32,
    pub max_frame_ms: f32,
    pub palette: Vec<u32>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            reference_interval_ms: REFERENCE_INTERVAL_MS,
            gravity: GRAVITY,
            wall_restitution: WALL_RESTITUTION,
            floor_restitution: FLOOR_RESTITUTION,
            ceiling_bias: CEILING_BIAS,
            bounce: BOUNCE,
            correction_percent: CORRECTION_PERCENT,
            correction_slop: CORRECTION_SLOP,
            particle_friction: PARTICLE_FRICTION,
            explosion_particles: EXPLOSION_PARTICLES,
            explosion_jitter_x: EXPLOSION_JITTER_X,
            explosion_lift_y: EXPLOSION_LIFT_Y,
            particle_radius_min: PARTICLE_RADIUS_MIN,
            particle_radius_max: PARTICLE_RADIUS_MAX,
            max_particles: MAX_PARTICLES,
            particle_lifetime_ms: Some(PARTICLE_LIFETIME_MS),
            particle_collisions: false,
            debounce_ms: DEBOUNCE_MS,
            max_frame_ms: MAX_FRAME_MS,
            palette: PALETTE.to_vec(),
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Lifetime that actually applies; zero or negative disables expiry
    pub fn lifetime_ms(&self) -> Option<f32> {
        self.particle_lifetime_ms.filter(|ms| *ms > 0.0)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.reference_interval_ms.is_finite() && self.reference_interval_ms > 0.0) {
            return Err(invalid("referenceIntervalMs must be positive"));
        }
        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }
        for (name, value) in [
            ("wallRestitution", self.wall_restitution),
            ("floorRestitution", self.floor_restitution),
            ("bounce", self.bounce),
            ("particleFriction", self.particle_friction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(&format!("{name} must be within 0..=1, got {value}")));
            }
        }
        if !(self.correction_percent > 0.0 && self.correction_percent <= 1.0) {
            return Err(invalid("correctionPercent must be within (0, 1]"));
        }
        if !(self.correction_slop.is_finite() && self.correction_slop >= 0.0) {
            return Err(invalid("correctionSlop must be non-negative"));
        }
        if !(self.ceiling_bias.is_finite() && self.ceiling_bias >= 0.0) {
            return Err(invalid("ceilingBias must be non-negative"));
        }
        for (name, value) in [
            ("explosionJitterX", self.explosion_jitter_x),
            ("explosionLiftY", self.explosion_lift_y),
        ] {
            if !(0.0..=MAX_EXPLOSION_KICK).contains(&value) {
                return Err(invalid(&format!("{name} must be within 0..={MAX_EXPLOSION_KICK}, got {value}")));
            }
        }
        let (r_min, r_max) = (self.particle_radius_min, self.particle_radius_max);
        if !(r_min > 0.0 && r_max >= r_min && r_max <= MAX_PARTICLE_RADIUS) {
            return Err(invalid("particle radius range must be positive, ordered and finite"));
        }
        if self.max_particles == 0 || self.max_particles > MAX_PARTICLES_CEILING {
            return Err(invalid(&format!("maxParticles must be within 1..={MAX_PARTICLES_CEILING}")));
        }
        if self.explosion_particles > self.max_particles {
            return Err(invalid("explosionParticles must not exceed maxParticles"));
        }
        if self.particle_lifetime_ms.is_some_and(f32::is_nan) {
            return Err(invalid("particleLifetimeMs must be a number or null"));
        }
        if !(self.debounce_ms.is_finite() && self.debounce_ms >= 0.0) {
            return Err(invalid("debounceMs must be non-negative"));
        }
        if !(self.max_frame_ms.is_finite() && self.max_frame_ms > 0.0) {
            return Err(invalid("maxFrameMs must be positive"));
        }
        if self.palette.is_empty() {
            return Err(invalid("palette must not be empty"));
        }
        Ok(())
    }
}

/// Largest sideways or upward debris kick
const MAX_EXPLOSION_KICK: f32 = 1.0e6;
const MAX_PARTICLE_RADIUS: f32 = 1.0e6;
/// Hard ceiling on live debris; also bounds a single explosion batch
const MAX_PARTICLES_CEILING: u32 = 1_000_000;

fn invalid(msg: &str) -> EngineError {
    EngineError::Config(msg.to_string())
}
