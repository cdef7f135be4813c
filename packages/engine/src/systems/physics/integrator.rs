//! Per-body kinematics and arena bounds
//!
//! Motion is normalized to the reference frame period: a body stepping
//! with `dt == reference_interval_ms` moves exactly `velocity` pixels.

use crate::domain::config::PhysicsConfig;
use crate::systems::body::Body;

use super::types::Arena;

/// Advance position by velocity, then velocity by gravity
#[inline]
pub fn advance(body: &mut Body, dt_ms: f32, gravity: f32, reference_interval_ms: f32) {
    let k = dt_ms / reference_interval_ms;
    body.pos += body.velocity * k;
    body.velocity.y += k * gravity;
}

/// Clamp a body inside the arena and reflect the velocity component that
/// hit a side. Walls keep `wall_restitution` of the speed, floor and
/// ceiling keep `floor_restitution`.
pub fn resolve_bounds(body: &mut Body, arena: Arena, config: &PhysicsConfig) {
    let r = body.radius();

    if body.pos.x > arena.width - r {
        body.pos.x = arena.width - r;
        body.velocity.x *= -config.wall_restitution;
    } else if body.pos.x < r {
        body.pos.x = r;
        body.velocity.x *= -config.wall_restitution;
    }

    if body.pos.y > arena.height - r {
        body.pos.y = arena.height - r;
        body.velocity.y *= -config.floor_restitution;
    } else if body.pos.y < r {
        // Biased off the ceiling so the next frame does not re-trigger
        body.pos.y = r + config.ceiling_bias;
        body.velocity.y *= -config.floor_restitution;
    }
}

/// One integration step for a single body. Popped bodies are left alone.
pub fn integrate_and_bound(body: &mut Body, dt_ms: f32, arena: Arena, config: &PhysicsConfig) {
    if !body.is_active() {
        return;
    }
    advance(body, dt_ms, config.gravity, config.reference_interval_ms);
    resolve_bounds(body, arena, config);
}
