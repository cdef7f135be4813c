use std::f32::consts::TAU;

use rand::Rng;

use crate::core::random::uniform;
use crate::domain::config::PhysicsConfig;
use crate::error::Result;
use crate::systems::body::Vec2;

use super::particle::Particle;

/// Shatter a popped body into `config.explosion_particles` pieces of debris.
///
/// Pieces start inside the body's disc and inherit its velocity and fill,
/// plus a random kick: `±explosion_jitter_x` sideways and up to
/// `explosion_lift_y` upwards.
///
/// Fails with no debris if the config's radius range yields a radius that
/// is not positive; [`PhysicsConfig::validate`] rules that out.
pub fn spawn_explosion<R: Rng + ?Sized>(
    origin_position: Vec2,
    origin_velocity: Vec2,
    origin_radius: f32,
    origin_fill: u32,
    rng: &mut R,
    config: &PhysicsConfig,
) -> Result<Vec<Particle>> {
    let count = config.explosion_particles as usize;
    let mut batch = Vec::with_capacity(count);

    for _ in 0..count {
        let angle = uniform(rng, 0.0, TAU);
        let distance = uniform(rng, 0.0, origin_radius);
        let (sin, cos) = angle.sin_cos();
        let pos = origin_position + Vec2::new(cos, sin) * distance;

        let jitter = Vec2::new(
            uniform(rng, -config.explosion_jitter_x, config.explosion_jitter_x),
            uniform(rng, -config.explosion_lift_y, 0.0),
        );
        let radius = uniform(rng, config.particle_radius_min, config.particle_radius_max);

        batch.push(Particle::new(pos, origin_velocity + jitter, radius, origin_fill)?);
    }

    Ok(batch)
}
