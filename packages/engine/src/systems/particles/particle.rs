use crate::domain::config::PhysicsConfig;
use crate::domain::constants::DEGENERATE_DIST2;
use crate::error::{EngineError, Result};
use crate::systems::body::Vec2;
use crate::systems::physics::Arena;

/// A single piece of debris
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    /// Box footprint used for wall contact
    pub half_width: f32,
    pub half_height: f32,
    pub fill: u32,
    /// Milliseconds since spawn
    pub age_ms: f32,
}

impl Particle {
    /// Round particle: the footprint is a square around the disc.
    /// Fails on a radius that is not a positive finite number.
    pub fn new(pos: Vec2, velocity: Vec2, radius: f32, fill: u32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(EngineError::InvalidRadius(radius));
        }
        Ok(Self {
            pos,
            velocity,
            half_width: radius,
            half_height: radius,
            fill,
            age_ms: 0.0,
        })
    }

    /// Radius used for drawing and pair tests
    #[inline]
    pub fn radius(&self) -> f32 {
        self.half_width
    }

    /// Bounce this particle's velocity off another one along the line
    /// between their centres. Only this particle changes; the caller visits
    /// the reverse pair separately. No restitution: the impulse is twice
    /// the approach speed.
    ///
    /// Returns `false` if the particles are separating or share a centre.
    pub fn collide_with(&mut self, other_pos: Vec2, other_velocity: Vec2) -> bool {
        match bounce_delta(self.pos, self.velocity, other_pos, other_velocity) {
            Some(delta) => {
                self.velocity += delta;
                true
            }
            None => false,
        }
    }
}

/// Velocity change for the particle at `pos` bouncing off the other one
fn bounce_delta(pos: Vec2, velocity: Vec2, other_pos: Vec2, other_velocity: Vec2) -> Option<Vec2> {
    let normal = (other_pos - pos).try_normalize(DEGENERATE_DIST2)?;

    let impact_speed = (other_velocity - velocity).dot(normal);
    if impact_speed >= 0.0 {
        return None;
    }

    let impulse = 2.0 * impact_speed;
    Some(normal * impulse)
}

/// One integration step with friction bounce.
///
/// The velocity is corrected against the tentative position first, then
/// the position is recomputed from the corrected velocity, so a particle
/// never commits a step that crosses a wall it already bounced off.
pub fn integrate_particle(particle: &mut Particle, dt_ms: f32, arena: Arena, config: &PhysicsConfig) {
    let k = dt_ms / config.reference_interval_ms;
    let friction = config.particle_friction;

    particle.velocity.y += k * config.gravity;

    let next = particle.pos + particle.velocity * k;

    if next.x + particle.half_width > arena.width || next.x - particle.half_width < 0.0 {
        particle.velocity.x *= -friction;
        particle.velocity.y *= friction;
    }

    if next.y + particle.half_height > arena.height || next.y - particle.half_height < 0.0 {
        particle.velocity.x *= friction;
        particle.velocity.y *= -friction;
    }

    particle.pos += particle.velocity * k;
}

/// Call `f(i, j)` for every ordered pair, `i != j`, whose discs touch or
/// overlap
pub fn for_colliding_particles<F: FnMut(usize, usize)>(particles: &[Particle], mut f: F) {
    for (i, p1) in particles.iter().enumerate() {
        for (j, p2) in particles.iter().enumerate() {
            if i == j {
                continue;
            }
            let r_sum = p1.radius() + p2.radius();
            if p1.pos.distance_squared(p2.pos) <= r_sum * r_sum {
                f(i, j);
            }
        }
    }
}

/// Bounce every colliding ordered pair in one pass.
///
/// Impulses are taken from the state at the start of the pass, so both
/// sides of a pair see each other's old velocity and the outcome does not
/// depend on particle order. Returns the number of ordered pairs that
/// exchanged an impulse.
pub fn bounce_colliding_particles(particles: &mut [Particle]) -> u32 {
    let before = particles.to_vec();
    let mut bounced = 0;
    for_colliding_particles(&before, |i, j| {
        let (p, other) = (&before[i], &before[j]);
        if let Some(delta) = bounce_delta(p.pos, p.velocity, other.pos, other.velocity) {
            particles[i].velocity += delta;
            bounced += 1;
        }
    });
    bounced
}
