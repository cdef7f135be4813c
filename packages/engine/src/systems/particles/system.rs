use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::config::PhysicsConfig;
use crate::systems::physics::Arena;

use super::particle::{bounce_colliding_particles, integrate_particle, Particle};

/// Counters from one particle update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticleStepStats {
    pub bounced: u32,
    pub expired: u32,
}

/// Owns all live debris. Growth is bounded by `max_particles` (oldest
/// evicted first) and by the configured lifetime.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    evicted_total: u64,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            evicted_total: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles dropped by the cap since creation
    pub fn evicted_total(&self) -> u64 {
        self.evicted_total
    }

    /// Append a batch, evicting the oldest particles past `max_particles`.
    /// Returns how many were evicted.
    pub fn add_batch(&mut self, batch: Vec<Particle>, max_particles: usize) -> usize {
        self.particles.extend(batch);
        let excess = self.particles.len().saturating_sub(max_particles);
        if excess > 0 {
            self.particles.drain(..excess);
            self.evicted_total += excess as u64;
            debug!("particle cap {} reached, evicted {} oldest", max_particles, excess);
        }
        excess
    }

    /// Integrate, age and expire all particles
    pub fn update(&mut self, dt_ms: f32, arena: Arena, config: &PhysicsConfig) -> ParticleStepStats {
        let mut stats = ParticleStepStats::default();
        if self.particles.is_empty() {
            return stats;
        }

        if config.particle_collisions {
            stats.bounced = bounce_colliding_particles(&mut self.particles);
        }

        #[cfg(feature = "parallel")]
        self.particles.par_iter_mut().for_each(|p| {
            integrate_particle(p, dt_ms, arena, config);
            p.age_ms += dt_ms;
        });

        #[cfg(not(feature = "parallel"))]
        for p in self.particles.iter_mut() {
            integrate_particle(p, dt_ms, arena, config);
            p.age_ms += dt_ms;
        }

        if let Some(lifetime) = config.lifetime_ms() {
            let before = self.particles.len();
            self.particles.retain(|p| p.age_ms < lifetime);
            stats.expired = (before - self.particles.len()) as u32;
        }

        stats
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
