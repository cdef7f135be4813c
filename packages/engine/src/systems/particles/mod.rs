//! Particles - free-flying explosion debris
//!
//! Debris never touches the main bodies. Each particle integrates on its own
//! with a friction bounce off the arena walls. Pairwise bouncing exists but
//! is only used when `particleCollisions` is enabled.

mod explosion;
mod particle;
mod system;

pub use explosion::spawn_explosion;
pub use particle::{bounce_colliding_particles, for_colliding_particles, integrate_particle, Particle};
pub use system::{ParticleStepStats, ParticleSystem};
