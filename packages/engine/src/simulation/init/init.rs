use log::debug;

use crate::core::random::seeded;
use crate::domain::config::PhysicsConfig;
use crate::domain::glyph::Glyph;
use crate::error::Result;
use crate::systems::body_system::BodySystem;
use crate::systems::particles::ParticleSystem;
use crate::systems::physics::Arena;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SimulationCore;

pub(super) fn create_simulation_core(
    width: f32,
    height: f32,
    seed: u64,
    config: PhysicsConfig,
) -> Result<SimulationCore> {
    let arena = Arena::new(width, height)?;
    let max_particles = config.max_particles as usize;
    debug!("simulation {}x{} seeded with {}", width, height, seed);

    Ok(SimulationCore {
        arena,
        config,
        bodies: BodySystem::new(),
        particles: ParticleSystem::new(),
        glyph: Glyph::default(),
        last_glyph_update_ms: None,
        rng: seeded(seed),
        frame: 0,

        render: RenderBuffers {
            bodies: Vec::with_capacity(3 * 10),
            body_fills: Vec::with_capacity(10),
            particles: Vec::with_capacity(3 * max_particles),
            particle_fills: Vec::with_capacity(max_particles),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
