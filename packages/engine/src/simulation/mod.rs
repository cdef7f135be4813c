//! Simulation - frame driver for the glyph toy
//!
//! `SimulationCore` owns every piece of mutable state: the arena, the
//! active config, bodies, debris, the current glyph and the RNG. The wasm
//! `World` in `facade` only forwards to it.
//!
//! Per-frame work lives in `step`, host input in `commands`, config and
//! perf toggles in `settings`, flat render buffers in `render`.

use crate::core::random::EngineRng;
use crate::domain::config::PhysicsConfig;
use crate::domain::glyph::Glyph;
use crate::error::Result;
use crate::systems::body::Body;
use crate::systems::body_system::BodySystem;
use crate::systems::particles::{Particle, ParticleSystem};
use crate::systems::physics::Arena;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

/// Flat buffers the host reads through raw pointers after each step
pub(crate) struct RenderBuffers {
    /// `[x, y, r]` per active body
    bodies: Vec<f32>,
    body_fills: Vec<u32>,
    /// `[x, y, r]` per particle
    particles: Vec<f32>,
    particle_fills: Vec<u32>,
}

/// The simulation state
pub struct SimulationCore {
    arena: Arena,
    config: PhysicsConfig,
    bodies: BodySystem,
    particles: ParticleSystem,

    // Glyph state
    glyph: Glyph,
    last_glyph_update_ms: Option<f64>,

    // State
    rng: EngineRng,
    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation for an arena of the given size
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self> {
        init::create_simulation_core(width, height, seed, PhysicsConfig::default())
    }

    pub fn with_config(width: f32, height: f32, seed: u64, config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        init::create_simulation_core(width, height, seed, config)
    }

    pub fn arena(&self) -> Arena { self.arena }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    pub fn glyph(&self) -> Glyph { self.glyph }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bodies(&self) -> &[Body] { self.bodies.bodies() }

    pub fn particles(&self) -> &[Particle] { self.particles.particles() }

    /// Bodies still in play (popped ones are dropped at the next step)
    pub fn body_count(&self) -> usize { self.bodies.active_count() }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Change the arena size. Bodies are clamped back in on the next step.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        settings::resize(self, width, height)
    }

    /// Replace the config from JSON. Fields left out keep their defaults.
    pub fn load_config_json(&mut self, json: &str) -> Result<()> {
        settings::load_config_json(self, json)
    }

    pub fn get_config_json(&self) -> String {
        self.config.to_json()
    }

    /// Enable or disable per-step perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Keyboard input. Returns `false` when debounced.
    pub fn set_key(&mut self, key: &str, now_ms: f64) -> bool {
        commands::set_key(self, key, now_ms)
    }

    /// Switch to a random glyph. Returns `false` when debounced.
    pub fn set_random_glyph(&mut self, now_ms: f64) -> bool {
        commands::set_random_glyph(self, now_ms)
    }

    /// Show `glyph` immediately, ignoring the debounce
    pub fn apply_glyph(&mut self, glyph: Glyph, now_ms: f64) {
        commands::apply_glyph(self, glyph, now_ms);
    }

    /// Click: pop the body under the point. Returns whether one popped.
    pub fn pop_at(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        commands::pop_at(self, x, y, now_ms)
    }

    /// Touch: pop the body under the point, otherwise change glyph
    pub fn tap(&mut self, x: f32, y: f32, now_ms: f64) {
        commands::tap(self, x, y, now_ms);
    }

    /// Remove all bodies and debris
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Advance one frame of `dt_ms` milliseconds
    pub fn step(&mut self, dt_ms: f32) {
        step::step(self, dt_ms);
    }

    pub fn bodies_ptr(&self) -> *const f32 { self.render.bodies.as_ptr() }

    /// Length in f32 elements (3 per body)
    pub fn bodies_len(&self) -> usize { self.render.bodies.len() }

    pub fn body_fills_ptr(&self) -> *const u32 { self.render.body_fills.as_ptr() }

    pub fn body_fills_len(&self) -> usize { self.render.body_fills.len() }

    pub fn particles_ptr(&self) -> *const f32 { self.render.particles.as_ptr() }

    /// Length in f32 elements (3 per particle)
    pub fn particles_len(&self) -> usize { self.render.particles.len() }

    pub fn particle_fills_ptr(&self) -> *const u32 { self.render.particle_fills.as_ptr() }

    pub fn particle_fills_len(&self) -> usize { self.render.particle_fills.len() }

    fn refresh_render(&mut self) {
        render::refresh(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
