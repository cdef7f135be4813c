use log::debug;

use crate::domain::config::PhysicsConfig;
use crate::error::Result;
use crate::systems::physics::Arena;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn resize(core: &mut SimulationCore, width: f32, height: f32) -> Result<()> {
    core.arena = Arena::new(width, height)?;
    debug!("arena resized to {}x{}", width, height);
    Ok(())
}

/// Parse and validate before swapping, so a bad document leaves the old
/// config in place
pub(super) fn load_config_json(core: &mut SimulationCore, json: &str) -> Result<()> {
    let config = PhysicsConfig::from_json(json)?;
    let cap = config.max_particles as usize;
    core.config = config;

    // A lower cap applies to debris already in flight
    if core.particles.len() > cap {
        core.particles.add_batch(Vec::new(), cap);
    }
    debug!("physics config loaded");
    Ok(())
}
