use log::trace;

use super::perf_timer::{timed, PerfTimer};
use super::SimulationCore;

pub(super) fn step(core: &mut SimulationCore, dt_ms: f32) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // A suspended tab reports one huge frame; NaN counts as no time
    let dt_ms = if dt_ms.is_finite() {
        dt_ms.clamp(0.0, core.config.max_frame_ms)
    } else {
        0.0
    };

    // Membership changes only between passes
    let removed = core.bodies.compact();
    if removed > 0 {
        trace!("compacted {} popped bodies", removed);
    }

    // === BODIES ===
    let arena = core.arena;
    timed(perf_on, &mut core.perf_stats.bodies_ms, || {
        core.bodies.integrate(dt_ms, arena, &core.config)
    });

    let collisions = timed(perf_on, &mut core.perf_stats.collisions_ms, || {
        core.bodies.collide(&core.config)
    });

    // === DEBRIS ===
    let debris = timed(perf_on, &mut core.perf_stats.particles_ms, || {
        core.particles.update(dt_ms, arena, &core.config)
    });
    if debris.expired > 0 {
        trace!("{} particles expired", debris.expired);
    }

    core.refresh_render();
    core.frame += 1;

    if let Some(t0) = step_start {
        let stats = &mut core.perf_stats;
        stats.step_ms = t0.elapsed_ms();
        stats.pairs_tested = collisions.pairs_tested;
        stats.contacts = collisions.contacts;
        stats.degenerate_pairs = collisions.degenerate;
        stats.body_count = core.bodies.active_count() as u32;
        stats.particle_count = core.particles.len() as u32;
        stats.particles_evicted = core.particles.evicted_total().min(u32::MAX as u64) as u32;
    }
}
