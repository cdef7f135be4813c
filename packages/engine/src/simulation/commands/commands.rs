use log::{debug, warn};

use crate::domain::glyph::Glyph;
use crate::systems::body::Vec2;
use crate::systems::particles::spawn_explosion;

use super::SimulationCore;

fn debounced(core: &SimulationCore, now_ms: f64) -> bool {
    match core.last_glyph_update_ms {
        Some(last) => now_ms - last < core.config.debounce_ms as f64,
        None => false,
    }
}

pub(super) fn set_key(core: &mut SimulationCore, key: &str, now_ms: f64) -> bool {
    if debounced(core, now_ms) {
        return false;
    }
    let glyph = Glyph::from_key(key).unwrap_or_else(|| Glyph::random(&mut core.rng));
    apply_glyph(core, glyph, now_ms);
    true
}

pub(super) fn set_random_glyph(core: &mut SimulationCore, now_ms: f64) -> bool {
    if debounced(core, now_ms) {
        return false;
    }
    let glyph = Glyph::random(&mut core.rng);
    apply_glyph(core, glyph, now_ms);
    true
}

/// Show `glyph`: a digit brings in that many fresh bodies, a letter none.
/// Debris from the previous glyph is dropped either way.
pub(super) fn apply_glyph(core: &mut SimulationCore, glyph: Glyph, now_ms: f64) {
    core.glyph = glyph;
    core.last_glyph_update_ms = Some(now_ms);
    core.particles.clear();

    let count = glyph.body_count() as i32;
    let spawned = core
        .bodies
        .spawn_for_digit(count, core.arena, &core.config.palette, &mut core.rng);
    match spawned {
        Ok(n) => debug!("glyph {} with {} bodies", glyph, n),
        Err(err) => {
            warn!("glyph {}: no bodies spawned: {}", glyph, err);
            core.bodies.clear();
        }
    }

    core.refresh_render();
}

pub(super) fn pop_at(core: &mut SimulationCore, x: f32, y: f32, now_ms: f64) -> bool {
    if !core.glyph.is_positive_digit() {
        return false;
    }
    let Some(body) = core.bodies.pop_at(Vec2::new(x, y)) else {
        return false;
    };

    let debris = spawn_explosion(
        body.pos,
        body.velocity,
        body.radius(),
        body.fill,
        &mut core.rng,
        &core.config,
    );
    match debris {
        Ok(batch) => {
            core.particles.add_batch(batch, core.config.max_particles as usize);
        }
        Err(err) => warn!("body {} popped without debris: {}", body.id, err),
    }

    core.glyph = core.glyph.decremented();
    core.last_glyph_update_ms = Some(now_ms);
    debug!("popped body {}, {} left", body.id, core.glyph);

    core.refresh_render();
    true
}

pub(super) fn tap(core: &mut SimulationCore, x: f32, y: f32, now_ms: f64) {
    if core.glyph.is_positive_digit() {
        if !pop_at(core, x, y, now_ms) {
            let glyph = Glyph::random(&mut core.rng);
            apply_glyph(core, glyph, now_ms);
        }
    } else {
        set_random_glyph(core, now_ms);
    }
}

pub(super) fn clear(core: &mut SimulationCore) {
    core.bodies.clear();
    core.particles.clear();
    core.refresh_render();
}
