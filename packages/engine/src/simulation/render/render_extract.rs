use super::SimulationCore;

/// Rewrite the flat render buffers from current state. Popped bodies are
/// left out so a pop disappears before the next step compacts it.
pub(super) fn refresh(core: &mut SimulationCore) {
    let out = &mut core.render;

    out.bodies.clear();
    out.body_fills.clear();
    for body in core.bodies.bodies().iter().filter(|b| b.is_active()) {
        out.bodies.extend_from_slice(&[body.pos.x, body.pos.y, body.radius()]);
        out.body_fills.push(body.fill);
    }

    out.particles.clear();
    out.particle_fills.clear();
    for p in core.particles.particles() {
        out.particles.extend_from_slice(&[p.pos.x, p.pos.y, p.radius()]);
        out.particle_fills.push(p.fill);
    }
}
