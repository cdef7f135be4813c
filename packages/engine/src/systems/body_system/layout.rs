use crate::domain::constants::SPAWN_RADIUS_GAP;
use crate::systems::physics::Arena;

/// Radius for `count` equal bodies: as wide as an even horizontal share of
/// the arena allows, capped at a quarter of the width or a third of the
/// height, minus a small gap. May come out non-positive for tiny arenas.
pub fn layout_radius(count: u32, arena: Arena) -> f32 {
    let share = arena.width / count.max(1) as f32;
    let max_size = (arena.width / 4.0).min(arena.height / 3.0);
    max_size.min(share / 2.0) - SPAWN_RADIUS_GAP
}
