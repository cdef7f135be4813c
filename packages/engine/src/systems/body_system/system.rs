use log::debug;
use rand::Rng;

use crate::core::random::{pick, uniform};
use crate::domain::config::PhysicsConfig;
use crate::domain::constants::{SPAWN_MARGIN, SPAWN_SPEED_X, SPAWN_SPEED_Y_MAX, SPAWN_SPEED_Y_MIN};
use crate::error::Result;
use crate::systems::body::{Body, Vec2};
use crate::systems::physics::{integrate_and_bound, resolve_all_collisions, Arena, CollisionStats};

use super::layout::layout_radius;

/// Fill used when the palette is empty
const FALLBACK_FILL: u32 = 0xFFFFFFFF;

/// Manages all bodies in the simulation
pub struct BodySystem {
    bodies: Vec<Body>,
    next_id: u32,
}

impl BodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a body, assigning it a fresh ID. Returns the ID.
    pub fn add_body(&mut self, mut body: Body) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Replace the whole set with `count` freshly launched bodies.
    ///
    /// A count of zero or less leaves the set empty. Fails, leaving the set
    /// empty, when the arena is too small to fit a positive radius.
    pub fn spawn_for_digit<R: Rng + ?Sized>(
        &mut self,
        count: i32,
        arena: Arena,
        palette: &[u32],
        rng: &mut R,
    ) -> Result<usize> {
        self.clear();
        if count <= 0 {
            return Ok(0);
        }

        let count = count as u32;
        let radius = layout_radius(count, arena);
        let (mx, my) = (arena.width * SPAWN_MARGIN, arena.height * SPAWN_MARGIN);

        let mut spawned = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let pos = Vec2::new(
                uniform(rng, mx, arena.width - mx),
                uniform(rng, my, arena.height - my),
            );
            let velocity = Vec2::new(
                uniform(rng, -SPAWN_SPEED_X, SPAWN_SPEED_X),
                uniform(rng, SPAWN_SPEED_Y_MIN, SPAWN_SPEED_Y_MAX),
            );
            let fill = pick(rng, palette).unwrap_or(FALLBACK_FILL);
            spawned.push(Body::new(pos, velocity, radius, fill)?);
        }

        for body in spawned {
            self.add_body(body);
        }
        debug!("spawned {} bodies of radius {:.1}", count, radius);
        Ok(count as usize)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Bodies not yet popped
    pub fn active_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_active()).count()
    }

    /// Index of the first active body containing `point`
    pub fn body_at_point(&self, point: Vec2) -> Option<usize> {
        self.bodies
            .iter()
            .position(|b| b.is_active() && b.contains_point(point))
    }

    /// Mark a body popped and hand back its final state for debris.
    /// `None` for an out-of-range or already popped index.
    pub fn pop(&mut self, index: usize) -> Option<Body> {
        let body = self.bodies.get_mut(index)?;
        if !body.is_active() {
            return None;
        }
        body.pop();
        Some(body.clone())
    }

    pub fn pop_at(&mut self, point: Vec2) -> Option<Body> {
        let index = self.body_at_point(point)?;
        self.pop(index)
    }

    /// Drop popped bodies. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.is_active());
        before - self.bodies.len()
    }

    pub fn integrate(&mut self, dt_ms: f32, arena: Arena, config: &PhysicsConfig) {
        for body in self.bodies.iter_mut() {
            integrate_and_bound(body, dt_ms, arena, config);
        }
    }

    pub fn collide(&mut self, config: &PhysicsConfig) -> CollisionStats {
        resolve_all_collisions(&mut self.bodies, config)
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}
