//! Physics System - circle dynamics
//!
//! Per frame: every body is integrated and clamped to the arena, then every
//! unordered pair of active bodies goes through detect -> correct -> resolve.
//! Pairs are visited by index so two bodies of the same slice can be
//! borrowed mutably at once.

mod collision;
mod integrator;
mod types;

pub use collision::{contact_normal, correct_penetration, detect, resolve_collision};
pub use integrator::{advance, integrate_and_bound, resolve_bounds};
pub use types::{Arena, CollisionStats, Contact};

use log::trace;

use crate::domain::config::PhysicsConfig;
use crate::systems::body::Body;

/// Two distinct mutable elements of one slice. Requires `i < j`.
#[inline]
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j, "pair_mut needs i < j (got {i}, {j})");
    let (left, right) = items.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

/// Run detection, penetration correction and impulse response over every
/// unordered pair of active bodies. Never resizes `bodies`.
pub fn resolve_all_collisions(bodies: &mut [Body], config: &PhysicsConfig) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            if !a.is_active() || !b.is_active() {
                continue;
            }
            stats.pairs_tested += 1;

            let contact = detect(a, b);
            if !contact.colliding {
                continue;
            }
            if contact_normal(a, b).is_none() {
                trace!("bodies {} and {} share a centre, skipping this frame", a.id, b.id);
                stats.degenerate += 1;
                continue;
            }
            stats.contacts += 1;

            correct_penetration(a, b, contact.depth, config.correction_percent, config.correction_slop);
            if resolve_collision(a, b, config.bounce) {
                stats.impulses += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::Vec2;

    fn body(x: f32, y: f32, vx: f32, vy: f32, r: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), r, 0).unwrap()
    }

    #[test]
    fn pair_mut_returns_both_elements() {
        let mut v = vec![1, 2, 3, 4];
        let (a, b) = pair_mut(&mut v, 1, 3);
        std::mem::swap(a, b);
        assert_eq!(v, vec![1, 4, 3, 2]);
    }

    #[test]
    fn resolves_each_unordered_pair_once() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![
            body(0.0, 0.0, 5.0, 0.0, 10.0),
            body(15.0, 0.0, -5.0, 0.0, 10.0),
            body(200.0, 200.0, 0.0, 0.0, 10.0),
        ];
        let stats = resolve_all_collisions(&mut bodies, &config);
        assert_eq!(stats.pairs_tested, 3);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.impulses, 1);
        assert_eq!(stats.degenerate, 0);

        // Closing speed was 10, now separating at 7
        let rel = bodies[1].velocity.x - bodies[0].velocity.x;
        assert!((rel - 7.0).abs() < 1e-4);
        // Separation grew
        assert!(bodies[1].pos.x - bodies[0].pos.x > 15.0);
        // Far body untouched
        assert_eq!(bodies[2].velocity, Vec2::zero());
    }

    #[test]
    fn popped_bodies_are_ignored() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![body(0.0, 0.0, 5.0, 0.0, 10.0), body(15.0, 0.0, -5.0, 0.0, 10.0)];
        bodies[1].pop();
        let stats = resolve_all_collisions(&mut bodies, &config);
        assert_eq!(stats.pairs_tested, 0);
        assert_eq!(bodies[0].velocity, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn coincident_pair_counts_as_degenerate() {
        let config = PhysicsConfig::default();
        let mut bodies = vec![body(30.0, 30.0, 1.0, 1.0, 10.0), body(30.0, 30.0, 0.0, 0.0, 10.0)];
        let stats = resolve_all_collisions(&mut bodies, &config);
        assert_eq!(stats.degenerate, 1);
        assert_eq!(stats.contacts, 0);
        assert_eq!(bodies[0].velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn empty_and_single_sets_are_noops() {
        let config = PhysicsConfig::default();
        assert_eq!(resolve_all_collisions(&mut [], &config), CollisionStats::default());
        let mut one = [body(1.0, 1.0, 0.0, 0.0, 1.0)];
        assert_eq!(resolve_all_collisions(&mut one, &config).pairs_tested, 0);
    }
}
