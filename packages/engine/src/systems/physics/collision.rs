//! Circle-circle detection, impulse response and positional correction
//!
//! Radius stands in for mass: impulses and corrections are divided by each
//! body's radius rather than by an area-derived mass.

use crate::domain::constants::DEGENERATE_DIST2;
use crate::systems::body::{Body, Vec2};

use super::types::Contact;

/// Overlap test. Symmetric in `a` and `b`.
#[inline]
pub fn detect(a: &Body, b: &Body) -> Contact {
    let r_sum = a.radius() + b.radius();
    let dist2 = a.pos.distance_squared(b.pos);
    Contact {
        colliding: r_sum * r_sum > dist2,
        depth: r_sum - dist2.sqrt(),
    }
}

/// Unit normal from `a` towards `b`; `None` when the centres coincide
#[inline]
pub fn contact_normal(a: &Body, b: &Body) -> Option<Vec2> {
    (b.pos - a.pos).try_normalize(DEGENERATE_DIST2)
}

/// Apply a restitution impulse along the contact normal.
///
/// Returns `false` without touching either body when the bodies are
/// already separating or their centres coincide.
pub fn resolve_collision(a: &mut Body, b: &mut Body, bounce: f32) -> bool {
    let Some(normal) = contact_normal(a, b) else {
        return false;
    };

    let relative_velocity = b.velocity - a.velocity;
    let velocity_along_normal = relative_velocity.dot(normal);
    if velocity_along_normal > 0.0 {
        return false;
    }

    let j = -(1.0 + bounce) * velocity_along_normal / (a.inv_weight() + b.inv_weight());
    let impulse = normal * j;

    a.velocity -= impulse * a.inv_weight();
    b.velocity += impulse * b.inv_weight();
    true
}

/// Push overlapping bodies apart by `percent` of the overlap beyond `slop`.
///
/// Partial correction every frame avoids the jitter of a full snap. Returns
/// `false` for coincident centres or when nothing needed to move.
pub fn correct_penetration(a: &mut Body, b: &mut Body, depth: f32, percent: f32, slop: f32) -> bool {
    let Some(normal) = contact_normal(a, b) else {
        return false;
    };

    let magnitude = (depth - slop).max(0.0) / (a.inv_weight() + b.inv_weight()) * percent;
    if magnitude <= 0.0 {
        return false;
    }
    let correction = normal * magnitude;

    a.pos -= correction * a.inv_weight();
    b.pos += correction * b.inv_weight();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::{BOUNCE, CORRECTION_PERCENT, CORRECTION_SLOP};

    fn body(x: f32, y: f32, vx: f32, vy: f32, r: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), r, 0).unwrap()
    }

    fn closing_speed(a: &Body, b: &Body) -> f32 {
        let n = contact_normal(a, b).unwrap();
        (b.velocity - a.velocity).dot(n)
    }

    #[test]
    fn detects_overlap_with_depth() {
        let a = body(0.0, 0.0, 5.0, 0.0, 10.0);
        let b = body(15.0, 0.0, -5.0, 0.0, 10.0);
        let contact = detect(&a, &b);
        assert!(contact.colliding);
        assert!((contact.depth - 5.0).abs() < 1e-6);
    }

    #[test]
    fn touching_circles_do_not_collide() {
        let a = body(0.0, 0.0, 0.0, 0.0, 10.0);
        let b = body(20.0, 0.0, 0.0, 0.0, 10.0);
        let contact = detect(&a, &b);
        assert!(!contact.colliding);
        assert_eq!(contact.depth, 0.0);
    }

    #[test]
    fn detection_is_symmetric() {
        let cases = [
            (body(1.5, -2.0, 0.0, 0.0, 3.0), body(4.0, 1.0, 0.0, 0.0, 2.5)),
            (body(100.0, 40.0, 0.0, 0.0, 7.0), body(90.0, 47.0, 0.0, 0.0, 9.0)),
            (body(0.0, 0.0, 0.0, 0.0, 1.0), body(50.0, 50.0, 0.0, 0.0, 1.0)),
        ];
        for (a, b) in cases.iter() {
            let ab = detect(a, b);
            let ba = detect(b, a);
            assert_eq!(ab.colliding, ba.colliding);
            assert_eq!(ab.depth, ba.depth);
        }
    }

    #[test]
    fn impulse_reduces_closing_speed_by_restitution() {
        let mut a = body(0.0, 0.0, 5.0, 0.0, 10.0);
        let mut b = body(15.0, 0.0, -5.0, 0.0, 10.0);
        let before = closing_speed(&a, &b);
        assert!(before < 0.0);

        assert!(resolve_collision(&mut a, &mut b, BOUNCE));

        let after = closing_speed(&a, &b);
        assert!(after.abs() <= BOUNCE * before.abs() + 1e-4);
        assert!((a.velocity.x + 3.5).abs() < 1e-4);
        assert!((b.velocity.x - 3.5).abs() < 1e-4);
    }

    #[test]
    fn impulse_weights_by_inverse_radius() {
        let mut small = body(0.0, 0.0, 4.0, 0.0, 5.0);
        let mut large = body(12.0, 0.0, 0.0, 0.0, 10.0);
        let before = closing_speed(&small, &large);
        resolve_collision(&mut small, &mut large, BOUNCE);
        let after = closing_speed(&small, &large);
        // Small body changes speed twice as much as the large one
        let dv_small = (small.velocity.x - 4.0).abs();
        let dv_large = large.velocity.x.abs();
        assert!((dv_small - 2.0 * dv_large).abs() < 1e-4);
        assert!((after + BOUNCE * before).abs() < 1e-4);
    }

    #[test]
    fn separating_pair_is_untouched() {
        let mut a = body(0.0, 0.0, -1.0, 0.0, 10.0);
        let mut b = body(15.0, 0.0, 1.0, 0.0, 10.0);
        assert!(!resolve_collision(&mut a, &mut b, BOUNCE));
        assert_eq!(a.velocity, Vec2::new(-1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn coincident_centres_are_skipped() {
        let mut a = body(10.0, 10.0, 1.0, 0.0, 5.0);
        let mut b = body(10.0, 10.0, -1.0, 0.0, 5.0);
        assert!(detect(&a, &b).colliding);
        assert!(!resolve_collision(&mut a, &mut b, BOUNCE));
        assert!(!correct_penetration(&mut a, &mut b, 10.0, CORRECTION_PERCENT, CORRECTION_SLOP));
        assert!(a.pos.x.is_finite() && a.velocity.x.is_finite());
        assert_eq!(a.pos, b.pos);
    }

    #[test]
    fn correction_never_increases_overlap() {
        let mut a = body(0.0, 0.0, 0.0, 0.0, 10.0);
        let mut b = body(15.0, 0.0, 0.0, 0.0, 10.0);
        let mut depth = detect(&a, &b).depth;
        for _ in 0..10 {
            correct_penetration(&mut a, &mut b, depth, CORRECTION_PERCENT, CORRECTION_SLOP);
            let next = detect(&a, &b).depth;
            assert!(next <= depth);
            depth = next;
        }
    }

    #[test]
    fn repeated_correction_separates_to_slop() {
        let mut a = body(0.0, 0.0, 5.0, 0.0, 10.0);
        let mut b = body(15.0, 0.0, -5.0, 0.0, 10.0);
        for _ in 0..80 {
            let contact = detect(&a, &b);
            correct_penetration(&mut a, &mut b, contact.depth, CORRECTION_PERCENT, CORRECTION_SLOP);
        }
        let distance = a.pos.distance_squared(b.pos).sqrt();
        assert!(distance >= 20.0 - CORRECTION_SLOP - 1e-4, "distance {distance}");
    }

    #[test]
    fn overlap_within_slop_is_left_alone() {
        let mut a = body(0.0, 0.0, 0.0, 0.0, 10.0);
        let mut b = body(19.995, 0.0, 0.0, 0.0, 10.0);
        let depth = detect(&a, &b).depth;
        assert!(!correct_penetration(&mut a, &mut b, depth, CORRECTION_PERCENT, CORRECTION_SLOP));
        assert_eq!(a.pos, Vec2::zero());
    }
}
