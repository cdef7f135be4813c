//! Sampling helpers over a seedable RNG
//!
//! All randomness in the engine flows through a `SmallRng` owned by the
//! simulation, seeded by the host, so a given seed replays identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub type EngineRng = SmallRng;

pub fn seeded(seed: u64) -> EngineRng {
    SmallRng::seed_from_u64(seed)
}

/// Uniform sample in `[lo, hi)`, or `lo` for an empty range
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Random element of a slice, `None` if empty
#[inline]
pub fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.gen_range(0..items.len())])
    }
}
