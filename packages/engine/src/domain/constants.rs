//! Physics and toy constants
//!
//! These are the defaults behind [`PhysicsConfig`](super::config::PhysicsConfig).
//! Velocities are in CSS pixels per reference frame, times in milliseconds.

/// Nominal frame period all motion is normalized to (60 Hz)
pub const REFERENCE_INTERVAL_MS: f32 = 1000.0 / 60.0;

/// Downward acceleration per reference frame
pub const GRAVITY: f32 = 0.3;

/// Side walls reflect fully
pub const WALL_RESTITUTION: f32 = 1.0;
/// Floor and ceiling keep 70% of vertical speed
pub const FLOOR_RESTITUTION: f32 = 0.7;
/// Extra offset applied when a body is clamped to the ceiling so it does not stick
pub const CEILING_BIAS: f32 = 1.0;

/// Restitution for body-body impulses
pub const BOUNCE: f32 = 0.7;
pub const CORRECTION_PERCENT: f32 = 0.2;
pub const CORRECTION_SLOP: f32 = 0.01;

/// Squared centre distance below which a pair has no usable normal
pub const DEGENERATE_DIST2: f32 = 1e-8;

// === Particles ===
pub const PARTICLE_FRICTION: f32 = 0.6;
pub const EXPLOSION_PARTICLES: u32 = 80;
pub const EXPLOSION_JITTER_X: f32 = 3.0;
pub const EXPLOSION_LIFT_Y: f32 = 8.0;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 4.0;
pub const MAX_PARTICLES: u32 = 1200;
pub const PARTICLE_LIFETIME_MS: f32 = 6000.0;

// === Body spawning ===
/// Horizontal launch speed range is `[-SPAWN_SPEED_X, SPAWN_SPEED_X)`
pub const SPAWN_SPEED_X: f32 = 6.0;
pub const SPAWN_SPEED_Y_MIN: f32 = -6.0;
pub const SPAWN_SPEED_Y_MAX: f32 = -2.0;
/// Bodies spawn away from the arena edges by this fraction of each side
pub const SPAWN_MARGIN: f32 = 1.0 / 8.0;
/// Gap subtracted from the layout radius so neighbours do not start touching
pub const SPAWN_RADIUS_GAP: f32 = 2.0;

// === Input ===
pub const DEBOUNCE_MS: f32 = 400.0;
pub const MAX_FRAME_MS: f32 = 100.0;
pub const GLYPH_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default fills in ABGR (little-endian RGBA bytes): pink, red, yellow, turquoise, white
pub const PALETTE: [u32; 5] = [0xFFAE9FE7, 0xFF344BDA, 0xFF47C3F5, 0xFFF3CB8B, 0xFFF8FBFB];
