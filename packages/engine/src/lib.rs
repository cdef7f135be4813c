//! Glyphball Engine - circle physics for the Glyphball canvas toy
//!
//! Architecture:
//! - core/          - RNG helpers
//! - domain/        - Config, constants and the glyph model
//! - systems/       - Bodies, collision physics and debris
//! - simulation/    - Frame driver and the wasm `World` facade

pub mod core;
pub mod domain;
pub mod error;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool for the `parallel` feature in the browser
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, then `log` output to the console
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // Already set when the host calls init twice
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Glyphball engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::PhysicsConfig;
pub use domain::glyph::Glyph;
pub use error::{EngineError, Result};
pub use simulation::{PerfStats, SimulationCore, World};
pub use systems::body::{Body, Vec2};
pub use systems::particles::{integrate_particle, spawn_explosion, Particle};
pub use systems::physics::{integrate_and_bound, resolve_all_collisions, Arena};
