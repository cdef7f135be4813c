use wasm_bindgen::prelude::*;

use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u64) -> Result<World, JsValue> {
        let core = SimulationCore::new(width, height, seed).map_err(to_js)?;
        Ok(Self { core })
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(to_js)
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn get_config_json(&self) -> String {
        self.core.get_config_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.arena().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.arena().height }

    #[wasm_bindgen(getter)]
    pub fn glyph(&self) -> String { self.core.glyph().to_string() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INPUT ===

    /// `KeyboardEvent.key` plus a timestamp in ms. Returns false when debounced.
    pub fn set_key(&mut self, key: String, now_ms: f64) -> bool {
        self.core.set_key(&key, now_ms)
    }

    pub fn set_random_glyph(&mut self, now_ms: f64) -> bool {
        self.core.set_random_glyph(now_ms)
    }

    /// Click at canvas coordinates
    pub fn pop_at(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        self.core.pop_at(x, y, now_ms)
    }

    /// Touch at canvas coordinates
    pub fn tap(&mut self, x: f32, y: f32, now_ms: f64) {
        self.core.tap(x, y, now_ms);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance by the host's frame delta in ms
    pub fn step(&mut self, dt_ms: f32) {
        self.core.step(dt_ms);
    }

    // === RENDER API ===
    // Pointers stay valid until the next call that mutates the world.

    /// `[x, y, r]` f32 triples, one per body
    pub fn bodies_ptr(&self) -> *const f32 {
        self.core.bodies_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.core.bodies_len()
    }

    pub fn body_fills_ptr(&self) -> *const u32 {
        self.core.body_fills_ptr()
    }

    pub fn body_fills_len(&self) -> usize {
        self.core.body_fills_len()
    }

    /// `[x, y, r]` f32 triples, one per particle
    pub fn particles_ptr(&self) -> *const f32 {
        self.core.particles_ptr()
    }

    pub fn particles_len(&self) -> usize {
        self.core.particles_len()
    }

    pub fn particle_fills_ptr(&self) -> *const u32 {
        self.core.particle_fills_ptr()
    }

    pub fn particle_fills_len(&self) -> usize {
        self.core.particle_fills_len()
    }
}

impl World {
    /// Native access to the wrapped simulation
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}
