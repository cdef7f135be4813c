use super::*;
use crate::systems::body::Vec2;

const FRAME: f32 = 1000.0 / 60.0;

fn core() -> SimulationCore {
    SimulationCore::new(800.0, 600.0, 7).unwrap()
}

#[test]
fn starts_on_letter_with_nothing_in_play() {
    let core = core();
    assert_eq!(core.glyph(), Glyph::Letter('A'));
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.particle_count(), 0);
    assert_eq!(core.bodies_len(), 0);
    assert_eq!(core.frame(), 0);
}

#[test]
fn rejects_bad_arena() {
    assert!(SimulationCore::new(0.0, 600.0, 1).is_err());
    assert!(SimulationCore::new(800.0, f32::NAN, 1).is_err());
    let mut core = core();
    assert!(core.resize(-1.0, 10.0).is_err());
    assert_eq!(core.arena().width, 800.0);
}

#[test]
fn digit_key_spawns_that_many_bodies() {
    let mut core = core();
    assert!(core.set_key("5", 1000.0));
    assert_eq!(core.glyph(), Glyph::Digit(5));
    assert_eq!(core.body_count(), 5);
    assert_eq!(core.bodies_len(), 15);
    assert_eq!(core.body_fills_len(), 5);

    assert!(core.set_key("b", 2000.0));
    assert_eq!(core.glyph(), Glyph::Letter('B'));
    assert_eq!(core.body_count(), 0);
}

#[test]
fn zero_digit_has_no_bodies() {
    let mut core = core();
    core.set_key("0", 0.0);
    assert_eq!(core.glyph(), Glyph::Digit(0));
    assert_eq!(core.body_count(), 0);
    assert!(!core.pop_at(400.0, 300.0, 1.0));
}

#[test]
fn key_presses_are_debounced() {
    let mut core = core();
    assert!(core.set_key("3", 1000.0));
    assert!(!core.set_key("7", 1200.0));
    assert_eq!(core.glyph(), Glyph::Digit(3));
    assert!(!core.set_random_glyph(1399.0));
    assert!(core.set_key("7", 1400.0));
    assert_eq!(core.glyph(), Glyph::Digit(7));
}

#[test]
fn named_key_picks_a_random_glyph() {
    let mut core = core();
    assert!(core.set_key("Enter", 0.0));
    let glyph = core.glyph();
    assert!(crate::domain::constants::GLYPH_ALPHABET.contains(glyph.as_char()));
    assert_eq!(core.body_count(), glyph.body_count() as usize);
}

#[test]
fn pop_explodes_body_and_counts_down() {
    let mut core = core();
    core.set_key("4", 0.0);
    // Bodies may overlap; the first active one under the point is hit
    let point = core.bodies()[2].pos;
    let index = core.bodies.body_at_point(point).unwrap();
    let target = core.bodies()[index].clone();

    assert!(core.pop_at(point.x, point.y, 10.0));
    assert_eq!(core.glyph(), Glyph::Digit(3));
    assert_eq!(core.body_count(), 3);
    assert_eq!(core.particle_count(), 80);
    assert!(core.particles().iter().all(|p| p.fill == target.fill));
    // Popped body leaves the render buffer at once
    assert_eq!(core.bodies_len(), 9);

    // Compacted on the next step
    core.step(FRAME);
    assert_eq!(core.bodies().len(), 3);
    assert!(core.bodies().iter().all(|b| b.id != target.id));
}

#[test]
fn pop_on_empty_space_does_nothing() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(1), 0.0);
    let body = core.bodies()[0].clone();
    let miss = Vec2::new(
        if body.pos.x > 400.0 { 1.0 } else { 799.0 },
        if body.pos.y > 300.0 { 1.0 } else { 599.0 },
    );
    assert!(!core.pop_at(miss.x, miss.y, 1.0));
    assert_eq!(core.glyph(), Glyph::Digit(1));
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn letters_ignore_clicks() {
    let mut core = core();
    core.apply_glyph(Glyph::Letter('Q'), 0.0);
    assert!(!core.pop_at(400.0, 300.0, 1.0));
}

#[test]
fn tap_miss_changes_glyph_without_debounce() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(1), 0.0);
    let body = core.bodies()[0].clone();
    let miss_x = if body.pos.x > 400.0 { 1.0 } else { 799.0 };
    let miss_y = if body.pos.y > 300.0 { 1.0 } else { 599.0 };
    core.tap(miss_x, miss_y, 5.0);
    assert_eq!(core.last_glyph_update_ms, Some(5.0));
    assert_eq!(core.body_count(), core.glyph().body_count() as usize);
}

#[test]
fn tap_on_letter_respects_debounce() {
    let mut core = core();
    core.apply_glyph(Glyph::Letter('K'), 0.0);
    core.tap(10.0, 10.0, 100.0);
    assert_eq!(core.glyph(), Glyph::Letter('K'));
    core.tap(10.0, 10.0, 500.0);
    assert_eq!(core.last_glyph_update_ms, Some(500.0));
}

#[test]
fn popping_every_body_reaches_zero() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(3), 0.0);
    for t in 0..3 {
        let body = core.bodies().iter().find(|b| b.is_active()).cloned().unwrap();
        assert!(core.pop_at(body.pos.x, body.pos.y, t as f64));
    }
    assert_eq!(core.glyph(), Glyph::Digit(0));
    assert_eq!(core.particle_count(), 240);
    core.step(FRAME);
    assert!(core.bodies().is_empty());
}

#[test]
fn step_clamps_frame_delta() {
    let mut a = core();
    let mut b = core();
    a.apply_glyph(Glyph::Digit(2), 0.0);
    b.apply_glyph(Glyph::Digit(2), 0.0);

    a.step(5_000.0);
    b.step(100.0);
    assert_eq!(a.bodies(), b.bodies());

    a.step(-20.0);
    a.step(f32::NAN);
    assert_eq!(a.frame(), 3);
    assert!(a.bodies().iter().all(|b| b.pos.x.is_finite() && b.pos.y.is_finite()));
}

#[test]
fn bodies_stay_in_arena_over_many_frames() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(9), 0.0);
    for _ in 0..900 {
        core.step(FRAME);
    }
    for body in core.bodies() {
        let r = body.radius();
        assert!(body.pos.x >= r - 5.0 && body.pos.x <= 800.0 - r + 5.0);
        assert!(body.pos.y >= r - 5.0 && body.pos.y <= 600.0 - r + 5.0);
    }
}

#[test]
fn debris_expires_after_lifetime() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(1), 0.0);
    let body = core.bodies()[0].clone();
    core.pop_at(body.pos.x, body.pos.y, 0.0);
    assert_eq!(core.particle_count(), 80);

    // 6000 ms at 100 ms per frame
    for _ in 0..60 {
        core.step(100.0);
    }
    assert_eq!(core.particle_count(), 0);
    assert_eq!(core.particles_len(), 0);
}

#[test]
fn particle_cap_evicts_oldest() {
    let mut core = core();
    core.load_config_json(r#"{"maxParticles": 100}"#).unwrap();
    core.apply_glyph(Glyph::Digit(2), 0.0);
    let first = core.bodies()[0].clone();
    let second = core.bodies()[1].clone();
    core.pop_at(first.pos.x, first.pos.y, 0.0);
    core.pop_at(second.pos.x, second.pos.y, 0.0);
    assert_eq!(core.particle_count(), 100);
    assert_eq!(core.particles().last().map(|p| p.fill), Some(second.fill));
}

#[test]
fn render_buffers_match_state() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(3), 0.0);
    core.step(FRAME);
    let active: Vec<&Body> = core.bodies().iter().filter(|b| b.is_active()).collect();
    assert_eq!(core.bodies_len(), active.len() * 3);
    assert_eq!(core.render.bodies[0], active[0].pos.x);
    assert_eq!(core.render.bodies[1], active[0].pos.y);
    assert_eq!(core.render.bodies[2], active[0].radius());
    assert_eq!(core.render.body_fills[0], active[0].fill);
}

#[test]
fn clear_removes_everything() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(2), 0.0);
    let body = core.bodies()[0].clone();
    core.pop_at(body.pos.x, body.pos.y, 0.0);
    core.clear();
    assert_eq!(core.body_count(), 0);
    assert_eq!(core.particle_count(), 0);
    assert_eq!(core.particles_len(), 0);
}

#[test]
fn bad_config_keeps_previous() {
    let mut core = core();
    assert!(core.load_config_json(r#"{"bounce": 3.0}"#).is_err());
    assert!(core.load_config_json("not json").is_err());
    assert_eq!(core.config(), &PhysicsConfig::default());

    core.load_config_json(r#"{"gravity": 0.5}"#).unwrap();
    assert_eq!(core.config().gravity, 0.5);
    let round = PhysicsConfig::from_json(&core.get_config_json()).unwrap();
    assert_eq!(&round, core.config());
}

#[test]
fn oversized_debris_kick_is_rejected_and_pops_still_work() {
    let mut core = core();
    for json in [
        r#"{"explosionJitterX": 2e38}"#,
        r#"{"explosionLiftY": 2e38}"#,
        r#"{"particleRadiusMax": 1e39}"#,
        r#"{"explosionParticles": 4294967295}"#,
    ] {
        assert!(core.load_config_json(json).is_err(), "{json} should be rejected");
    }
    assert_eq!(core.config(), &PhysicsConfig::default());

    core.apply_glyph(Glyph::Digit(1), 0.0);
    let body = core.bodies()[0].clone();
    assert!(core.pop_at(body.pos.x, body.pos.y, 1.0));
    assert_eq!(core.particle_count(), 80);
}

#[test]
fn pop_without_debris_when_radius_range_is_unusable() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(2), 0.0);
    // Bypasses validation on purpose
    core.config.particle_radius_min = 0.0;
    core.config.particle_radius_max = 0.0;

    let body = core.bodies()[0].clone();
    assert!(core.pop_at(body.pos.x, body.pos.y, 1.0));
    assert_eq!(core.glyph(), Glyph::Digit(1));
    assert_eq!(core.body_count(), 1);
    assert_eq!(core.particle_count(), 0);
}

#[test]
fn perf_stats_only_when_enabled() {
    let mut core = core();
    core.apply_glyph(Glyph::Digit(4), 0.0);
    core.step(FRAME);
    assert_eq!(core.get_perf_stats().pairs_tested(), 0);

    core.enable_perf_metrics(true);
    core.step(FRAME);
    let stats = core.get_perf_stats();
    assert_eq!(stats.pairs_tested(), 6);
    assert_eq!(stats.body_count(), 4);
    assert!(stats.step_ms() >= 0.0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats().body_count(), 0);
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut core = core();
        core.set_key("6", 0.0);
        for _ in 0..120 {
            core.step(FRAME);
        }
        core.bodies().to_vec()
    };
    assert_eq!(run(), run());
}
