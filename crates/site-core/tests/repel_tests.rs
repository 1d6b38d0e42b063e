// Host-side tests for the spring-damper repulsion simulation: equilibrium,
// force direction, source construction, and the boundary clamp.

use glam::Vec2;
use site_core::constants::{BOUNDS_INSET_PX, SOURCE_COUNT_MAX};
use site_core::{repulsion_sources, PointerState, RepelParams, RepelSim};

const CONTAINER: f32 = 240.0;

fn make_sim() -> RepelSim {
    let mut sim = RepelSim::new();
    sim.set_bounds(CONTAINER, CONTAINER);
    sim
}

/// Container-relative (top-left origin) to simulation (center origin).
fn to_center(p: Vec2) -> Vec2 {
    p - Vec2::splat(CONTAINER / 2.0)
}

#[test]
fn undisturbed_glyph_stays_at_center() {
    let mut sim = make_sim();
    let pointer = PointerState::default();
    let params = RepelParams::default();

    for _ in 0..100 {
        sim.step(&pointer, &params);
    }
    assert_eq!(sim.position(), Vec2::ZERO);
    assert_eq!(sim.velocity(), Vec2::ZERO);
}

#[test]
fn one_tick_pushes_away_from_the_pointer() {
    // Pointer enters at container-relative (50, 50) with the default
    // radius 150 and strength 12.
    let mut sim = make_sim();
    let mut pointer = PointerState::default();
    pointer.move_to(to_center(Vec2::new(50.0, 50.0)));
    let params = RepelParams::default();

    sim.step(&pointer, &params);

    let away = sim.position() - pointer.pos;
    assert!(sim.velocity().length() > 0.0);
    assert!(
        sim.velocity().dot(away.normalize()) > 0.0,
        "velocity {:?} does not point away from {:?}",
        sim.velocity(),
        pointer.pos
    );
}

#[test]
fn distance_to_pointer_does_not_shrink_inside_the_radius() {
    let mut sim = make_sim();
    let mut pointer = PointerState::default();
    pointer.move_to(Vec2::new(-60.0, 25.0));
    let params = RepelParams {
        spread: 0.0, // single point source
        ..RepelParams::default()
    };

    let before = pointer.pos.distance(sim.position());
    assert!(before < params.radius);
    sim.step(&pointer, &params);
    let after = pointer.pos.distance(sim.position());
    assert!(after >= before, "glyph moved toward the pointer");
}

#[test]
fn spread_zero_yields_one_source_at_the_pointer() {
    let params = RepelParams {
        spread: 0.0,
        ..RepelParams::default()
    };
    let pointer = Vec2::new(40.0, -10.0);
    let sources = repulsion_sources(pointer, Vec2::ZERO, &params);

    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].pos, pointer);
    assert_eq!(sources[0].strength, params.strength);
}

#[test]
fn spread_one_yields_fifteen_scaled_sources() {
    let params = RepelParams {
        spread: 1.0,
        ..RepelParams::default()
    };
    let sources = repulsion_sources(Vec2::new(30.0, 30.0), Vec2::ZERO, &params);

    assert_eq!(sources.len(), SOURCE_COUNT_MAX);
    let expected = params.strength / (SOURCE_COUNT_MAX as f32).sqrt();
    for src in &sources {
        assert!((src.strength - expected).abs() < 1e-6);
    }
}

#[test]
fn wall_sources_straddle_the_pointer_perpendicular_to_the_glyph() {
    let params = RepelParams {
        spread: 1.0,
        ..RepelParams::default()
    };
    let pointer = Vec2::new(0.0, 80.0);
    let sources = repulsion_sources(pointer, Vec2::ZERO, &params);

    // Pointer→glyph direction is -Y, so sources spread along X, centered
    // on the pointer.
    let mean = sources.iter().map(|s| s.pos).sum::<Vec2>() / sources.len() as f32;
    assert!((mean - pointer).length() < 1e-4);
    for src in &sources {
        assert!((src.pos.y - pointer.y).abs() < 1e-4);
    }
}

#[test]
fn position_never_escapes_the_clamp_rectangle() {
    let mut sim = make_sim();
    let mut pointer = PointerState::default();
    let params = RepelParams {
        strength: 30.0, // worst-case slider value
        ..RepelParams::default()
    };
    let limit = CONTAINER / 2.0 - BOUNDS_INSET_PX;

    // Adversarial chase: the pointer sits just inside the glyph each
    // frame, always pushing it outward.
    for i in 0..1000 {
        let behind = sim.position() * 0.9
            + Vec2::new(((i % 7) as f32 - 3.0) * 2.0, ((i % 5) as f32 - 2.0) * 2.0);
        pointer.move_to(behind);
        sim.step(&pointer, &params);

        assert!(
            sim.position().x.abs() <= limit + 1e-3 && sim.position().y.abs() <= limit + 1e-3,
            "escaped to {:?} on step {i}",
            sim.position()
        );
    }
}

#[test]
fn retuning_parameters_keeps_simulation_state() {
    let mut sim = make_sim();
    let mut pointer = PointerState::default();
    pointer.move_to(Vec2::new(-40.0, 0.0));
    let mut params = RepelParams::default();

    for _ in 0..5 {
        sim.step(&pointer, &params);
    }
    let pos = sim.position();
    assert!(pos.length() > 0.0);

    // Slider moves mutate params in place; the next step continues from
    // the same state.
    params.strength = 2.0;
    params.spread = 1.0;
    sim.step(&pointer, &params);
    assert!(sim.position().distance(pos) < 60.0, "state was reset");
}
