// Host-side tests for the cursor-follower easing.

use glam::Vec2;
use site_core::CursorFollower;

#[test]
fn converges_toward_a_fixed_target() {
    let mut dot = CursorFollower::default();
    let target = Vec2::new(320.0, -140.0);

    // 60 steps keeps the remaining distance well above f32 resolution, so
    // the decrease is strict on every step.
    let mut prev = dot.position().distance(target);
    for _ in 0..60 {
        dot.step(target);
        let dist = dot.position().distance(target);
        assert!(dist < prev, "distance grew: {dist} > {prev}");
        prev = dist;
    }
    assert!(prev < 1.0);
}

#[test]
fn never_overshoots_the_target() {
    let mut dot = CursorFollower::default();
    let target = Vec2::new(100.0, 60.0);

    for _ in 0..500 {
        dot.step(target);
        // Easing by a fraction < 1 keeps the dot on the near side.
        assert!(dot.position().x <= target.x + 1e-4);
        assert!(dot.position().y <= target.y + 1e-4);
    }
}
