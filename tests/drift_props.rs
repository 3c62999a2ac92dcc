//! Property tests for wrap-around and spawn placement

use asteroid_drift::ScreenGeometry;
use asteroid_drift::sim::{AsteroidField, BodyId, MovingBody, in_exclusion_zone, spawn_point, wrap_body};
use asteroid_drift::tuning::{SpawnTuning, Tuning, WrapTuning};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn exit_right_reappears_left(
        w in 100.0f32..3000.0,
        h in 100.0f32..3000.0,
        size in 5.0f32..120.0,
        y_frac in 0.0f32..1.0,
    ) {
        let tuning = WrapTuning::default();
        let y = h * y_frac;
        let mut body = MovingBody::new(BodyId(1), Vec2::new(w + size + 1.0, y), Vec2::X, Vec2::splat(size));
        prop_assert!(wrap_body(&mut body, ScreenGeometry::new(w, h), &tuning));
        prop_assert_eq!(body.position.x, -size + tuning.margin);
        prop_assert_eq!(body.position.y, y);
    }

    #[test]
    fn exit_left_reappears_right(
        w in 100.0f32..3000.0,
        h in 100.0f32..3000.0,
        size in 5.0f32..120.0,
        overshoot in 0.0f32..50.0,
    ) {
        let tuning = WrapTuning::default();
        let x = -size - tuning.margin - overshoot;
        let mut body = MovingBody::new(BodyId(1), Vec2::new(x, h / 2.0), -Vec2::X, Vec2::splat(size));
        prop_assert!(wrap_body(&mut body, ScreenGeometry::new(w, h), &tuning));
        prop_assert_eq!(body.position.x, w + size - tuning.margin);
        prop_assert_eq!(body.position.y, h / 2.0);
    }

    #[test]
    fn visible_bodies_are_left_alone(
        w in 100.0f32..3000.0,
        h in 100.0f32..3000.0,
        size in 5.0f32..120.0,
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
    ) {
        let tuning = WrapTuning::default();
        let start = Vec2::new(w * fx, h * fy);
        let mut body = MovingBody::new(BodyId(1), start, Vec2::Y, Vec2::splat(size));
        prop_assert!(!wrap_body(&mut body, ScreenGeometry::new(w, h), &tuning));
        prop_assert_eq!(body.position, start);
    }

    #[test]
    fn spawn_rarely_lands_near_reference(
        seed in any::<u64>(),
        w in 320.0f32..2800.0,
        h in 320.0f32..2800.0,
        fx in 0.0f32..1.0,
        fy in 0.0f32..1.0,
    ) {
        let tuning = SpawnTuning::default();
        let screen = ScreenGeometry::new(w, h);
        let reference = Vec2::new(w * fx, h * fy);
        let mut rng = Pcg32::seed_from_u64(seed);

        let inside = (0..1000)
            .map(|_| spawn_point(&mut rng, reference, screen, &tuning).point)
            .filter(|p| in_exclusion_zone(*p, reference, tuning.exclusion_half_extent))
            .count();
        // Worst case (320x320) a candidate lands inside with p ~ 0.23, so six in a row ~ 1.6e-4
        prop_assert!(inside <= 10, "{} of 1000 inside", inside);
    }
}

#[test]
fn field_drifts_and_wraps_after_resize() {
    let tuning = Tuning::default();
    let portrait = ScreenGeometry::new(390.0, 844.0);
    let landscape = ScreenGeometry::new(844.0, 390.0);

    let mut field = AsteroidField::new(31337);
    field.populate(10, portrait.half_extents(), portrait, &tuning);
    for _ in 0..300 {
        field.tick(1.0 / 60.0, portrait, &tuning);
    }

    // Rotation: bodies now outside the shorter frame wrap on the next tick
    field.tick(1.0 / 60.0, landscape, &tuning);
    for body in field.bodies() {
        assert!(body.position.y < landscape.height + body.size.y);
        assert!(body.motion.is_some());
    }
}
