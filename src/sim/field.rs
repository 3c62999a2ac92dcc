//! Background asteroid field owned by a scene
//!
//! Populated on scene entry, ticked once per frame, torn down on exit.
//! Torn-down bodies are pooled and reused by the next population.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{BodyId, MovingBody};
use super::spawn::spawn_point;
use super::wrap::apply_wrap;
use crate::geometry::ScreenGeometry;
use crate::tuning::Tuning;

/// Drifting decorative asteroids
#[derive(Debug, Clone)]
pub struct AsteroidField {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Live bodies, sorted by id
    bodies: Vec<MovingBody>,
    /// Torn-down bodies awaiting reuse
    pool: Vec<MovingBody>,
    next_id: u32,
}

impl AsteroidField {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bodies: Vec::new(),
            pool: Vec::new(),
            next_id: 1,
        }
    }

    fn next_body_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn `count` bodies away from `reference` and start them drifting.
    /// Returns the ids of the new bodies.
    pub fn populate(
        &mut self,
        count: usize,
        reference: Vec2,
        screen: ScreenGeometry,
        tuning: &Tuning,
    ) -> Vec<BodyId> {
        let mut ids = Vec::with_capacity(count);
        let mut fail_open = 0;

        for _ in 0..count {
            let outcome = spawn_point(&mut self.rng, reference, screen, &tuning.spawn);
            if !outcome.accepted {
                fail_open += 1;
            }

            let angle = self.rng.random_range(0.0..TAU);
            let heading = Vec2::new(angle.cos(), angle.sin());
            let (min_size, max_size) = ordered(tuning.spawn.min_body_size, tuning.spawn.max_body_size);
            let extent = self.rng.random_range(min_size..=max_size);
            let size = Vec2::splat(extent);

            let id = self.next_body_id();
            let mut body = match self.pool.pop() {
                Some(mut body) => {
                    body.id = id;
                    body.position = outcome.point;
                    body.heading = heading;
                    body.size = size;
                    body.motion = None;
                    body
                }
                None => MovingBody::new(id, outcome.point, heading, size),
            };
            body.drift(tuning.wrap.drift_distance, tuning.wrap.move_duration);

            self.bodies.push(body);
            ids.push(id);
        }

        if fail_open > 0 {
            log::debug!("{fail_open} of {count} bodies spawned inside the exclusion zone");
        }
        log::info!("Asteroid field populated: {} bodies", self.bodies.len());
        ids
    }

    /// Advance motion, then wrap anything that left the frame.
    /// Returns the number of bodies wrapped this tick.
    pub fn tick(&mut self, dt: f32, screen: ScreenGeometry, tuning: &Tuning) -> usize {
        let wrap = &tuning.wrap;
        for body in &mut self.bodies {
            if body.step(dt) || body.motion.is_none() {
                // Screen wider than one drift: keep going
                body.drift(wrap.drift_distance, wrap.move_duration);
            }
        }
        apply_wrap(&mut self.bodies, screen, wrap)
    }

    /// Move every live body to the reuse pool
    pub fn teardown(&mut self) {
        log::debug!("Asteroid field teardown: pooling {} bodies", self.bodies.len());
        self.pool.append(&mut self.bodies);
    }

    pub fn bodies(&self) -> &[MovingBody] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&MovingBody> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|i| &self.bodies[i])
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies waiting in the reuse pool
    pub fn pooled(&self) -> usize {
        self.pool.len()
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::in_exclusion_zone;

    fn screen() -> ScreenGeometry {
        ScreenGeometry::new(750.0, 1334.0)
    }

    #[test]
    fn test_populate_assigns_sorted_ids() {
        let tuning = Tuning::default();
        let mut field = AsteroidField::new(99);
        let ids = field.populate(8, Vec2::new(375.0, 667.0), screen(), &tuning);

        assert_eq!(ids.len(), 8);
        assert_eq!(field.len(), 8);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            let body = field.body(id).expect("body by id");
            assert_eq!(body.id, id);
            assert!(body.motion.is_some());
            assert!((body.heading.length() - 1.0).abs() < 1e-4);
            assert!(body.size.x >= 20.0 && body.size.x <= 60.0);
        }
    }

    #[test]
    fn test_populate_keeps_reference_clear() {
        let tuning = Tuning::default();
        let reference = Vec2::new(375.0, 667.0);
        let mut field = AsteroidField::new(5);
        field.populate(50, reference, screen(), &tuning);
        let inside = field
            .bodies()
            .iter()
            .filter(|b| in_exclusion_zone(b.position, reference, 100.0))
            .count();
        assert_eq!(inside, 0);
    }

    #[test]
    fn test_same_seed_same_field() {
        let tuning = Tuning::default();
        let mut a = AsteroidField::new(2024);
        let mut b = AsteroidField::new(2024);
        a.populate(6, Vec2::ZERO, screen(), &tuning);
        b.populate(6, Vec2::ZERO, screen(), &tuning);
        for _ in 0..600 {
            a.tick(1.0 / 60.0, screen(), &tuning);
            b.tick(1.0 / 60.0, screen(), &tuning);
        }
        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.position, y.position);
        }
    }

    #[test]
    fn test_bodies_stay_near_frame() {
        let tuning = Tuning::default();
        let mut field = AsteroidField::new(77);
        field.populate(12, Vec2::new(375.0, 667.0), screen(), &tuning);

        let mut wrapped = 0;
        // Two minutes at 60 Hz: at 2000/15 units per second every body crosses the frame
        for _ in 0..(120 * 60) {
            wrapped += field.tick(1.0 / 60.0, screen(), &tuning);
            for body in field.bodies() {
                let limit = Vec2::new(750.0, 1334.0) + body.size + Vec2::splat(5.0);
                assert!(body.position.x < limit.x && body.position.y < limit.y);
                assert!(body.position.x > -body.size.x - 15.0);
                assert!(body.position.y > -body.size.y - 15.0);
            }
        }
        assert!(wrapped > 0);
    }

    #[test]
    fn test_teardown_pools_and_reuses() {
        let tuning = Tuning::default();
        let mut field = AsteroidField::new(1);
        field.populate(4, Vec2::ZERO, screen(), &tuning);
        field.teardown();
        assert!(field.is_empty());
        assert_eq!(field.pooled(), 4);

        let ids = field.populate(3, Vec2::ZERO, screen(), &tuning);
        assert_eq!(field.pooled(), 1);
        // Ids are never reused
        assert_eq!(ids, vec![BodyId(5), BodyId(6), BodyId(7)]);
        assert!(field.body(BodyId(1)).is_none());
    }
}
