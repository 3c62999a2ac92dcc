//! Spawn placement for decorative bodies
//!
//! Candidates are drawn uniformly from the frame plus an overscan border and
//! rejected when they land in the square around the reference point. After
//! `max_attempts` rejections the last candidate is used anyway, so spawning
//! always terminates with a usable point.

use glam::Vec2;
use rand::Rng;

use crate::geometry::ScreenGeometry;
use crate::tuning::SpawnTuning;

/// Result of a spawn placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOutcome {
    pub point: Vec2,
    /// Candidates drawn, including the returned one
    pub attempts: u32,
    /// False when every candidate was rejected and the last one was kept
    pub accepted: bool,
}

/// True when both coordinates fall inside the exclusion square
#[inline]
pub fn in_exclusion_zone(candidate: Vec2, reference: Vec2, half_extent: f32) -> bool {
    let in_x = (reference.x - half_extent..=reference.x + half_extent).contains(&candidate.x);
    let in_y = (reference.y - half_extent..=reference.y + half_extent).contains(&candidate.y);
    in_x && in_y
}

/// Draw a uniform candidate in `[-overscan, w + overscan] × [-overscan, h + overscan]`
pub fn random_candidate<R: Rng>(rng: &mut R, screen: ScreenGeometry, overscan: f32) -> Vec2 {
    let overscan = overscan.max(0.0);
    Vec2::new(
        rng.random_range(-overscan..=screen.width + overscan),
        rng.random_range(-overscan..=screen.height + overscan),
    )
}

/// Pick a spawn point away from `reference`
pub fn spawn_point<R: Rng>(
    rng: &mut R,
    reference: Vec2,
    screen: ScreenGeometry,
    tuning: &SpawnTuning,
) -> SpawnOutcome {
    let screen = ScreenGeometry::new(screen.width, screen.height);
    let max_attempts = tuning.max_attempts.max(1);

    let mut point = reference;
    for attempt in 1..=max_attempts {
        point = random_candidate(rng, screen, tuning.overscan);
        if !in_exclusion_zone(point, reference, tuning.exclusion_half_extent) {
            return SpawnOutcome {
                point,
                attempts: attempt,
                accepted: true,
            };
        }
    }

    log::debug!(
        "No spawn candidate clear of {:?} after {} attempts, using {:?}",
        reference,
        max_attempts,
        point
    );
    SpawnOutcome {
        point,
        attempts: max_attempts,
        accepted: false,
    }
}
