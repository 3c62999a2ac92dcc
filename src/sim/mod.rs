//! Background drift simulation
//!
//! Decorative asteroids drift across a toroidal screen. This module must be
//! pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by body ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod field;
pub mod spawn;
pub mod wrap;

pub use body::{BodyId, MoveCommand, MovingBody};
pub use field::AsteroidField;
pub use spawn::{SpawnOutcome, in_exclusion_zone, random_candidate, spawn_point};
pub use wrap::{apply_wrap, wrap_axis, wrap_body};
