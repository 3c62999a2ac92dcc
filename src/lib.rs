//! Asteroid Drift - HUD layout and background drift for a touch arcade game
//!
//! Core modules:
//! - `geometry`: Screen size, safe-area insets, orientation
//! - `hud`: Responsive HUD layout engine and orientation-aware selector
//! - `sim`: Wrap-around motion and spawn placement for decorative asteroids
//! - `platform`: Host geometry sources (fixed/native, browser viewport)
//! - `tuning`: Data-driven layout and motion constants

pub mod geometry;
pub mod hud;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use geometry::{Orientation, SafeAreaInsets, SafeRect, ScreenGeometry};
pub use hud::{HudLayout, LayoutTracker, LayoutVariant, select_layout};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Logical width of the smallest supported phone (font scale reference)
    pub const REFERENCE_WIDTH: f32 = 375.0;

    /// HUD margin as a fraction of screen width, clamped to [MIN, MAX]
    pub const SAFE_MARGIN_RATIO: f32 = 0.05;
    pub const MIN_SAFE_MARGIN: f32 = 20.0;
    pub const MAX_SAFE_MARGIN: f32 = 50.0;

    /// Row spacing as a fraction of screen height, never below MIN
    pub const VERTICAL_SPACING_RATIO: f32 = 0.04;
    pub const MIN_VERTICAL_SPACING: f32 = 30.0;

    /// HUD font size at the reference width, and the upper clamp
    pub const BASE_FONT_SIZE: f32 = 60.0;
    pub const MAX_FONT_SIZE: f32 = 80.0;

    /// Offset past the opposite edge where a wrapped body reappears
    pub const WRAP_MARGIN: f32 = 10.0;
    /// Length of a single drift command (screen units)
    pub const DRIFT_DISTANCE: f32 = 2000.0;
    /// Duration of a single drift command (seconds)
    pub const DEFAULT_MOVE_DURATION: f32 = 15.0;

    /// Candidates may land this far outside the visible frame
    pub const SPAWN_OVERSCAN: f32 = 50.0;
    /// Half-extent of the square kept clear around the reference point
    pub const SPAWN_EXCLUSION_HALF_EXTENT: f32 = 100.0;
    /// First candidate plus five retries
    pub const SPAWN_MAX_ATTEMPTS: u32 = 6;

    /// Decorative asteroid bounding size range
    pub const MIN_BODY_SIZE: f32 = 20.0;
    pub const MAX_BODY_SIZE: f32 = 60.0;
}

/// Clamp `value` into `[min, max]` without panicking on an inverted band.
///
/// Unlike `f32::clamp`, an inverted band collapses to `min`. NaN yields `min`.
#[inline]
pub fn clamp_band(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.min(max).max(min)
}

/// Replace negative, NaN or infinite extents with zero
#[inline]
pub fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
