//! Data-driven tuning for layout, wrap-around and spawning
//!
//! A `Tuning` is built once by the host and passed by reference into the
//! layout and motion code. It can be loaded from a JSON document; every
//! field is optional and falls back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating a tuning document
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// HUD layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudTuning {
    pub margin_ratio: f32,
    pub min_margin: f32,
    pub max_margin: f32,
    pub spacing_ratio: f32,
    pub min_spacing: f32,
    /// Width at which the font is exactly `base_font_size`
    pub reference_width: f32,
    pub base_font_size: f32,
    pub max_font_size: f32,
}

impl Default for HudTuning {
    fn default() -> Self {
        Self {
            margin_ratio: SAFE_MARGIN_RATIO,
            min_margin: MIN_SAFE_MARGIN,
            max_margin: MAX_SAFE_MARGIN,
            spacing_ratio: VERTICAL_SPACING_RATIO,
            min_spacing: MIN_VERTICAL_SPACING,
            reference_width: REFERENCE_WIDTH,
            base_font_size: BASE_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
        }
    }
}

/// Wrap-around drift constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapTuning {
    pub margin: f32,
    pub drift_distance: f32,
    pub move_duration: f32,
}

impl Default for WrapTuning {
    fn default() -> Self {
        Self {
            margin: WRAP_MARGIN,
            drift_distance: DRIFT_DISTANCE,
            move_duration: DEFAULT_MOVE_DURATION,
        }
    }
}

/// Spawn placement constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub overscan: f32,
    pub exclusion_half_extent: f32,
    pub max_attempts: u32,
    pub min_body_size: f32,
    pub max_body_size: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            overscan: SPAWN_OVERSCAN,
            exclusion_half_extent: SPAWN_EXCLUSION_HALF_EXTENT,
            max_attempts: SPAWN_MAX_ATTEMPTS,
            min_body_size: MIN_BODY_SIZE,
            max_body_size: MAX_BODY_SIZE,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub hud: HudTuning,
    pub wrap: WrapTuning,
    pub spawn: SpawnTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from JSON, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default tuning");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain structs of finite floats always serialize
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the layout and motion code cannot use sensibly
    pub fn validate(&self) -> Result<(), TuningError> {
        let hud = &self.hud;
        if hud.min_margin < 0.0 || hud.min_margin > hud.max_margin {
            return Err(invalid("hud.min_margin", "must be in [0, max_margin]"));
        }
        if hud.min_spacing < 0.0 {
            return Err(invalid("hud.min_spacing", "must not be negative"));
        }
        if hud.reference_width <= 0.0 {
            return Err(invalid("hud.reference_width", "must be positive"));
        }
        if hud.base_font_size <= 0.0 || hud.base_font_size > hud.max_font_size {
            return Err(invalid("hud.base_font_size", "must be in (0, max_font_size]"));
        }

        let wrap = &self.wrap;
        if wrap.margin < 0.0 {
            return Err(invalid("wrap.margin", "must not be negative"));
        }
        if wrap.move_duration <= 0.0 {
            return Err(invalid("wrap.move_duration", "must be positive"));
        }
        if wrap.drift_distance <= 0.0 {
            return Err(invalid("wrap.drift_distance", "must be positive"));
        }

        let spawn = &self.spawn;
        if spawn.max_attempts == 0 {
            return Err(invalid("spawn.max_attempts", "must be at least 1"));
        }
        if spawn.overscan < 0.0 || spawn.exclusion_half_extent < 0.0 {
            return Err(invalid("spawn.overscan", "extents must not be negative"));
        }
        if spawn.min_body_size <= 0.0 || spawn.min_body_size > spawn.max_body_size {
            return Err(invalid("spawn.min_body_size", "must be in (0, max_body_size]"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}
