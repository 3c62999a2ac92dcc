//! HUD layout engine
//!
//! A pure function of screen size and safe-area insets. Margins and font
//! size scale with screen width and are clamped at both ends, so the same
//! HUD reads well on a small phone and on a tablet.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_band;
use crate::geometry::{SafeAreaInsets, SafeRect, ScreenGeometry};
use crate::tuning::HudTuning;

/// HUD elements with a layout anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudAnchor {
    Score,
    Lives,
    AsteroidCount,
}

impl HudAnchor {
    /// DOM element id used by the web host
    pub fn element_id(&self) -> &'static str {
        match self {
            HudAnchor::Score => "hud-score",
            HudAnchor::Lives => "hud-lives",
            HudAnchor::AsteroidCount => "hud-asteroids",
        }
    }
}

/// Resolved HUD layout for one screen geometry
///
/// Positions are in the centered frame: origin at screen center, +x right,
/// +y up. Recompute on every geometry change; never patch in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudLayout {
    /// Base margin from the safe-area edge
    pub safe_margin: f32,
    /// Gap between stacked HUD rows
    pub vertical_spacing: f32,
    /// Base font size for HUD text
    pub font_size: f32,
    pub score_position: Vec2,
    pub lives_position: Vec2,
    pub asteroid_count_position: Vec2,
}

impl HudLayout {
    /// Compute the layout. Negative or non-finite inputs count as zero.
    pub fn compute(screen: ScreenGeometry, insets: SafeAreaInsets, tuning: &HudTuning) -> Self {
        let screen = ScreenGeometry::new(screen.width, screen.height);
        let insets = insets.sanitized();

        let safe_margin = safe_margin(screen.width, tuning);
        let vertical_spacing = vertical_spacing(screen.height, tuning);
        let font_size = font_size(screen.width, tuning);

        let top_margin = insets.top + safe_margin;
        let leading_margin = insets.left + safe_margin;
        // Measured from the left edge, like a trailing-aligned label's x
        let trailing_margin = screen.width - insets.right - safe_margin;

        let half = screen.half_extents();
        let score = Vec2::new(-half.x + leading_margin, half.y - top_margin);
        let lives = Vec2::new(
            -half.x + leading_margin,
            half.y - top_margin - vertical_spacing,
        );
        let asteroid_count = Vec2::new(trailing_margin - half.x, half.y - top_margin);

        // Only degenerate geometry (insets eating the screen) moves anything here
        let safe = SafeRect::new(screen, insets);
        Self {
            safe_margin,
            vertical_spacing,
            font_size,
            score_position: safe.clamp_point(score),
            lives_position: safe.clamp_point(lives),
            asteroid_count_position: safe.clamp_point(asteroid_count),
        }
    }

    /// All anchors, in HUD reading order
    pub fn anchors(&self) -> [(HudAnchor, Vec2); 3] {
        [
            (HudAnchor::Score, self.score_position),
            (HudAnchor::Lives, self.lives_position),
            (HudAnchor::AsteroidCount, self.asteroid_count_position),
        ]
    }

    pub fn position(&self, anchor: HudAnchor) -> Vec2 {
        match anchor {
            HudAnchor::Score => self.score_position,
            HudAnchor::Lives => self.lives_position,
            HudAnchor::AsteroidCount => self.asteroid_count_position,
        }
    }

    /// Convert a centered-frame point to a top-left origin, y-down frame
    pub fn to_top_left(point: Vec2, screen: ScreenGeometry) -> Vec2 {
        let half = screen.half_extents();
        Vec2::new(point.x + half.x, half.y - point.y)
    }
}

/// Width-proportional margin, clamped to [min_margin, max_margin]
pub fn safe_margin(width: f32, tuning: &HudTuning) -> f32 {
    clamp_band(width * tuning.margin_ratio, tuning.min_margin, tuning.max_margin)
}

/// Height-proportional row spacing with a floor
pub fn vertical_spacing(height: f32, tuning: &HudTuning) -> f32 {
    (height * tuning.spacing_ratio).max(tuning.min_spacing)
}

/// Font size scaled linearly from the reference width, clamped at both ends
pub fn font_size(width: f32, tuning: &HudTuning) -> f32 {
    let scaled = if tuning.reference_width > 0.0 {
        width / tuning.reference_width * tuning.base_font_size
    } else {
        tuning.base_font_size
    };
    clamp_band(scaled, tuning.base_font_size, tuning.max_font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(w: f32, h: f32, insets: SafeAreaInsets) -> HudLayout {
        HudLayout::compute(ScreenGeometry::new(w, h), insets, &HudTuning::default())
    }

    #[test]
    fn test_small_phone_no_insets() {
        let layout = compute(750.0, 1334.0, SafeAreaInsets::default());
        assert_eq!(layout.safe_margin, 37.5);
        // 750 / 375 * 60 = 120, clamped
        assert_eq!(layout.font_size, 80.0);
        assert!((layout.vertical_spacing - 53.36).abs() < 1e-3);

        assert_eq!(layout.score_position, Vec2::new(-375.0 + 37.5, 667.0 - 37.5));
        assert!((layout.lives_position.y - (667.0 - 37.5 - 53.36)).abs() < 1e-3);
        assert_eq!(layout.asteroid_count_position, Vec2::new(375.0 - 37.5, 667.0 - 37.5));
    }

    #[test]
    fn test_notched_phone_top_inset() {
        let insets = SafeAreaInsets::new(59.0, 34.0, 0.0, 0.0);
        let layout = compute(1170.0, 2532.0, insets);
        // 1170 * 0.05 = 58.5 -> clamped to 50
        assert_eq!(layout.safe_margin, 50.0);
        assert_eq!(layout.score_position.y, 1266.0 - (59.0 + 50.0));
        assert_eq!(layout.asteroid_count_position.y, layout.score_position.y);
    }

    #[test]
    fn test_font_size_reference_points() {
        let tuning = HudTuning::default();
        assert_eq!(font_size(375.0, &tuning), 60.0);
        assert_eq!(font_size(320.0, &tuning), 60.0);
        assert_eq!(font_size(500.0, &tuning), 80.0);
        assert_eq!(font_size(2048.0, &tuning), 80.0);
        let mid = font_size(437.5, &tuning);
        assert!(mid > 60.0 && mid < 80.0);
    }

    #[test]
    fn test_safe_margin_band() {
        let tuning = HudTuning::default();
        assert_eq!(safe_margin(320.0, &tuning), 20.0);
        assert_eq!(safe_margin(600.0, &tuning), 30.0);
        assert_eq!(safe_margin(1366.0, &tuning), 50.0);
    }

    #[test]
    fn test_side_insets_shift_anchors_inward() {
        let plain = compute(844.0, 390.0, SafeAreaInsets::default());
        let notched = compute(844.0, 390.0, SafeAreaInsets::new(0.0, 21.0, 47.0, 47.0));
        assert!((notched.score_position.x - (plain.score_position.x + 47.0)).abs() < 1e-3);
        assert!(
            (notched.asteroid_count_position.x - (plain.asteroid_count_position.x - 47.0)).abs()
                < 1e-3
        );
        assert!(notched.asteroid_count_position.x > notched.score_position.x);
    }

    #[test]
    fn test_negative_insets_treated_as_zero() {
        let plain = compute(390.0, 844.0, SafeAreaInsets::default());
        let negative = compute(390.0, 844.0, SafeAreaInsets::new(-20.0, -1.0, -3.0, -8.0));
        assert_eq!(plain, negative);
    }

    #[test]
    fn test_degenerate_insets_stay_inside_safe_rect() {
        let screen = ScreenGeometry::new(320.0, 100.0);
        let insets = SafeAreaInsets::new(40.0, 40.0, 0.0, 0.0);
        let layout = HudLayout::compute(screen, insets, &HudTuning::default());
        let safe = SafeRect::new(screen, insets);
        for (_, p) in layout.anchors() {
            assert!(safe.contains(p), "{p:?} outside {safe:?}");
        }
    }

    #[test]
    fn test_to_top_left() {
        let screen = ScreenGeometry::new(750.0, 1334.0);
        assert_eq!(HudLayout::to_top_left(Vec2::ZERO, screen), Vec2::new(375.0, 667.0));
        assert_eq!(
            HudLayout::to_top_left(Vec2::new(-375.0, 667.0), screen),
            Vec2::ZERO
        );
    }
}
