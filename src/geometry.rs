//! Screen geometry and platform safe-area insets
//!
//! Everything is in logical points. Pixel density is the renderer's problem.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sanitize_extent;

/// Viewport size in logical points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub width: f32,
    pub height: f32,
}

impl ScreenGeometry {
    /// Create a geometry, zeroing negative or non-finite extents
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Landscape when strictly wider than tall
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Device orientation derived from the viewport aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Obstructed margins reported by the platform (notch, home indicator, ...)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl SafeAreaInsets {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same insets with every negative or non-finite edge replaced by zero
    pub fn sanitized(&self) -> Self {
        Self {
            top: sanitize_extent(self.top),
            bottom: sanitize_extent(self.bottom),
            left: sanitize_extent(self.left),
            right: sanitize_extent(self.right),
        }
    }

    /// Missing insets (first frame, before the platform reports) count as zero
    pub fn or_zero(insets: Option<Self>) -> Self {
        insets.map(|i| i.sanitized()).unwrap_or_default()
    }
}

/// The unobstructed part of the screen in the centered frame
/// (origin at screen center, +x right, +y up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl SafeRect {
    pub fn new(screen: ScreenGeometry, insets: SafeAreaInsets) -> Self {
        let half = screen.half_extents();
        let insets = insets.sanitized();
        Self {
            min: Vec2::new(-half.x + insets.left, -half.y + insets.bottom),
            max: Vec2::new(half.x - insets.right, half.y - insets.top),
        }
    }

    /// True when insets leave no usable area on some axis
    pub fn is_degenerate(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Pull a point inside the rect. An inverted axis collapses to its midpoint.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(point.x, self.min.x, self.max.x),
            clamp_axis(point.y, self.min.y, self.max.y),
        )
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) / 2.0
    } else {
        value.clamp(min, max)
    }
}
