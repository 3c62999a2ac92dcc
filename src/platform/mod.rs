//! Platform abstraction layer
//!
//! Hosts report viewport geometry through [`GeometrySource`]. The core never
//! asks for geometry on its own; the host pulls and pushes it into a
//! [`crate::hud::LayoutTracker`] on each resize or rotation.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::geometry::{SafeAreaInsets, ScreenGeometry};

/// Source of the current viewport geometry
pub trait GeometrySource {
    /// Viewport size in logical points
    fn screen(&self) -> ScreenGeometry;
    /// Safe-area insets, or `None` if the platform has not reported them yet
    fn insets(&self) -> Option<SafeAreaInsets>;
}

/// Geometry supplied directly by the host (native builds, tests)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedGeometry {
    pub screen: ScreenGeometry,
    pub insets: Option<SafeAreaInsets>,
}

impl FixedGeometry {
    pub fn new(screen: ScreenGeometry, insets: Option<SafeAreaInsets>) -> Self {
        Self { screen, insets }
    }
}

impl GeometrySource for FixedGeometry {
    fn screen(&self) -> ScreenGeometry {
        self.screen
    }

    fn insets(&self) -> Option<SafeAreaInsets> {
        self.insets
    }
}

/// Parse a computed CSS length such as `"47px"` into points
///
/// Anything else (empty, `auto`, unresolved `env()`) yields `None`.
pub fn parse_css_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().ok().filter(|v| v.is_finite())
}
