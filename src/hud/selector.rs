//! Orientation-aware layout selection and the host re-entry point
//!
//! The variant is decided from the geometry on every call. Nothing here
//! survives a resize except the last result, kept for readers.

use serde::{Deserialize, Serialize};

use super::layout::HudLayout;
use crate::geometry::{Orientation, SafeAreaInsets, ScreenGeometry};
use crate::platform::GeometrySource;
use crate::tuning::HudTuning;

/// Layout strategy chosen for a geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutVariant {
    Portrait,
    Landscape,
}

impl LayoutVariant {
    pub fn for_screen(screen: ScreenGeometry) -> Self {
        match screen.orientation() {
            Orientation::Landscape => LayoutVariant::Landscape,
            Orientation::Portrait => LayoutVariant::Portrait,
        }
    }

    /// Run the layout engine for this variant
    pub fn compute(
        &self,
        screen: ScreenGeometry,
        insets: SafeAreaInsets,
        tuning: &HudTuning,
    ) -> HudLayout {
        // Both orientations share the engine until portrait needs to dodge
        // on-screen controls
        match self {
            LayoutVariant::Landscape => HudLayout::compute(screen, insets, tuning),
            LayoutVariant::Portrait => HudLayout::compute(screen, insets, tuning),
        }
    }
}

/// Classify the orientation and compute the matching layout
pub fn select_layout(
    screen: ScreenGeometry,
    insets: SafeAreaInsets,
    tuning: &HudTuning,
) -> HudLayout {
    LayoutVariant::for_screen(screen).compute(screen, insets, tuning)
}

/// Host-side layout state: call [`LayoutTracker::update`] once per
/// geometry event (first presentation, rotation, resize)
#[derive(Debug, Clone, Default)]
pub struct LayoutTracker {
    current: Option<TrackedLayout>,
    updates: u64,
}

/// Last geometry and the layout computed for it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackedLayout {
    pub screen: ScreenGeometry,
    pub insets: SafeAreaInsets,
    pub variant: LayoutVariant,
    pub layout: HudLayout,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute for a geometry event. Missing insets count as zero.
    pub fn update(
        &mut self,
        screen: ScreenGeometry,
        insets: Option<SafeAreaInsets>,
        tuning: &HudTuning,
    ) -> HudLayout {
        let insets = SafeAreaInsets::or_zero(insets);
        let variant = LayoutVariant::for_screen(screen);
        let layout = variant.compute(screen, insets, tuning);

        match self.current.map(|c| c.variant) {
            Some(previous) if previous != variant => {
                log::info!("HUD layout variant {:?} -> {:?}", previous, variant);
            }
            None => log::info!("HUD layout variant {:?}", variant),
            _ => {}
        }
        log::debug!(
            "HUD layout for {}x{}: margin={}, spacing={}, font={}",
            screen.width,
            screen.height,
            layout.safe_margin,
            layout.vertical_spacing,
            layout.font_size
        );

        self.current = Some(TrackedLayout {
            screen,
            insets,
            variant,
            layout,
        });
        self.updates += 1;
        layout
    }

    /// Pull geometry from the host and recompute
    pub fn refresh(&mut self, source: &impl GeometrySource, tuning: &HudTuning) -> HudLayout {
        self.update(source.screen(), source.insets(), tuning)
    }

    pub fn current(&self) -> Option<&TrackedLayout> {
        self.current.as_ref()
    }

    pub fn layout(&self) -> Option<HudLayout> {
        self.current.map(|c| c.layout)
    }

    /// Number of geometry events processed
    pub fn updates(&self) -> u64 {
        self.updates
    }
}
