//! Responsive HUD layout
//!
//! Pull-based: the host calls into this module on every geometry event and
//! hands the resulting `HudLayout` to whatever draws the HUD.

pub mod layout;
pub mod selector;

pub use layout::{HudAnchor, HudLayout, font_size, safe_margin, vertical_spacing};
pub use selector::{LayoutTracker, LayoutVariant, TrackedLayout, select_layout};
