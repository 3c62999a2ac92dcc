//! Browser viewport geometry
//!
//! Safe-area insets are only exposed to CSS via `env(safe-area-inset-*)`,
//! so a hidden probe element carries them as padding and we read the
//! computed style back.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use super::{GeometrySource, parse_css_px};
use crate::geometry::{SafeAreaInsets, ScreenGeometry};

const PROBE_ID: &str = "safe-area-probe";

/// Viewport geometry of the current browser window
pub struct BrowserViewport {
    window: Window,
    probe: HtmlElement,
}

impl BrowserViewport {
    /// Attach the inset probe to the document body
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let probe = match document.get_element_by_id(PROBE_ID) {
            Some(el) => el.dyn_into::<HtmlElement>().ok()?,
            None => {
                let el = document
                    .create_element("div")
                    .ok()?
                    .dyn_into::<HtmlElement>()
                    .ok()?;
                el.set_id(PROBE_ID);
                let style = el.style();
                for (name, value) in [
                    ("position", "fixed"),
                    ("visibility", "hidden"),
                    ("pointer-events", "none"),
                    ("padding-top", "env(safe-area-inset-top, 0px)"),
                    ("padding-bottom", "env(safe-area-inset-bottom, 0px)"),
                    ("padding-left", "env(safe-area-inset-left, 0px)"),
                    ("padding-right", "env(safe-area-inset-right, 0px)"),
                ] {
                    style.set_property(name, value).ok()?;
                }
                document.body()?.append_child(&el).ok()?;
                el
            }
        };

        Some(Self { window, probe })
    }

    fn window_extent(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    }

    fn probe_padding(&self, property: &str) -> Option<f32> {
        let style = self.window.get_computed_style(&self.probe).ok().flatten()?;
        let value = style.get_property_value(property).ok()?;
        parse_css_px(&value)
    }
}

impl GeometrySource for BrowserViewport {
    fn screen(&self) -> ScreenGeometry {
        ScreenGeometry::new(
            Self::window_extent(self.window.inner_width()),
            Self::window_extent(self.window.inner_height()),
        )
    }

    fn insets(&self) -> Option<SafeAreaInsets> {
        let top = self.probe_padding("padding-top");
        let bottom = self.probe_padding("padding-bottom");
        let left = self.probe_padding("padding-left");
        let right = self.probe_padding("padding-right");
        if top.is_none() && bottom.is_none() && left.is_none() && right.is_none() {
            return None;
        }
        Some(SafeAreaInsets::new(
            top.unwrap_or(0.0),
            bottom.unwrap_or(0.0),
            left.unwrap_or(0.0),
            right.unwrap_or(0.0),
        ))
    }
}
