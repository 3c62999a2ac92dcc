//! Asteroid Drift entry point
//!
//! Handles platform-specific initialization. On the web the HUD is laid out
//! on load and again on every resize / orientation change.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_host {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlElement;

    use asteroid_drift::ScreenGeometry;
    use asteroid_drift::hud::{HudLayout, LayoutTracker};
    use asteroid_drift::platform::web::BrowserViewport;
    use asteroid_drift::tuning::Tuning;

    /// Host state shared with the event listeners
    struct Host {
        viewport: BrowserViewport,
        tracker: LayoutTracker,
        tuning: Tuning,
    }

    impl Host {
        /// Recompute the layout and write it onto the HUD elements
        fn relayout(&mut self) {
            let layout = self.tracker.refresh(&self.viewport, &self.tuning.hud);
            let Some(screen) = self.tracker.current().map(|c| c.screen) else {
                return;
            };
            apply_layout(&layout, screen);
        }
    }

    fn apply_layout(layout: &HudLayout, screen: ScreenGeometry) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for (anchor, position) in layout.anchors() {
            let Some(el) = document
                .get_element_by_id(anchor.element_id())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let css = HudLayout::to_top_left(position, screen);
            let style = el.style();
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("left", &format!("{}px", css.x));
            let _ = style.set_property("top", &format!("{}px", css.y));
            let _ = style.set_property("font-size", &format!("{}px", layout.font_size));
        }

        // Trailing anchor grows leftward from its position
        if let Some(el) = document
            .get_element_by_id("hud-asteroids")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("transform", "translateX(-100%)");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        // Already initialised on hot reload
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Asteroid Drift starting...");

        let Some(viewport) = BrowserViewport::new() else {
            log::error!("No browser viewport available");
            return;
        };
        let host = Rc::new(RefCell::new(Host {
            viewport,
            tracker: LayoutTracker::new(),
            tuning: Tuning::default(),
        }));
        host.borrow_mut().relayout();

        let Some(window) = web_sys::window() else {
            return;
        };
        let listener_host = host.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            listener_host.borrow_mut().relayout();
        });
        for event in ["resize", "orientationchange"] {
            if window
                .add_event_listener_with_callback(event, on_resize.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Could not listen for {event}");
            }
        }
        on_resize.forget();

        log::info!("HUD layout attached");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_host::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Asteroid Drift (native) starting...");
    log::info!("Native mode has no window - printing layouts and a drift run");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => asteroid_drift::Tuning::load_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Could not read {path}: {e}");
                asteroid_drift::Tuning::default()
            }
        },
        None => asteroid_drift::Tuning::default(),
    };

    print_layouts(&tuning);
    run_drift(&tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Lay out the HUD for a handful of device geometries, rotating each once
#[cfg(not(target_arch = "wasm32"))]
fn print_layouts(tuning: &asteroid_drift::Tuning) {
    use asteroid_drift::platform::FixedGeometry;
    use asteroid_drift::{LayoutTracker, SafeAreaInsets, ScreenGeometry};

    let devices = [
        ("small phone", 750.0, 1334.0, None),
        ("notched phone", 1170.0, 2532.0, Some(SafeAreaInsets::new(59.0, 34.0, 0.0, 0.0))),
        ("tablet", 1024.0, 1366.0, Some(SafeAreaInsets::new(24.0, 20.0, 0.0, 0.0))),
    ];

    for (name, width, height, insets) in devices {
        let mut tracker = LayoutTracker::new();
        let mut host = FixedGeometry::new(ScreenGeometry::new(width, height), insets);
        for _ in 0..2 {
            let layout = tracker.refresh(&host, &tuning.hud);
            let variant = tracker.current().map(|c| c.variant);
            println!(
                "{name} {}x{} {:?}: margin={:.2} spacing={:.2} font={:.1} score={} lives={} asteroids={}",
                host.screen.width,
                host.screen.height,
                variant,
                layout.safe_margin,
                layout.vertical_spacing,
                layout.font_size,
                layout.score_position,
                layout.lives_position,
                layout.asteroid_count_position,
            );
            // Rotate: swap extents and move top/bottom insets to the sides
            host.screen = ScreenGeometry::new(height, width);
            host.insets = insets.map(|i| SafeAreaInsets::new(0.0, i.bottom.min(21.0), i.top, i.top));
        }
    }
}

/// Populate a field and run it for ten simulated seconds
#[cfg(not(target_arch = "wasm32"))]
fn run_drift(tuning: &asteroid_drift::Tuning) {
    use asteroid_drift::ScreenGeometry;
    use asteroid_drift::sim::AsteroidField;

    const TICK: f32 = 1.0 / 60.0;

    let screen = ScreenGeometry::new(750.0, 1334.0);
    let mut field = AsteroidField::new(0xA57E_201D);
    field.populate(10, screen.half_extents(), screen, tuning);

    let mut wrapped = 0;
    for _ in 0..600 {
        wrapped += field.tick(TICK, screen, tuning);
    }
    println!("Drift run: {} bodies, {} wraps in 10s", field.len(), wrapped);
    field.teardown();
}
