//! Toroidal wrap-around for drifting bodies
//!
//! A body must leave the frame completely before it is moved, and it
//! reappears just past the opposite edge rather than on it:
//!
//! - exit right at `x >= w + size.x`, reappear at `x = -size.x + margin`
//! - exit left at `x <= -size.x - margin`, reappear at `x = w + size.x - margin`
//!
//! The y axis is handled the same way, independently.

use crate::geometry::ScreenGeometry;
use crate::tuning::WrapTuning;

use super::body::MovingBody;

/// Wrap one coordinate. Returns the new value if it crossed an edge.
#[inline]
pub fn wrap_axis(value: f32, extent: f32, body_extent: f32, margin: f32) -> Option<f32> {
    if value >= extent + body_extent {
        Some(-body_extent + margin)
    } else if value <= -body_extent - margin {
        Some(extent + body_extent - margin)
    } else {
        None
    }
}

/// Teleport a body that has left the frame and restart its drift.
/// Returns true if the body moved.
pub fn wrap_body(body: &mut MovingBody, screen: ScreenGeometry, tuning: &WrapTuning) -> bool {
    let wrapped_x = wrap_axis(body.position.x, screen.width, body.size.x, tuning.margin);
    let wrapped_y = wrap_axis(body.position.y, screen.height, body.size.y, tuning.margin);

    if wrapped_x.is_none() && wrapped_y.is_none() {
        return false;
    }
    if let Some(x) = wrapped_x {
        body.position.x = x;
    }
    if let Some(y) = wrapped_y {
        body.position.y = y;
    }

    body.drift(tuning.drift_distance, tuning.move_duration);
    true
}

/// Run the wrap pass over every body. Returns how many wrapped.
pub fn apply_wrap(bodies: &mut [MovingBody], screen: ScreenGeometry, tuning: &WrapTuning) -> usize {
    let mut wrapped = 0;
    for body in bodies.iter_mut() {
        if wrap_body(body, screen, tuning) {
            log::trace!("Body {:?} wrapped to {:?}", body.id, body.position);
            wrapped += 1;
        }
    }
    wrapped
}
