//! Circular viewport mask for the crop editor
//!
//! The editor dims everything outside a fixed circle centered on the screen.
//! This module evaluates how much of each pixel lies inside that circle and
//! composites the dimming overlay accordingly.
//!
//! ## Algorithm
//!
//! Coverage is evaluated per pixel center and ranges from 0.0 (outside the
//! circle) to 1.0 (inside). Across the feather band the transition uses the
//! smootherstep function, which gives an anti-aliased edge without banding.

pub mod apply;
pub mod circle;

pub use apply::apply_viewport_overlay;
pub use circle::CircleMask;

/// `6t^5 - 15t^4 + 10t^3` on `t` clamped to `[0, 1]`.
///
/// Shapes the falloff across the circle's feather band.
#[inline]
pub fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
