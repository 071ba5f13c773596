//! Circle coverage mask
//!
//! A circle in pixel space with an optional feather band straddling its edge.
//! Coverage is full (1.0) inside the band's inner edge and zero (0.0) beyond
//! its outer edge.

use super::smootherstep;
use serde::{Deserialize, Serialize};

/// Circular coverage mask in pixel coordinates.
///
/// # Coordinate System
/// - (0, 0) = top-left corner of the target buffer
/// - pixel `(i, j)` has its center at `(i + 0.5, j + 0.5)`
///
/// # Example
/// ```
/// use avatar_core::mask::CircleMask;
///
/// let mask = CircleMask::new(150.0, 150.0, 150.0, 1.0);
///
/// // Center: fully covered
/// assert!(mask.evaluate(150.0, 150.0) > 0.99);
/// // Corner: outside
/// assert!(mask.evaluate(0.5, 0.5) < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMask {
    /// Center X in pixels
    pub center_x: f32,
    /// Center Y in pixels
    pub center_y: f32,
    /// Radius in pixels
    pub radius: f32,
    /// Width of the soft edge in pixels (0.0 = hard edge)
    pub feather: f32,
}

impl CircleMask {
    /// Create a new circle mask. Negative radius and feather are treated as zero.
    pub fn new(center_x: f32, center_y: f32, radius: f32, feather: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius: radius.max(0.0),
            feather: feather.max(0.0),
        }
    }

    /// Circle inscribed in a `width` x `height` buffer, with a 1-pixel soft edge.
    pub fn inscribed(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self::new(w / 2.0, h / 2.0, w.min(h) / 2.0, 1.0)
    }

    #[inline]
    fn distance(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Evaluate coverage at a pixel-space point, from 0.0 to 1.0.
    pub fn evaluate(&self, x: f32, y: f32) -> f32 {
        let dist = self.distance(x, y);

        if self.feather <= 0.0 {
            return if dist <= self.radius { 1.0 } else { 0.0 };
        }

        let inner = self.radius - self.feather / 2.0;
        let outer = self.radius + self.feather / 2.0;

        if dist <= inner {
            1.0
        } else if dist >= outer {
            0.0
        } else {
            1.0 - smootherstep((dist - inner) / self.feather)
        }
    }

    /// Check if a point is inside the circle boundary (ignoring feather).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.distance(x, y) <= self.radius
    }
}
