//! Crop transform controller.
//!
//! Tracks the scale and offset of the source image behind the circular
//! viewport while the user drags and pinches. Both gestures report values
//! relative to where they started, so the controller keeps a baseline
//! (`last_scale`, `last_offset`) captured at the end of each gesture and
//! combines it with the live delta:
//!
//! ```text
//! drag:  offset = clamp(last_offset + translation)
//! pinch: scale  = last_scale * magnification
//! ```
//!
//! Drag and pinch streams may interleave update by update. Each update
//! touches only its own half of the transform, except for the end of a pinch,
//! which re-clamps the offset and refreshes the offset baseline.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::geometry::{ClampBounds, Size, Vec2};

/// Scale and offset of the source image relative to its fill layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropTransform {
    /// Uniform scale factor (1.0 = fill layout size).
    pub scale: f64,
    /// Translation from the screen center, in screen units.
    pub offset: Vec2,
}

impl Default for CropTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CropTransform {
    pub const IDENTITY: CropTransform = CropTransform {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    pub fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Gesture-driven pan/zoom state for the avatar editor.
#[derive(Debug, Clone)]
pub struct CropController {
    screen: Size,
    bounds: ClampBounds,
    current: CropTransform,
    baseline: CropTransform,
    dragging: bool,
    pinching: bool,
}

impl CropController {
    /// Create a controller clamping against `screen`, at the identity transform.
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            bounds: ClampBounds::for_screen(screen),
            current: CropTransform::IDENTITY,
            baseline: CropTransform::IDENTITY,
            dragging: false,
            pinching: false,
        }
    }

    /// Current visible transform.
    pub fn transform(&self) -> CropTransform {
        self.current
    }

    /// Transform committed at the end of the last gesture.
    pub fn baseline(&self) -> CropTransform {
        self.baseline
    }

    pub fn scale(&self) -> f64 {
        self.current.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.current.offset
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    pub fn bounds(&self) -> ClampBounds {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    /// True while either gesture has reported an update without ending.
    pub fn is_interacting(&self) -> bool {
        self.dragging || self.pinching
    }

    /// Return to scale 1 and zero offset, dropping any in-flight gesture.
    pub fn reset(&mut self) {
        self.current = CropTransform::IDENTITY;
        self.baseline = CropTransform::IDENTITY;
        self.dragging = false;
        self.pinching = false;
    }

    /// Replace the screen size used for clamping.
    ///
    /// Both the visible offset and the baseline are re-clamped so that the
    /// bounds invariant keeps holding on the new screen.
    pub fn set_screen_size(&mut self, screen: Size) {
        if !screen.is_valid() {
            warn!("Ignoring invalid screen size {}x{}", screen.width, screen.height);
            return;
        }
        self.screen = screen;
        self.bounds = ClampBounds::for_screen(screen);
        self.current.offset = self.bounds.clamp(self.current.offset);
        self.baseline.offset = self.bounds.clamp(self.baseline.offset);
    }

    /// Apply a drag update. `translation` is cumulative since the drag began.
    pub fn drag_changed(&mut self, translation: Vec2) {
        if !translation.is_finite() {
            warn!("Ignoring non-finite drag translation {:?}", translation);
            return;
        }
        if !self.dragging {
            debug!("Drag started from offset {:?}", self.baseline.offset);
            self.dragging = true;
        }
        self.current.offset = self.bounds.clamp(self.baseline.offset + translation);
    }

    /// Finish a drag: the clamped offset becomes the new baseline.
    pub fn drag_ended(&mut self) {
        self.baseline.offset = self.current.offset;
        self.dragging = false;
        debug!("Drag ended at offset {:?}", self.current.offset);
    }

    /// Apply a pinch update. `magnification` is cumulative since the pinch began.
    ///
    /// The resulting scale is not clamped.
    pub fn pinch_changed(&mut self, magnification: f64) {
        if !magnification.is_finite() || magnification <= 0.0 {
            warn!("Ignoring invalid pinch magnification {}", magnification);
            return;
        }
        let scale = self.baseline.scale * magnification;
        if !scale.is_finite() || scale <= 0.0 {
            warn!(
                "Ignoring pinch magnification {}: scale {} out of range",
                magnification, scale
            );
            return;
        }
        if !self.pinching {
            debug!("Pinch started from scale {}", self.baseline.scale);
            self.pinching = true;
        }
        self.current.scale = scale;
    }

    /// Finish a pinch: commit the scale, then re-clamp and commit the offset.
    pub fn pinch_ended(&mut self) {
        self.baseline.scale = self.current.scale;
        self.current.offset = self.bounds.clamp(self.current.offset);
        self.baseline.offset = self.current.offset;
        self.pinching = false;
        debug!(
            "Pinch ended at scale {} offset {:?}",
            self.current.scale, self.current.offset
        );
    }
}
