//! Screen-space geometry primitives.
//!
//! All values are in screen units (points), not pixels of the source image.
//! The origin for offsets is the screen center; positive x points right and
//! positive y points down.

use serde::{Deserialize, Serialize};

/// A 2D vector in screen units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A width/height pair in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point of a rectangle of this size anchored at the origin.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Per-axis pan limits derived from the screen size.
///
/// The bound on each axis is half the screen dimension along that axis. It
/// does not depend on the current scale or on the source image size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl ClampBounds {
    pub fn for_screen(screen: Size) -> Self {
        Self {
            max_x: screen.width / 2.0,
            max_y: screen.height / 2.0,
        }
    }

    /// Clamp each axis of `offset` independently to `[-max, +max]`.
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.clamp(-self.max_x, self.max_x),
            offset.y.clamp(-self.max_y, self.max_y),
        )
    }

    pub fn contains(&self, offset: Vec2) -> bool {
        offset.x.abs() <= self.max_x && offset.y.abs() <= self.max_y
    }
}

/// Clamp a proposed offset against the bounds of `screen`.
pub fn clamp_offset(offset: Vec2, screen: Size) -> Vec2 {
    ClampBounds::for_screen(screen).clamp(offset)
}

/// An axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The square bounding a circle of `diameter` centered on `screen`.
    pub fn centered_square(screen: Size, diameter: f64) -> Self {
        Self {
            x: (screen.width - diameter) / 2.0,
            y: (screen.height - diameter) / 2.0,
            width: diameter,
            height: diameter,
        }
    }
}
