//! Rendering of the crop transform into bitmaps.
//!
//! # Coordinate System
//!
//! - Screen coordinates are in screen units with the origin at the top-left
//! - Crop offsets are measured from the screen center
//! - Source coordinates are in pixels with pixel centers at `i + 0.5`

mod avatar;
mod sample;

pub use avatar::{render_avatar, render_preview, render_region, FillLayout};
pub use sample::{sample, InterpolationFilter};
