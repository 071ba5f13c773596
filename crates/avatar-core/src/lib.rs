//! Avatar Core - crop editor library
//!
//! This crate provides the core of the profile avatar editor: the gesture
//! driven crop transform, the editing session state machine, analytic
//! rendering of the circular avatar, and decoding/encoding of the images
//! around it.

pub mod config;
pub mod controller;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod mask;
pub mod session;
pub mod transform;

pub use config::{ConfigError, EditorConfig};
pub use controller::{CropController, CropTransform};
pub use decode::{DecodeError, DecodedImage};
pub use encode::{AvatarFormat, EncodeError};
pub use geometry::{clamp_offset, ClampBounds, Size, Vec2};
pub use session::{EditorSession, EditorState};
pub use transform::{render_avatar, render_preview, InterpolationFilter};
