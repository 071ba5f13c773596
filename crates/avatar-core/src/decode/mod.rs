//! Decoding of picked photos into RGB bitmaps.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG bytes with EXIF orientation correction
//! - Adapting picker output, where a failed decode means "nothing picked"
//! - Resizing oversized sources before they enter the editor
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use avatar_core::decode::{decode_image, DecodedImage};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod picked;
mod resize;
mod types;

pub use picked::{decode_image, load_picked_image};
pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
