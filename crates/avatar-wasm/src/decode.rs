//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode JPEG/PNG bytes, applying EXIF orientation
//! - [`resize`] - Resize an image to exact dimensions
//! - [`resize_to_fit`] - Shrink an image to a max edge, preserving aspect ratio
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, resize_to_fit } from '@avatar/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const small = resize_to_fit(image, 1024, 2); // Lanczos3 filter
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use avatar_core::decode;
use wasm_bindgen::prelude::*;

/// Decode JPEG or PNG bytes into an RGB image.
///
/// # Errors
///
/// Returns an error string if the bytes are not a supported image or are
/// corrupted. Use `JsAvatarEditor.load_picked_bytes` instead when a failed
/// decode should simply count as "nothing picked".
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
#[wasm_bindgen]
pub fn resize(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize(&image.to_decoded(), width, height, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Shrink an image so its longest edge is at most `max_edge`.
///
/// Images already within the limit are returned unchanged.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsDecodedImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    decode::resize_to_fit(&image.to_decoded(), max_edge, filter_from_u8(filter))
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
