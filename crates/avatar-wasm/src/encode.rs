//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_jpeg_from_image`] - Encode a JsDecodedImage to JPEG bytes
//! - [`encode_png_from_image`] - Encode a JsDecodedImage to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! const avatar = editor.confirm();
//! if (avatar) {
//!   const png = encode_png_from_image(avatar);
//!   img.src = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! }
//! ```

use crate::types::JsDecodedImage;
use avatar_core::encode::{self, AvatarFormat};
use wasm_bindgen::prelude::*;

/// Encode an image to JPEG bytes.
///
/// `quality` is clamped to 1-100; 90 is a good default for avatars.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_decoded(), AvatarFormat::Jpeg { quality })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to lossless PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_decoded(), AvatarFormat::Png)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
