//! WASM-compatible wrapper types for image data.
//!
//! Picked photos, previews and finished avatars all cross the boundary as
//! `JsDecodedImage`, an RGB buffer plus dimensions.

use avatar_core::decode::{DecodedImage, FilterType};
use avatar_core::transform::InterpolationFilter;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Wraps the core `DecodedImage`. Pixel data lives in WASM memory; `pixels()`
/// copies it out as a `Uint8Array`, and `to_rgba()` produces a buffer ready
/// for `new ImageData(...)` on a canvas.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns opaque RGBA pixel data for canvas `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for chunk in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(chunk);
            rgba.push(255);
        }
        rgba
    }
}

impl JsDecodedImage {
    /// Create a JsDecodedImage from a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage (clones the pixel data).
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert a u8 filter type value to the core resize FilterType.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Same mapping as [`filter_from_u8`], for avatar rendering.
pub(crate) fn interpolation_from_u8(value: u8) -> InterpolationFilter {
    match value {
        0 => InterpolationFilter::Nearest,
        2 => InterpolationFilter::Lanczos3,
        _ => InterpolationFilter::Bilinear,
    }
}
