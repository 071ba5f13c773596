//! Encoding of the finished avatar.
//!
//! This module provides functionality for:
//! - Encoding RGB pixels to JPEG with configurable quality
//! - Encoding RGB pixels to lossless PNG
//!
//! # Examples
//!
//! ```ignore
//! use avatar_core::encode::{encode_image, AvatarFormat};
//!
//! let bytes = encode_image(&avatar, AvatarFormat::Jpeg { quality: 90 }).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Errors that can occur while encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output container for an encoded avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarFormat {
    Jpeg { quality: u8 },
    Png,
}

impl Default for AvatarFormat {
    fn default() -> Self {
        AvatarFormat::Jpeg { quality: 90 }
    }
}

/// Encode a bitmap in the requested format.
pub fn encode_image(image: &DecodedImage, format: AvatarFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        AvatarFormat::Jpeg { quality } => {
            encode_jpeg(&image.pixels, image.width, image.height, quality)
        }
        AvatarFormat::Png => encode_png(&image.pixels, image.width, image.height),
    }
}

/// Check dimensions and buffer length before handing pixels to an encoder.
fn validate_rgb(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_image_formats() {
        let img = DecodedImage::solid(12, 12, [200, 100, 50]);

        let jpeg = encode_image(&img, AvatarFormat::default()).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let png = encode_image(&img, AvatarFormat::Png).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_validate_rgb() {
        assert!(validate_rgb(&[0; 12], 2, 2).is_ok());
        assert!(matches!(
            validate_rgb(&[0; 11], 2, 2),
            Err(EncodeError::InvalidPixelData {
                expected: 12,
                actual: 11
            })
        ));
        assert!(matches!(
            validate_rgb(&[], 0, 2),
            Err(EncodeError::InvalidDimensions { width: 0, height: 2 })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = EncodeError::InvalidDimensions { width: 0, height: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (5) must be non-zero"
        );
    }
}
