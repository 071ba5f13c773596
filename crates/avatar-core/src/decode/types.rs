//! Bitmap and decoding types shared by the editor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are empty or not in a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Resampling used when a picked photo is shrunk before editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    Nearest,
    #[default]
    Bilinear,
    Lanczos3,
}

impl FilterType {
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// How a camera photo must be turned upright, from its EXIF `Orientation` tag.
///
/// Phones store portrait shots sideways and record the rotation here, so a
/// picked photo has to be corrected before the user starts framing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    Transpose = 5,
    Rotate90CW = 6,
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    /// Unknown tag values are treated as upright.
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    ///
    /// Buffers arriving from JavaScript are not guaranteed to match the
    /// dimensions; check [`DecodedImage::is_well_formed`] before sampling.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), Self::expected_len(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image filled with a single color.
    pub fn solid(width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(Self::expected_len(width, height))
            .collect();
        Self::new(width, height, pixels)
    }

    /// RGB value at (`x`, `y`), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        match self.pixels.get(idx..idx + 3) {
            Some(&[r, g, b]) => Some([r, g, b]),
            _ => None,
        }
    }

    /// Byte length of an RGB buffer for the given dimensions.
    pub fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }

    /// Non-empty, with exactly three bytes per pixel.
    pub fn is_well_formed(&self) -> bool {
        !self.is_empty() && self.pixels.len() == Self::expected_len(self.width, self.height)
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// True when either dimension or the buffer is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_orientation_from_exif_tag() {
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(8), Orientation::Rotate270CW);
        // 0 and out-of-range tags keep the photo as stored
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(42), Orientation::Normal);
    }

    #[test]
    fn test_solid_image() {
        let img = DecodedImage::solid(4, 3, [10, 20, 30]);
        assert_eq!(img.pixels.len(), 36);
        assert_eq!(img.pixel(3, 2), Some([10, 20, 30]));
        assert_eq!(img.pixel(4, 0), None);
        assert!(img.is_well_formed());
    }

    #[test]
    fn test_short_buffer_is_not_well_formed() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0; 5],
        };
        assert!(!img.is_empty());
        assert!(!img.is_well_formed());
        // Reading past the buffer yields nothing instead of panicking
        assert_eq!(img.pixel(9, 9), None);
    }

    #[test]
    fn test_empty_image() {
        let img = DecodedImage::new(0, 0, vec![]);
        assert!(img.is_empty());
        assert!(!img.is_well_formed());
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let img = DecodedImage::solid(5, 2, [1, 2, 3]);
        let back = DecodedImage::from_rgb_image(img.to_rgb_image().unwrap());
        assert_eq!(back, img);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("unexpected EOF".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: unexpected EOF");
    }
}
