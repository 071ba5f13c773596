//! Lossless PNG encoding.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{validate_rgb, EncodeError};

/// Encode RGB pixel data to PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_rgb(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let pixels = vec![10u8; 8 * 4 * 3];
        let png = encode_png(&pixels, 8, 4).unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let pixels: Vec<u8> = (0..5 * 3 * 3).map(|i| (i * 7) as u8).collect();
        let png = encode_png(&pixels, 5, 3).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgb8();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_png_rejects_bad_input() {
        assert!(matches!(
            encode_png(&[1, 2, 3], 2, 2),
            Err(EncodeError::InvalidPixelData { .. })
        ));
        assert!(matches!(
            encode_png(&[], 3, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }
}
