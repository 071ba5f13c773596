//! Decoding of photo-picker output with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;
use log::{debug, warn};

use super::{DecodeError, DecodedImage, Orientation};

/// Decode image bytes (JPEG or PNG), applying EXIF orientation correction.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes as delivered by the picker
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are empty or the format
/// cannot be recognized, and `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(oriented.into_rgb8()))
}

/// Turn picker bytes into a source image, or `None` if nothing usable was picked.
///
/// A decode failure is not surfaced to the user: it is logged and treated
/// the same as a cancelled pick.
pub fn load_picked_image(bytes: &[u8]) -> Option<DecodedImage> {
    match decode_image(bytes) {
        Ok(img) if !img.is_empty() => {
            debug!("Picked image decoded: {}x{}", img.width, img.height);
            Some(img)
        }
        Ok(_) => {
            warn!("Picked image decoded to an empty bitmap");
            None
        }
        Err(e) => {
            warn!("Picked image could not be decoded: {}", e);
            None
        }
    }
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Returns `Orientation::Normal` if no EXIF data is found.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
