//! Resizing of picked sources.
//!
//! Camera photos are routinely several times larger than the avatar the editor
//! produces. Sources are bounded on their longest edge before editing so that
//! every render samples a reasonably sized buffer. Backed by
//! `image::imageops`.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for a zero target dimension and
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Shrink an image so its longest edge is at most `max_edge`, keeping aspect ratio.
///
/// Images already within the limit are returned unchanged; this never upscales.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if `max_edge` is zero.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (width, height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, width, height, filter)
}

/// Dimensions with the longest edge equal to `max_edge`, each at least 1.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let longest = width.max(height) as f64;
    let factor = max_edge as f64 / longest;
    let w = (width as f64 * factor).round() as u32;
    let h = (height as f64 * factor).round() as u32;
    (w.clamp(1, max_edge), h.clamp(1, max_edge))
}
