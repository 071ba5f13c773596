//! Overlay compositing outside the viewport circle
//!
//! The editor draws a translucent layer over the whole screen with the crop
//! circle punched out of it. Blending per pixel:
//! `output = original * (1 - a) + color * a` with
//! `a = opacity * (1 - coverage)`.

use super::CircleMask;

/// Dim every pixel outside `mask` with `color` at `opacity`.
///
/// # Arguments
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Buffer width in pixels
/// * `height` - Buffer height in pixels
/// * `mask` - Viewport circle; covered pixels are left untouched
/// * `color` - Overlay color
/// * `opacity` - Overlay opacity (clamped to 0.0-1.0)
///
/// # Example
/// ```
/// use avatar_core::mask::{apply_viewport_overlay, CircleMask};
///
/// let mut pixels = vec![200u8; 10 * 10 * 3];
/// let mask = CircleMask::inscribed(10, 10);
/// apply_viewport_overlay(&mut pixels, 10, 10, &mask, [0, 0, 0], 0.4);
/// // Corners are darker, center unchanged
/// ```
pub fn apply_viewport_overlay(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    mask: &CircleMask,
    color: [u8; 3],
    opacity: f32,
) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || width == 0 || height == 0 {
        return;
    }

    let overlay = [color[0] as f32, color[1] as f32, color[2] as f32];

    for (idx, chunk) in pixels
        .chunks_exact_mut(3)
        .take((width * height) as usize)
        .enumerate()
    {
        let px = (idx as u32) % width;
        let py = (idx as u32) / width;

        let coverage = mask.evaluate(px as f32 + 0.5, py as f32 + 0.5);
        let alpha = opacity * (1.0 - coverage);

        // Fully inside the circle
        if alpha < 0.001 {
            continue;
        }

        for (c, o) in chunk.iter_mut().zip(overlay) {
            let v = *c as f32 * (1.0 - alpha) + o * alpha;
            *c = v.clamp(0.0, 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32, value: u8) -> Vec<u8> {
        vec![value; (width * height * 3) as usize]
    }

    fn get_pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8) {
        let idx = ((y * width + x) * 3) as usize;
        (pixels[idx], pixels[idx + 1], pixels[idx + 2])
    }

    #[test]
    fn test_zero_opacity_no_change() {
        let mut pixels = gray_image(20, 20, 128);
        let original = pixels.clone();
        let mask = CircleMask::inscribed(20, 20);

        apply_viewport_overlay(&mut pixels, 20, 20, &mask, [0, 0, 0], 0.0);

        assert_eq!(pixels, original);
    }

    #[test]
    fn test_corners_dimmed_center_untouched() {
        let mut pixels = gray_image(20, 20, 200);
        let mask = CircleMask::inscribed(20, 20);

        apply_viewport_overlay(&mut pixels, 20, 20, &mask, [0, 0, 0], 0.4);

        // 200 * 0.6 = 120
        assert_eq!(get_pixel(&pixels, 20, 0, 0), (120, 120, 120));
        assert_eq!(get_pixel(&pixels, 20, 19, 19), (120, 120, 120));
        assert_eq!(get_pixel(&pixels, 20, 10, 10), (200, 200, 200));
    }

    #[test]
    fn test_overlay_color_blend() {
        let mut pixels = gray_image(4, 4, 0);
        // Empty circle: everything is outside
        let mask = CircleMask::new(-100.0, -100.0, 1.0, 0.0);

        apply_viewport_overlay(&mut pixels, 4, 4, &mask, [255, 0, 100], 0.5);

        assert_eq!(get_pixel(&pixels, 4, 2, 2), (128, 0, 50));
    }

    #[test]
    fn test_full_opacity_replaces_outside() {
        let mut pixels = gray_image(10, 10, 90);
        let mask = CircleMask::new(5.0, 5.0, 2.0, 0.0);

        apply_viewport_overlay(&mut pixels, 10, 10, &mask, [7, 7, 7], 1.0);

        assert_eq!(get_pixel(&pixels, 10, 0, 0), (7, 7, 7));
        assert_eq!(get_pixel(&pixels, 10, 5, 5), (90, 90, 90));
    }

    #[test]
    fn test_edge_pixels_partially_dimmed() {
        let mut pixels = gray_image(100, 100, 200);
        let mask = CircleMask::new(50.0, 50.0, 40.0, 4.0);

        apply_viewport_overlay(&mut pixels, 100, 100, &mask, [0, 0, 0], 0.4);

        // Pixel center at distance 40 from the circle center: half coverage
        let (v, _, _) = get_pixel(&pixels, 100, 89, 49);
        assert!(v > 120 && v < 200, "Edge pixel should be partially dimmed, got {}", v);
    }
}
