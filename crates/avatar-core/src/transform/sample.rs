//! Pixel sampling with nearest, bilinear and Lanczos3 interpolation.
//!
//! The avatar renderer uses inverse mapping: for each output pixel it computes
//! a fractional source coordinate and asks this module for the color there.
//! Coordinates are in source pixel space with pixel centers at `i + 0.5`.

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// Interpolation filter for resampling the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationFilter {
    /// Nearest neighbor - fastest, blocky when zoomed in.
    Nearest,
    /// Bilinear interpolation - good for live preview.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation - sharper, slower.
    Lanczos3,
}

/// Sample `image` at the fractional position (`x`, `y`).
///
/// Returns `None` when the position lies outside the image rectangle
/// `[0, width) x [0, height)`, so the caller can fill with a background color.
pub fn sample(image: &DecodedImage, x: f64, y: f64, filter: InterpolationFilter) -> Option<[u8; 3]> {
    if !image.is_well_formed() {
        return None;
    }
    if x < 0.0 || y < 0.0 || x >= image.width as f64 || y >= image.height as f64 {
        return None;
    }

    // Shift from pixel-center convention to integer-grid convention
    let gx = x - 0.5;
    let gy = y - 0.5;

    Some(match filter {
        InterpolationFilter::Nearest => sample_nearest(image, x, y),
        InterpolationFilter::Bilinear => sample_bilinear(image, gx, gy),
        InterpolationFilter::Lanczos3 => sample_lanczos3(image, gx, gy),
    })
}

/// Get a pixel as [f64; 3] from an image at the given coordinates.
#[inline]
fn get_pixel_f64(image: &DecodedImage, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

#[inline]
fn get_pixel(image: &DecodedImage, px: usize, py: usize) -> [u8; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [image.pixels[idx], image.pixels[idx + 1], image.pixels[idx + 2]]
}

fn sample_nearest(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let px = (x.floor() as usize).min(image.width as usize - 1);
    let py = (y.floor() as usize).min(image.height as usize - 1);
    get_pixel(image, px, py)
}

/// Bilinear interpolation over the 4 nearest pixels, edge pixels extended.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let max_x = (image.width - 1) as f64;
    let max_y = (image.height - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(image.width as usize - 1);
    let y1 = (y0 + 1).min(image.height as usize - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

/// Lanczos3 interpolation over a 6x6 neighborhood.
///
/// Falls back to bilinear within the kernel radius of the border.
fn sample_lanczos3(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (image.width as i64, image.height as i64);

    if x < 2.0 || x >= (w - 3) as f64 || y < 2.0 || y >= (h - 3) as f64 {
        return sample_bilinear(image, x, y);
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 3];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        for kx in -2..=3 {
            let px = x0 + kx;
            let py = y0 + ky;

            if px >= 0 && px < w && py >= 0 && py < h {
                let dx = x - px as f64;
                let dy = y - py as f64;
                let weight = lanczos_weight(dx, 3.0) * lanczos_weight(dy, 3.0);

                let pixel = get_pixel_f64(image, px as usize, py as usize);
                sum[0] += pixel[0] * weight;
                sum[1] += pixel[1] * weight;
                sum[2] += pixel[2] * weight;
                weight_sum += weight;
            }
        }
    }

    let mut result = [0u8; 3];
    if weight_sum > 0.0 {
        for i in 0..3 {
            result[i] = (sum[i] / weight_sum).clamp(0.0, 255.0).round() as u8;
        }
    }

    result
}

/// Lanczos kernel: `sinc(x) * sinc(x/a)` for `|x| < a`, zero otherwise.
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}
