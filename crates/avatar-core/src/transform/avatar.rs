//! Analytic avatar rendering.
//!
//! The editor shows the source *scaled to fill* the screen, then applies the
//! crop transform (scale about the screen center, then offset). Instead of
//! snapshotting what is on screen, each output pixel is mapped back through
//! that chain into source coordinates and sampled directly.
//!
//! # Coordinate chain
//!
//! ```text
//! source px --(fill, centered)--> layout --(scale about center, + offset)--> screen
//! ```
//!
//! For a screen point `p` the inverse is:
//!
//! ```text
//! q   = (p - screen_center - offset) / scale
//! src = q / fill + source_center
//! ```

use crate::config::EditorConfig;
use crate::controller::CropTransform;
use crate::decode::DecodedImage;
use crate::geometry::{Rect, Size, Vec2};
use crate::mask::{apply_viewport_overlay, CircleMask};

use super::sample::{sample, InterpolationFilter};

/// Width of the anti-aliased circle edge, in output pixels.
const CIRCLE_EDGE_FEATHER: f32 = 1.0;

/// Placement of a source image scaled to fill a screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillLayout {
    /// Uniform factor from source pixels to screen units at scale 1.
    pub fill: f64,
    source_center: Vec2,
    screen_center: Vec2,
}

impl FillLayout {
    /// Layout for a `source_width` x `source_height` image on `screen`.
    ///
    /// Returns `None` for an empty source or an invalid screen.
    pub fn new(source_width: u32, source_height: u32, screen: Size) -> Option<Self> {
        if source_width == 0 || source_height == 0 || !screen.is_valid() {
            return None;
        }
        let (w, h) = (source_width as f64, source_height as f64);
        Some(Self {
            fill: (screen.width / w).max(screen.height / h),
            source_center: Vec2::new(w / 2.0, h / 2.0),
            screen_center: screen.center(),
        })
    }

    /// Map a screen point to fractional source pixel coordinates.
    pub fn screen_to_source(&self, point: Vec2, transform: &CropTransform) -> Vec2 {
        let k = transform.scale * self.fill;
        let rel = point - self.screen_center - transform.offset;
        Vec2::new(
            rel.x / k + self.source_center.x,
            rel.y / k + self.source_center.y,
        )
    }

    /// Map source pixel coordinates to a screen point.
    pub fn source_to_screen(&self, point: Vec2, transform: &CropTransform) -> Vec2 {
        let k = transform.scale * self.fill;
        let rel = point - self.source_center;
        Vec2::new(
            rel.x * k + self.screen_center.x + transform.offset.x,
            rel.y * k + self.screen_center.y + transform.offset.y,
        )
    }
}

/// Render the screen region `region` into a `out_width` x `out_height` bitmap.
///
/// Pixels whose preimage falls outside the source get `background`. A
/// non-positive or non-finite scale renders background only.
#[allow(clippy::too_many_arguments)]
pub fn render_region(
    source: &DecodedImage,
    transform: &CropTransform,
    screen: Size,
    region: Rect,
    out_width: u32,
    out_height: u32,
    background: [u8; 3],
    filter: InterpolationFilter,
) -> DecodedImage {
    let mut output: Vec<u8> = background
        .iter()
        .copied()
        .cycle()
        .take((out_width as usize) * (out_height as usize) * 3)
        .collect();

    let layout = match FillLayout::new(source.width, source.height, screen) {
        Some(layout) if transform.scale.is_finite() && transform.scale > 0.0 => layout,
        _ => return DecodedImage::new(out_width, out_height, output),
    };

    let step_x = region.width / out_width.max(1) as f64;
    let step_y = region.height / out_height.max(1) as f64;

    for oy in 0..out_height {
        let screen_y = region.y + (oy as f64 + 0.5) * step_y;
        let row_start = (oy as usize) * (out_width as usize) * 3;

        for ox in 0..out_width {
            let screen_x = region.x + (ox as f64 + 0.5) * step_x;
            let src = layout.screen_to_source(Vec2::new(screen_x, screen_y), transform);

            if let Some(pixel) = sample(source, src.x, src.y, filter) {
                let idx = row_start + (ox as usize) * 3;
                output[idx..idx + 3].copy_from_slice(&pixel);
            }
        }
    }

    DecodedImage::new(out_width, out_height, output)
}

/// Render the committed avatar: the square bounding the viewport circle.
///
/// The result is `config.avatar_size()` pixels square and shows exactly what
/// the editor shows inside that square, including the dimmed corners.
pub fn render_avatar(
    source: &DecodedImage,
    transform: &CropTransform,
    config: &EditorConfig,
) -> DecodedImage {
    let size = config.avatar_size();
    let region = Rect::centered_square(config.screen, config.circle_diameter);

    let mut avatar = render_region(
        source,
        transform,
        config.screen,
        region,
        size,
        size,
        config.background,
        config.filter,
    );

    let mask = CircleMask::inscribed(size, size);
    apply_viewport_overlay(
        &mut avatar.pixels,
        size,
        size,
        &mask,
        [0, 0, 0],
        config.overlay_opacity,
    );

    avatar
}

/// Render the whole editor screen at one pixel per screen unit.
///
/// This is the composition the user sees while editing: the transformed
/// source over the background, dimmed outside the viewport circle.
pub fn render_preview(
    source: &DecodedImage,
    transform: &CropTransform,
    config: &EditorConfig,
) -> DecodedImage {
    let width = config.screen.width.round().max(1.0) as u32;
    let height = config.screen.height.round().max(1.0) as u32;
    let region = Rect {
        x: 0.0,
        y: 0.0,
        width: config.screen.width,
        height: config.screen.height,
    };

    let mut preview = render_region(
        source,
        transform,
        config.screen,
        region,
        width,
        height,
        config.background,
        config.filter,
    );

    let px_per_unit = width as f64 / config.screen.width;
    let mask = CircleMask::new(
        width as f32 / 2.0,
        height as f32 / 2.0,
        (config.circle_diameter * px_per_unit / 2.0) as f32,
        CIRCLE_EDGE_FEATHER,
    );
    apply_viewport_overlay(
        &mut preview.pixels,
        width,
        height,
        &mask,
        [0, 0, 0],
        config.overlay_opacity,
    );

    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pixel value encodes position so content can be located after rendering.
    fn coordinate_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&[x as u8, y as u8, 0]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    fn config(width: f64, height: f64, diameter: f64) -> EditorConfig {
        let mut config = EditorConfig::for_screen(width, height);
        config.circle_diameter = diameter;
        config.filter = InterpolationFilter::Nearest;
        config
    }

    #[test]
    fn test_fill_layout_covers_screen() {
        let layout = FillLayout::new(100, 50, Size::new(200.0, 200.0)).unwrap();
        // Height is the constraint: 200 / 50 = 4
        assert_eq!(layout.fill, 4.0);

        let layout = FillLayout::new(50, 100, Size::new(200.0, 100.0)).unwrap();
        assert_eq!(layout.fill, 4.0);
    }

    #[test]
    fn test_fill_layout_rejects_empty() {
        assert!(FillLayout::new(0, 10, Size::new(10.0, 10.0)).is_none());
        assert!(FillLayout::new(10, 10, Size::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn test_mapping_round_trip() {
        let layout = FillLayout::new(64, 48, Size::new(390.0, 844.0)).unwrap();
        let t = CropTransform::new(1.7, Vec2::new(-33.0, 12.5));
        let p = Vec2::new(101.25, 402.0);

        let back = layout.source_to_screen(layout.screen_to_source(p, &t), &t);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_identity_maps_centers() {
        let layout = FillLayout::new(40, 80, Size::new(100.0, 200.0)).unwrap();
        let src = layout.screen_to_source(Vec2::new(50.0, 100.0), &CropTransform::IDENTITY);
        assert_eq!(src, Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_avatar_is_diameter_square() {
        let src = DecodedImage::solid(640, 480, [90, 90, 90]);
        let avatar = render_avatar(&src, &CropTransform::IDENTITY, &config(390.0, 844.0, 300.0));

        assert_eq!(avatar.width, 300);
        assert_eq!(avatar.height, 300);
        assert_eq!(avatar.pixels.len(), 300 * 300 * 3);
    }

    #[test]
    fn test_identity_crops_center_region() {
        // Source matches the screen 1:1, so fill = 1
        let src = coordinate_image(200, 200);
        let mut cfg = config(200.0, 200.0, 100.0);
        cfg.overlay_opacity = 0.0;

        let avatar = render_avatar(&src, &CropTransform::IDENTITY, &cfg);

        // Output (0, 0) samples screen (50.5, 50.5) -> source pixel (50, 50)
        assert_eq!(avatar.pixel(0, 0), Some([50, 50, 0]));
        assert_eq!(avatar.pixel(99, 99), Some([149, 149, 0]));
        assert_eq!(avatar.pixel(10, 70), Some([60, 120, 0]));
    }

    #[test]
    fn test_offset_shifts_content() {
        let src = coordinate_image(200, 200);
        let mut cfg = config(200.0, 200.0, 100.0);
        cfg.overlay_opacity = 0.0;

        let t = CropTransform::new(1.0, Vec2::new(20.0, -10.0));
        let avatar = render_avatar(&src, &t, &cfg);

        // Moving the image right by 20 shows content from 20 pixels further left
        assert_eq!(avatar.pixel(0, 0), Some([30, 60, 0]));
    }

    #[test]
    fn test_scale_zooms_about_center() {
        let src = coordinate_image(200, 200);
        let mut cfg = config(200.0, 200.0, 100.0);
        cfg.overlay_opacity = 0.0;

        let t = CropTransform::new(2.0, Vec2::ZERO);
        let avatar = render_avatar(&src, &t, &cfg);

        // Screen (50.5, 50.5) -> (50.5 - 100) / 2 + 100 = 75.25
        assert_eq!(avatar.pixel(0, 0), Some([75, 75, 0]));
        // Center stays put
        assert_eq!(avatar.pixel(50, 50), Some([100, 100, 0]));
    }

    #[test]
    fn test_uncovered_area_uses_background() {
        let src = DecodedImage::solid(100, 100, [255, 255, 255]);
        let mut cfg = config(100.0, 100.0, 100.0);
        cfg.overlay_opacity = 0.0;
        cfg.background = [1, 2, 3];

        // Shrunk image leaves the square's corners uncovered
        let t = CropTransform::new(0.5, Vec2::ZERO);
        let avatar = render_avatar(&src, &t, &cfg);

        assert_eq!(avatar.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(avatar.pixel(50, 50), Some([255, 255, 255]));
    }

    #[test]
    fn test_corners_dimmed_center_clear() {
        let src = DecodedImage::solid(300, 300, [200, 200, 200]);
        let avatar = render_avatar(&src, &CropTransform::IDENTITY, &config(300.0, 300.0, 300.0));

        assert_eq!(avatar.pixel(0, 0), Some([120, 120, 120]));
        assert_eq!(avatar.pixel(150, 150), Some([200, 200, 200]));
    }

    #[test]
    fn test_invalid_scale_renders_background() {
        let src = DecodedImage::solid(10, 10, [255, 255, 255]);
        let mut cfg = config(100.0, 100.0, 50.0);
        cfg.overlay_opacity = 0.0;

        let avatar = render_avatar(&src, &CropTransform::new(0.0, Vec2::ZERO), &cfg);
        assert!(avatar.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_preview_is_screen_sized() {
        let src = DecodedImage::solid(50, 80, [100, 100, 100]);
        let cfg = config(120.0, 200.0, 100.0);

        let preview = render_preview(&src, &CropTransform::IDENTITY, &cfg);

        assert_eq!((preview.width, preview.height), (120, 200));
        // Outside the circle: dimmed
        assert_eq!(preview.pixel(0, 0), Some([60, 60, 60]));
        // Screen center: inside the circle
        assert_eq!(preview.pixel(60, 100), Some([100, 100, 100]));
    }

    #[test]
    fn test_avatar_matches_preview_crop() {
        let src = coordinate_image(120, 240);
        let cfg = config(120.0, 240.0, 80.0);
        let t = CropTransform::new(1.25, Vec2::new(7.0, -3.0));

        let preview = render_preview(&src, &t, &cfg);
        let avatar = render_avatar(&src, &t, &cfg);

        // Crop square starts at screen (20, 80)
        for (x, y) in [(40, 40), (10, 35), (60, 20)] {
            assert_eq!(avatar.pixel(x, y), preview.pixel(20 + x, 80 + y));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the avatar is always diameter x diameter, whatever the transform.
        #[test]
        fn prop_avatar_dimensions(
            diameter in 10.0f64..=120.0,
            scale in 0.05f64..=20.0,
            dx in -200.0f64..=200.0,
            dy in -200.0f64..=200.0,
            (sw, sh) in (1u32..=60, 1u32..=60),
        ) {
            let src = DecodedImage::solid(sw, sh, [9, 9, 9]);
            let mut cfg = EditorConfig::for_screen(160.0, 300.0);
            cfg.circle_diameter = diameter;

            let avatar = render_avatar(&src, &CropTransform::new(scale, Vec2::new(dx, dy)), &cfg);
            let size = diameter.round() as u32;

            prop_assert_eq!(avatar.width, size);
            prop_assert_eq!(avatar.height, size);
            prop_assert_eq!(avatar.pixels.len(), (size * size * 3) as usize);
        }

        /// Property: screen/source mapping is invertible for valid transforms.
        #[test]
        fn prop_mapping_invertible(
            scale in 0.1f64..=10.0,
            dx in -500.0f64..=500.0,
            dy in -500.0f64..=500.0,
            px in 0.0f64..=400.0,
            py in 0.0f64..=800.0,
        ) {
            let layout = FillLayout::new(123, 77, Size::new(400.0, 800.0)).unwrap();
            let t = CropTransform::new(scale, Vec2::new(dx, dy));
            let p = Vec2::new(px, py);
            let back = layout.source_to_screen(layout.screen_to_source(p, &t), &t);

            prop_assert!((back.x - p.x).abs() < 1e-6);
            prop_assert!((back.y - p.y).abs() < 1e-6);
        }
    }
}
