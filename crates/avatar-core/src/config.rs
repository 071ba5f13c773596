//! Editor configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;
use crate::transform::InterpolationFilter;

/// Default crop circle diameter in screen units.
pub const DEFAULT_CIRCLE_DIAMETER: f64 = 300.0;

/// Default opacity of the dimming overlay outside the crop circle.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.4;

/// Sources larger than this on their longest edge are downscaled when picked.
pub const DEFAULT_MAX_SOURCE_EDGE: u32 = 4096;

/// Errors for invalid editor configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid screen size: {width}x{height} (both must be finite and positive)")]
    InvalidScreen { width: f64, height: f64 },

    #[error("Invalid circle diameter: {0} (must be finite and positive)")]
    InvalidDiameter(f64),

    #[error("Circle diameter {diameter} does not fit on a {width}x{height} screen")]
    DiameterExceedsScreen {
        diameter: f64,
        width: f64,
        height: f64,
    },

    #[error("Overlay opacity {0} is outside 0.0..=1.0")]
    InvalidOpacity(f32),

    #[error("Maximum source edge must be non-zero")]
    InvalidMaxSourceEdge,
}

/// Settings for an editing session.
///
/// All fields have defaults, so a partial serialized config is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Screen size in screen units; clamp bounds are half of it.
    pub screen: Size,
    /// Diameter of the circular viewport, also the avatar's pixel size.
    pub circle_diameter: f64,
    /// Opacity of the black overlay drawn outside the circle (0.0 to 1.0).
    pub overlay_opacity: f32,
    /// Color shown where the transformed source does not cover the screen.
    pub background: [u8; 3],
    /// Resampling used when rendering the avatar.
    pub filter: InterpolationFilter,
    /// Longest edge a picked source is kept at.
    pub max_source_edge: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            screen: Size::new(390.0, 844.0),
            circle_diameter: DEFAULT_CIRCLE_DIAMETER,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            background: [0, 0, 0],
            filter: InterpolationFilter::Bilinear,
            max_source_edge: DEFAULT_MAX_SOURCE_EDGE,
        }
    }
}

impl EditorConfig {
    /// Default settings for a screen of the given size.
    pub fn for_screen(width: f64, height: f64) -> Self {
        Self {
            screen: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Output avatar edge length in pixels.
    pub fn avatar_size(&self) -> u32 {
        self.circle_diameter.round().max(1.0) as u32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.screen.is_valid() {
            return Err(ConfigError::InvalidScreen {
                width: self.screen.width,
                height: self.screen.height,
            });
        }
        if !self.circle_diameter.is_finite() || self.circle_diameter <= 0.0 {
            return Err(ConfigError::InvalidDiameter(self.circle_diameter));
        }
        if self.circle_diameter > self.screen.width || self.circle_diameter > self.screen.height {
            return Err(ConfigError::DiameterExceedsScreen {
                diameter: self.circle_diameter,
                width: self.screen.width,
                height: self.screen.height,
            });
        }
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(ConfigError::InvalidOpacity(self.overlay_opacity));
        }
        if self.max_source_edge == 0 {
            return Err(ConfigError::InvalidMaxSourceEdge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.avatar_size(), 300);
    }

    #[test]
    fn test_invalid_screen() {
        let config = EditorConfig::for_screen(0.0, 800.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_invalid_diameter() {
        let mut config = EditorConfig::default();
        config.circle_diameter = -5.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDiameter(-5.0)));

        config.circle_diameter = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDiameter(_))
        ));
    }

    #[test]
    fn test_diameter_larger_than_screen() {
        let mut config = EditorConfig::for_screen(200.0, 800.0);
        config.circle_diameter = 250.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DiameterExceedsScreen { .. })
        ));
    }

    #[test]
    fn test_invalid_opacity() {
        let mut config = EditorConfig::default();
        config.overlay_opacity = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidOpacity(1.5)));
    }

    #[test]
    fn test_zero_max_source_edge() {
        let mut config = EditorConfig::default();
        config.max_source_edge = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxSourceEdge));
    }

    #[test]
    fn test_avatar_size_rounds() {
        let mut config = EditorConfig::default();
        config.circle_diameter = 120.6;
        assert_eq!(config.avatar_size(), 121);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidOpacity(2.0);
        assert_eq!(err.to_string(), "Overlay opacity 2 is outside 0.0..=1.0");
    }
}
