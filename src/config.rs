//! Detection tuning constants, loaded once at startup.

use crate::error::ConfigError;
use crate::models::TapeOrientation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inclusive HSV bounds on the 8-bit scale (hue 0..180, saturation and value 0..=255).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| hsv[i] >= self.lower[i] && hsv[i] <= self.upper[i])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub range: HsvRange,
    /// Gaussian sigma applied before thresholding. Values <= 0 disable smoothing.
    pub blur_sigma: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            range: HsvRange {
                lower: [40, 100, 100],
                upper: [90, 255, 255],
            },
            // sigma OpenCV derives for a 5x5 kernel
            blur_sigma: 1.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Contours must enclose strictly more than this many square pixels.
    pub min_area: f64,
    /// Polygon approximation tolerance as a fraction of the contour perimeter.
    pub epsilon_fraction: f64,
    pub vertex_count: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            min_area: 1000.0,
            epsilon_fraction: 0.1,
            vertex_count: 4,
        }
    }
}

/// Expected tilt and height/width ratio of one tape orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapeBand {
    pub angle_deg: f64,
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    pub right_tilt: TapeBand,
    pub left_tilt: TapeBand,
    pub angle_tolerance: f64,
    pub ratio_tolerance: f64,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            right_tilt: TapeBand {
                angle_deg: 14.5,
                aspect_ratio: 2.75,
            },
            left_tilt: TapeBand {
                angle_deg: 75.5,
                aspect_ratio: 0.36,
            },
            angle_tolerance: 8.0,
            ratio_tolerance: 0.5,
        }
    }
}

impl OrientationConfig {
    pub fn band(&self, orientation: TapeOrientation) -> TapeBand {
        match orientation {
            TapeOrientation::RightTilt => self.right_tilt,
            TapeOrientation::LeftTilt => self.left_tilt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Expected tape slant height over horizontal tape separation.
    pub distance_ratio: f64,
    pub tolerance: f64,
    /// Candidates beyond this count are dropped before pairing.
    pub max_candidates: usize,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            distance_ratio: 0.73125,
            tolerance: 1.0,
            max_candidates: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    pub left_threshold: f32,
    pub right_threshold: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            left_threshold: 0.45,
            right_threshold: 0.55,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub color: ColorConfig,
    pub shape: ShapeConfig,
    pub orientation: OrientationConfig,
    pub pairing: PairingConfig,
    pub steering: SteeringConfig,
}

impl DetectionConfig {
    /// Load a JSON config file. Missing sections and fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = &self.color.range;
        if (0..3).any(|i| range.lower[i] > range.upper[i]) {
            return Err(ConfigError::Invalid(format!(
                "HSV lower bound {:?} exceeds upper bound {:?}",
                range.lower, range.upper
            )));
        }
        if range.upper[0] > 180 {
            return Err(ConfigError::Invalid("Hue bound must be at most 180".to_string()));
        }

        let shape = &self.shape;
        if shape.min_area < 0.0 {
            return Err(ConfigError::Invalid("min_area must be non-negative".to_string()));
        }
        if shape.epsilon_fraction <= 0.0 {
            return Err(ConfigError::Invalid("epsilon_fraction must be positive".to_string()));
        }
        if shape.vertex_count < 3 {
            return Err(ConfigError::Invalid("vertex_count must be at least 3".to_string()));
        }

        let orient = &self.orientation;
        if orient.angle_tolerance <= 0.0 || orient.ratio_tolerance <= 0.0 {
            return Err(ConfigError::Invalid("Orientation tolerances must be positive".to_string()));
        }
        let angle_gap = (orient.right_tilt.angle_deg - orient.left_tilt.angle_deg).abs();
        if angle_gap < 2.0 * orient.angle_tolerance {
            return Err(ConfigError::Invalid(format!(
                "Angle bands overlap ({} and {} with tolerance {})",
                orient.right_tilt.angle_deg, orient.left_tilt.angle_deg, orient.angle_tolerance
            )));
        }
        let ratio_gap = (orient.right_tilt.aspect_ratio - orient.left_tilt.aspect_ratio).abs();
        if ratio_gap < 2.0 * orient.ratio_tolerance {
            return Err(ConfigError::Invalid(format!(
                "Ratio bands overlap ({} and {} with tolerance {})",
                orient.right_tilt.aspect_ratio, orient.left_tilt.aspect_ratio, orient.ratio_tolerance
            )));
        }

        if self.pairing.tolerance <= 0.0 {
            return Err(ConfigError::Invalid("Pairing tolerance must be positive".to_string()));
        }
        if self.pairing.max_candidates < 2 {
            return Err(ConfigError::Invalid("max_candidates must allow at least one pair".to_string()));
        }

        let steering = &self.steering;
        if !(0.0..=1.0).contains(&steering.left_threshold)
            || !(0.0..=1.0).contains(&steering.right_threshold)
            || steering.left_threshold > steering.right_threshold
        {
            return Err(ConfigError::Invalid(format!(
                "Steering thresholds must satisfy 0 <= left ({}) <= right ({}) <= 1",
                steering.left_threshold, steering.right_threshold
            )));
        }

        Ok(())
    }
}
