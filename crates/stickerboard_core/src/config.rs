//! Editor configuration.
//!
//! # Responsibility
//! - Hold tunables for overlay size, pinch scale range and perspective.
//! - Parse host-provided JSON configuration with per-field defaults.
//!
//! # Invariants
//! - A constructed `ScaleRange` always satisfies `0 < min <= max`, both finite.
//! - `EditorConfig::default()` always passes `validate()`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Edge length of a freshly added overlay, in canvas units.
pub const DEFAULT_OVERLAY_DIAMETER: f64 = 80.0;
/// Smallest scale a pinch gesture can commit.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// Largest scale a pinch gesture can commit.
pub const DEFAULT_MAX_SCALE: f64 = 10.0;
/// Perspective distance handed to renderers.
pub const DEFAULT_PERSPECTIVE: f64 = 200.0;

/// Configuration validation and parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidOverlayDiameter(f64),
    InvalidPerspective(f64),
    InvalidScaleRange { min: f64, max: f64 },
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOverlayDiameter(value) => {
                write!(f, "overlay_diameter must be finite and > 0, got {value}")
            }
            Self::InvalidPerspective(value) => {
                write!(f, "perspective must be finite and > 0, got {value}")
            }
            Self::InvalidScaleRange { min, max } => write!(
                f,
                "scale_range must satisfy 0 < min <= max with finite bounds, got [{min}, {max}]"
            ),
            Self::Parse(message) => write!(f, "invalid editor config: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Inclusive bounds for overlay scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScaleRange")]
pub struct ScaleRange {
    min: f64,
    max: f64,
}

impl ScaleRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
        if !valid {
            return Err(ConfigError::InvalidScaleRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `value` into the range. A NaN input resolves to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

#[derive(Deserialize)]
struct RawScaleRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawScaleRange> for ScaleRange {
    type Error = ConfigError;

    fn try_from(value: RawScaleRange) -> Result<Self, Self::Error> {
        Self::new(value.min, value.max)
    }
}

/// Tunables for one editor session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub overlay_diameter: f64,
    pub scale_range: ScaleRange,
    pub perspective: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            overlay_diameter: DEFAULT_OVERLAY_DIAMETER,
            scale_range: ScaleRange::default(),
            perspective: DEFAULT_PERSPECTIVE,
        }
    }
}

impl EditorConfig {
    /// Parses a JSON document and validates the result.
    ///
    /// Missing fields fall back to their defaults; an empty object yields
    /// `EditorConfig::default()`.
    ///
    /// # Errors
    /// - Returns `Parse` for malformed JSON or an invalid `scale_range`.
    /// - Returns the first failing field check from `validate()`.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.overlay_diameter.is_finite() && self.overlay_diameter > 0.0) {
            return Err(ConfigError::InvalidOverlayDiameter(self.overlay_diameter));
        }
        if !(self.perspective.is_finite() && self.perspective > 0.0) {
            return Err(ConfigError::InvalidPerspective(self.perspective));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, EditorConfig, ScaleRange, DEFAULT_OVERLAY_DIAMETER};

    #[test]
    fn default_config_is_valid() {
        EditorConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let config = EditorConfig::from_json_str("{}").expect("empty object should parse");
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = EditorConfig::from_json_str(r#"{"overlay_diameter": 120.0}"#)
            .expect("partial config should parse");
        assert_eq!(config.overlay_diameter, 120.0);
        assert_eq!(config.scale_range, ScaleRange::default());
        assert_ne!(config.overlay_diameter, DEFAULT_OVERLAY_DIAMETER);
    }

    #[test]
    fn rejects_inverted_scale_range() {
        let err = EditorConfig::from_json_str(r#"{"scale_range": {"min": 4.0, "max": 2.0}}"#)
            .expect_err("inverted range must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("scale_range"));
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let err = EditorConfig::from_json_str(r#"{"overlay_diameter": 0.0}"#)
            .expect_err("zero diameter must fail");
        assert_eq!(err, ConfigError::InvalidOverlayDiameter(0.0));
    }

    #[test]
    fn scale_range_clamps_both_ends() {
        let range = ScaleRange::new(0.5, 4.0).expect("valid range");
        assert_eq!(range.clamp(0.1), 0.5);
        assert_eq!(range.clamp(9.0), 4.0);
        assert_eq!(range.clamp(2.0), 2.0);
        assert_eq!(range.clamp(f64::NAN), 0.5);
        assert!(ScaleRange::new(0.0, 1.0).is_err());
        assert!(ScaleRange::new(1.0, f64::INFINITY).is_err());
    }
}
