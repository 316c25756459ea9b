//! Course configuration for the planner.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Point, Waypoint};

/// Error from building or loading a [`CourseConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A parameter is out of its permitted range
    #[error("invalid course configuration: {0}")]
    Invalid(&'static str),

    /// The configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for this type
    #[error("failed to parse config {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Physical parameters of the course.
///
/// Passed by reference to every geometry and candidate computation, so
/// several courses can be solved side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    /// Side length of the square operating region (distance units).
    pub edge: u16,

    /// Travel speed (distance units per time unit).
    pub speed: f64,

    /// Dwell time charged for every departure from a visited stop.
    pub delay: f64,

    /// Smallest distance that may separate a candidate from a later query
    /// point. Zero is always safe; one is only valid when no two waypoints
    /// share a position and none sits on either corner.
    pub min_separation: f64,
}

impl CourseConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(edge: u16, speed: f64, delay: f64, min_separation: f64) -> Self {
        Self {
            edge,
            speed,
            delay,
            min_separation,
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all parameters are usable by the planner.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edge == 0 {
            return Err(ConfigError::Invalid("edge must be positive"));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::Invalid("speed must be finite and positive"));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ConfigError::Invalid(
                "delay must be finite and non-negative",
            ));
        }
        if !self.min_separation.is_finite()
            || self.min_separation < 0.0
            || self.min_separation > self.diagonal() / 2.0
        {
            // The centre is the point whose farthest corner is nearest
            return Err(ConfigError::Invalid(
                "min_separation must lie between zero and half the region diagonal",
            ));
        }
        Ok(())
    }

    /// Length of the region's diagonal.
    pub fn diagonal(&self) -> f64 {
        f64::from(self.edge) * std::f64::consts::SQRT_2
    }

    /// The implicit first waypoint, at the origin corner.
    pub fn start(&self) -> Waypoint {
        Waypoint::corner(Point::ORIGIN)
    }

    /// The implicit last waypoint, at the far corner.
    pub fn end(&self) -> Waypoint {
        Waypoint::corner(Point::new(self.edge, self.edge))
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            edge: 100,
            speed: 2.0,
            delay: 10.0,
            min_separation: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = CourseConfig::default();

        assert_eq!(config.edge, 100);
        assert_eq!(config.speed, 2.0);
        assert_eq!(config.delay, 10.0);
        assert_eq!(config.min_separation, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_config() {
        let config = CourseConfig::new(50, 1.5, 3.0, 1.0);

        assert_eq!(config.edge, 50);
        assert_eq!(config.speed, 1.5);
        assert_eq!(config.delay, 3.0);
        assert_eq!(config.min_separation, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn corners() {
        let config = CourseConfig::new(40, 1.0, 0.0, 0.0);

        assert_eq!(config.start(), Waypoint::corner(Point::new(0, 0)));
        assert_eq!(config.end(), Waypoint::corner(Point::new(40, 40)));
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad = [
            CourseConfig::new(0, 2.0, 10.0, 0.0),
            CourseConfig::new(100, 0.0, 10.0, 0.0),
            CourseConfig::new(100, -1.0, 10.0, 0.0),
            CourseConfig::new(100, f64::NAN, 10.0, 0.0),
            CourseConfig::new(100, f64::INFINITY, 10.0, 0.0),
            CourseConfig::new(100, 2.0, -0.5, 0.0),
            CourseConfig::new(100, 2.0, f64::NAN, 0.0),
            CourseConfig::new(100, 2.0, 10.0, -1.0),
            CourseConfig::new(100, 2.0, 10.0, 500.0),
            CourseConfig::new(100, 2.0, 10.0, 100.0),
        ];

        for config in bad {
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "accepted {config:?}"
            );
        }
    }

    #[test]
    fn diagonal_of_default_region() {
        let config = CourseConfig::default();
        assert!((config.diagonal() - 141.421_356_237).abs() < 1e-6);
    }

    #[test]
    fn load_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speed": 4.0, "delay": 2.5 }}"#).unwrap();

        let config = CourseConfig::from_json_file(file.path()).unwrap();

        assert_eq!(config.edge, 100);
        assert_eq!(config.speed, 4.0);
        assert_eq!(config.delay, 2.5);
        assert_eq!(config.min_separation, 0.0);
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "velocity": 4.0 }}"#).unwrap();

        let result = CourseConfig::from_json_file(file.path());
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speed": 0.0 }}"#).unwrap();

        let result = CourseConfig::from_json_file(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CourseConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn serde_roundtrip() {
        let config = CourseConfig::new(64, 3.0, 1.0, 1.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: CourseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
