//! Application configuration.
//!
//! Defaults describe the stock scene; an optional JSON file (passed as
//! the first CLI argument) overrides individual fields. Every field has a
//! serde default, so a partial file like `{"rings": 60}` is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SculptError;
use crate::render::MAX_POINT_LIGHTS;
use crate::sculpture;

/// Top-level configuration, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Horizontal cross-sections along the sculpture's height.
    pub rings: u32,
    /// Samples around each ring.
    pub segments: u32,
    /// Orbiting point lights.
    pub point_lights: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Kinetic Sculpture — Multiple Lights".to_string(),
            width: 1280,
            height: 720,
            rings: 140,
            segments: 180,
            point_lights: 4,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file, or fall back to defaults when no path is
    /// given. The result is always validated.
    pub fn load(path: Option<&Path>) -> Result<Self, SculptError> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| {
                    SculptError::ConfigRead {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                let config: AppConfig =
                    serde_json::from_str(&text).map_err(|source| SculptError::ConfigParse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                log::info!("loaded config from {}", path.display());
                config
            }
            None => Self::default(),
        };
        config.validate()?;

        if config.point_lights > MAX_POINT_LIGHTS {
            log::warn!(
                "point_lights = {} exceeds the shader limit of {}, clamping",
                config.point_lights,
                MAX_POINT_LIGHTS
            );
            config.point_lights = MAX_POINT_LIGHTS;
        }

        Ok(config)
    }

    fn validate(&self) -> Result<(), SculptError> {
        sculpture::validate_grid(self.rings, self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_stock_scene() {
        let config = AppConfig::default();
        assert_eq!(config.rings, 140);
        assert_eq!(config.segments, 180);
        assert_eq!(config.point_lights, 4);
        assert_eq!((config.width, config.height), (1280, 720));
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"rings": 60}"#).unwrap();
        assert_eq!(config.rings, 60);
        assert_eq!(config.segments, 180);
        assert_eq!(config.point_lights, 4);
    }

    #[test]
    fn load_without_a_path_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.rings, 140);
    }

    #[test]
    fn load_rejects_a_degenerate_grid() {
        let dir = std::env::temp_dir();
        let path = dir.join("kinetica_bad_grid.json");
        std::fs::write(&path, r#"{"rings": 1}"#).unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            SculptError::InvalidGridDimensions { rings: 1, .. }
        ));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_clamps_excess_point_lights() {
        let dir = std::env::temp_dir();
        let path = dir.join("kinetica_many_lights.json");
        std::fs::write(&path, r#"{"point_lights": 99}"#).unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.point_lights, MAX_POINT_LIGHTS);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/kinetica.json"))).unwrap_err();
        assert!(matches!(err, SculptError::ConfigRead { .. }));
    }
}
