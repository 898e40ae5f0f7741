// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Slice configuration

use crate::error::SliceResult;
use crate::geometry::Plane;
use anyhow::{Context, Result};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file picked up by [`SliceConfig::load`]
pub const CONFIG_FILE: &str = "meshslice.toml";

/// Settings for a slice run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// A point on the cutting plane; `None` means the mesh bounding-box center
    pub plane_point: Option<[f64; 3]>,
    /// Cutting plane normal
    pub plane_normal: [f64; 3],
    /// Output path for the positive half
    pub positive_output: Option<PathBuf>,
    /// Output path for the negative half
    pub negative_output: Option<PathBuf>,
    /// Write ASCII STL instead of binary
    pub ascii: bool,
    /// Where to write the JSON slice report
    pub report: Option<PathBuf>,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            plane_point: None,
            plane_normal: [0.0, 0.0, 1.0],
            positive_output: None,
            negative_output: None,
            ascii: false,
            report: None,
        }
    }
}

impl SliceConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: SliceConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `meshslice.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `MESHSLICE_*` environment variable overrides
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(point) = std::env::var("MESHSLICE_PLANE_POINT") {
            self.plane_point = Some(parse_vec3(&point).context("Invalid MESHSLICE_PLANE_POINT")?);
        }

        if let Ok(normal) = std::env::var("MESHSLICE_PLANE_NORMAL") {
            self.plane_normal = parse_vec3(&normal).context("Invalid MESHSLICE_PLANE_NORMAL")?;
        }

        if let Ok(ascii) = std::env::var("MESHSLICE_ASCII") {
            self.ascii = matches!(ascii.trim(), "1" | "true" | "yes");
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Build the cutting plane, falling back to `center` for the point
    pub fn plane(&self, center: Point3<f64>) -> SliceResult<Plane> {
        let point = self.plane_point.map(Point3::from).unwrap_or(center);
        Plane::new(point, Vector3::from(self.plane_normal))
    }
}

/// Parse `"x,y,z"` into three floats
pub fn parse_vec3(text: &str) -> Result<[f64; 3]> {
    let parts = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Not a number: {:?}", part))
        })
        .collect::<Result<Vec<_>>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => anyhow::bail!("Expected three comma-separated values, got {:?}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SliceError;
    use crate::geometry::CuttingPlane;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("1, 2.5,-3").unwrap(), [1.0, 2.5, -3.0]);
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,a,3").is_err());
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let config = SliceConfig {
            plane_point: Some([1.0, 2.0, 3.0]),
            plane_normal: [0.0, 1.0, 0.0],
            positive_output: Some(PathBuf::from("top.stl")),
            ascii: true,
            ..Default::default()
        };

        let file = NamedTempFile::new()?;
        config.save(file.path())?;
        let loaded = SliceConfig::from_file(file.path())?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let config: SliceConfig = toml::from_str("ascii = true\n")?;
        assert!(config.ascii);
        assert_eq!(config.plane_normal, [0.0, 0.0, 1.0]);
        assert!(config.plane_point.is_none());
        Ok(())
    }

    #[test]
    fn test_plane_from_config() {
        let config = SliceConfig::default();
        let plane = config.plane(Point3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, 6.0)), 1.0);

        let config = SliceConfig {
            plane_normal: [0.0, 0.0, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            config.plane(Point3::origin()),
            Err(SliceError::DegeneratePlane { .. })
        ));
    }
}
