// src/room/config.rs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::room::adornment::{AdornmentSpec, WallId};
use crate::utils::geometry::Vec3;

/// A flat-color stand-in for a host material reference. The preview tints
/// generated geometry with it; nothing else interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Unmultiplied RGBA, each component in 0..=1.
    pub rgba: [f32; 4],
}

impl Material {
    pub fn new(name: impl Into<String>, rgba: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            rgba,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("Default", [0.7, 0.7, 0.7, 1.0])
    }
}

/// Errors from loading or saving a room configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The authoring configuration for one room: floor size, the four
/// materials, and the ordered adornment list. Immutable during a single
/// generation pass; the inspector edits it between resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Half-extents: x/z size the floor, y is the wall height marker.
    pub floor_size: Vec3,
    pub back_wall_material: Material,
    pub left_wall_material: Material,
    pub right_wall_material: Material,
    pub floor_material: Material,
    pub adornments: Vec<AdornmentSpec>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            floor_size: Vec3::new(1.0, 0.0, 1.0),
            back_wall_material: Material::new("BackWall", [0.55, 0.55, 0.6, 1.0]),
            left_wall_material: Material::new("LeftWall", [0.5, 0.55, 0.5, 1.0]),
            right_wall_material: Material::new("RightWall", [0.6, 0.5, 0.5, 1.0]),
            floor_material: Material::new("Floor", [0.4, 0.35, 0.3, 1.0]),
            adornments: Vec::new(),
        }
    }
}

impl RoomConfig {
    /// Returns the configured material for a wall.
    pub fn wall_material(&self, wall: WallId) -> &Material {
        match wall {
            WallId::Back => &self.back_wall_material,
            WallId::Left => &self.left_wall_material,
            WallId::Right => &self.right_wall_material,
        }
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::adornment::Prefab;

    #[test]
    fn default_floor_size_matches_authoring_defaults() {
        let config = RoomConfig::default();
        assert_eq!(config.floor_size, Vec3::new(1.0, 0.0, 1.0));
        assert!(config.adornments.is_empty());
    }

    #[test]
    fn wall_material_resolves_per_wall() {
        let config = RoomConfig::default();
        assert_eq!(config.wall_material(WallId::Back).name, "BackWall");
        assert_eq!(config.wall_material(WallId::Left).name, "LeftWall");
        assert_eq!(config.wall_material(WallId::Right).name, "RightWall");
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = RoomConfig::default();
        config.floor_size = Vec3::new(2.0, 1.0, 3.0);
        let mut spec =
            AdornmentSpec::new("Painting", WallId::Right, Prefab::quad("Painting", 0.2, 0.3));
        spec.offset = Vec3::new(0.1, 0.25, 0.0);
        spec.rotation = Vec3::new(0.0, 180.0, 0.0);
        config.adornments.push(spec);

        let text = serde_json::to_string(&config).unwrap();
        let restored: RoomConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, config);
    }
}
