// src/room/adornment.rs

use serde::{Deserialize, Serialize};

use crate::mesh::{build_wall_mesh, Mesh};
use crate::room::config::Material;
use crate::utils::geometry::Vec3;

/// Identifies one of the three generated walls. Used purely as a lookup
/// key; there is no meaningful ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallId {
    Back,
    Left,
    Right,
}

impl WallId {
    /// Returns a user-friendly name for the wall.
    pub fn name(&self) -> &'static str {
        match self {
            WallId::Back => "Back",
            WallId::Left => "Left",
            WallId::Right => "Right",
        }
    }

    /// Returns all wall identifiers. Useful for UI elements and for the
    /// builder, which creates exactly one wall per identifier.
    pub fn all() -> &'static [WallId] {
        &[WallId::Back, WallId::Left, WallId::Right]
    }
}

/// The template an adornment instantiates: an optional mesh and material
/// under a name. A prefab with neither is a bare transform node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefab {
    pub name: String,
    pub mesh: Option<Mesh>,
    pub material: Option<Material>,
}

impl Prefab {
    /// A small vertical quad, the stock prefab for new adornments.
    pub fn quad(name: &str, width: f32, height: f32) -> Self {
        Self {
            name: name.to_owned(),
            mesh: Some(build_wall_mesh(name, width, height)),
            material: Some(Material::default()),
        }
    }
}

/// One configured adornment: which wall it hangs on, what to instantiate,
/// and the local transform to apply. Read-only input to generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdornmentSpec {
    /// Display label; also used as the instantiated node's name.
    pub key: String,
    pub wall: WallId,
    /// `None` models a dangling prefab reference and fails at
    /// instantiation time, not before.
    pub prefab: Option<Prefab>,
    pub offset: Vec3,
    /// Euler angles, degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl AdornmentSpec {
    pub fn new(key: impl Into<String>, wall: WallId, prefab: Prefab) -> Self {
        Self {
            key: key.into(),
            wall,
            prefab: Some(prefab),
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_ids_are_distinct_map_keys() {
        let walls = WallId::all();
        assert_eq!(walls.len(), 3);
        let unique: std::collections::HashSet<_> = walls.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn new_spec_defaults_to_identity_transform() {
        let spec = AdornmentSpec::new("Lamp", WallId::Left, Prefab::quad("Lamp", 0.1, 0.1));
        assert_eq!(spec.offset, Vec3::ZERO);
        assert_eq!(spec.rotation, Vec3::ZERO);
        assert_eq!(spec.scale, Vec3::ONE);
        assert!(spec.prefab.is_some());
    }
}
