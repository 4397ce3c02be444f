// src/editor/builder.rs
//
// The reset pipeline: tear down whatever hangs under the room root, then
// regenerate floor, walls, and adornments from the current config. Full
// teardown and rebuild every time; no object reuse, no diffing.

use std::collections::HashMap;

use log::info;
use thiserror::Error;

use crate::mesh::{build_floor_mesh, build_wall_mesh};
use crate::room::adornment::{AdornmentSpec, WallId};
use crate::room::config::RoomConfig;
use crate::room::placement::{wall_extents, wall_transform};
use crate::scene::{NodeId, SceneGraph};

/// Where a build currently stands. Terminal state is `Built`; a failed
/// adornment pass leaves the builder at `WallsGenerated` with floor and
/// walls already attached (no rollback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Empty,
    FloorGenerated,
    WallsGenerated,
    Built,
}

impl BuildPhase {
    pub fn name(&self) -> &'static str {
        match self {
            BuildPhase::Empty => "Empty",
            BuildPhase::FloorGenerated => "Floor",
            BuildPhase::WallsGenerated => "Walls",
            BuildPhase::Built => "Built",
        }
    }
}

/// Direct references to everything one build created. Rebuilt from scratch
/// on every reset; after a successful build the wall map holds exactly one
/// entry per [`WallId`].
#[derive(Debug, Clone)]
pub struct GeneratedRoom {
    pub floor: NodeId,
    pub walls_parent: NodeId,
    pub walls: HashMap<WallId, NodeId>,
    pub adornments: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no generated wall for {wall:?} (adornment '{key}')")]
    WallNotFound { wall: WallId, key: String },
    #[error("adornment '{key}' has no prefab")]
    MissingPrefab { key: String },
}

/// Orchestrates one rebuild of the room subtree. Holds direct `NodeId`s to
/// everything it creates rather than searching the scene by name, so an
/// unrelated node with a matching name can never be picked up by mistake.
pub struct RoomBuilder<'a> {
    scene: &'a mut SceneGraph,
    root: NodeId,
    phase: BuildPhase,
}

impl<'a> RoomBuilder<'a> {
    pub fn new(scene: &'a mut SceneGraph, root: NodeId) -> Self {
        Self {
            scene,
            root,
            phase: BuildPhase::Empty,
        }
    }

    /// The phase the last build reached. Meaningful after [`build`]
    /// returns, including on failure.
    ///
    /// [`build`]: RoomBuilder::build
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Runs the full pipeline: clear, floor, walls, adornments. Repeated
    /// calls with the same config always yield the same terminal structure
    /// (node identities differ, since everything is recreated).
    pub fn build(&mut self, config: &RoomConfig) -> Result<GeneratedRoom, BuildError> {
        self.clear();
        let floor = self.generate_floor(config);
        let (walls_parent, walls) = self.generate_walls(config);
        let adornments = bind_adornments(self.scene, &config.adornments, &walls)?;
        self.phase = BuildPhase::Built;
        Ok(GeneratedRoom {
            floor,
            walls_parent,
            walls,
            adornments,
        })
    }

    fn root_name(&self) -> String {
        self.scene
            .get(self.root)
            .map(|node| node.name.clone())
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        self.scene.destroy_children(self.root);
        self.phase = BuildPhase::Empty;
    }

    fn generate_floor(&mut self, config: &RoomConfig) -> NodeId {
        let name = format!("{}.Floor", self.root_name());
        let floor = self.scene.spawn_child(name.clone(), self.root);
        if let Some(node) = self.scene.get_mut(floor) {
            node.mesh = Some(build_floor_mesh(
                &name,
                config.floor_size.x,
                config.floor_size.z,
            ));
            node.material = Some(config.floor_material.clone());
        }
        info!("Generated floor '{}'.", name);
        self.phase = BuildPhase::FloorGenerated;
        floor
    }

    fn generate_walls(&mut self, config: &RoomConfig) -> (NodeId, HashMap<WallId, NodeId>) {
        let parent_name = format!("{}.Walls", self.root_name());
        let walls_parent = self.scene.spawn_child(parent_name.clone(), self.root);

        let mut walls = HashMap::new();
        for wall in WallId::all() {
            let name = format!("{}.{}", parent_name, wall.name());
            let (width, height) = wall_extents(config.floor_size, *wall);
            let id = self.scene.spawn_child(name.clone(), walls_parent);
            let transform = wall_transform(config.floor_size, *wall);
            if let Some(node) = self.scene.get_mut(id) {
                node.mesh = Some(build_wall_mesh(&name, width, height));
                node.material = Some(config.wall_material(*wall).clone());
                node.local_position = transform.position;
                node.local_rotation = transform.rotation;
            }
            info!(
                "Placed wall '{}' at {:?}, rotation {:?}.",
                name, transform.position, transform.rotation
            );
            walls.insert(*wall, id);
        }

        self.phase = BuildPhase::WallsGenerated;
        (walls_parent, walls)
    }
}

/// Instantiates each configured adornment under its resolved wall and
/// applies the spec's offset/rotation/scale verbatim, with no bounds
/// checking.
///
/// Kept separate from [`RoomBuilder`] because its contract is independent:
/// a pure mapping from spec to placed instance, with wall lookup as the
/// only failure mode besides a missing prefab. The first failure aborts
/// the remaining placements; instances already placed stay in the scene.
pub fn bind_adornments(
    scene: &mut SceneGraph,
    specs: &[AdornmentSpec],
    walls: &HashMap<WallId, NodeId>,
) -> Result<Vec<NodeId>, BuildError> {
    let mut placed = Vec::with_capacity(specs.len());
    for spec in specs {
        let wall = *walls.get(&spec.wall).ok_or_else(|| BuildError::WallNotFound {
            wall: spec.wall,
            key: spec.key.clone(),
        })?;
        let prefab = spec.prefab.as_ref().ok_or_else(|| BuildError::MissingPrefab {
            key: spec.key.clone(),
        })?;

        let id = scene.spawn_child(spec.key.clone(), wall);
        if let Some(node) = scene.get_mut(id) {
            node.mesh = prefab.mesh.clone();
            node.material = prefab.material.clone();
            node.local_position = spec.offset;
            node.local_rotation = spec.rotation;
            node.local_scale = spec.scale;
        }
        info!("Bound adornment '{}' to the {} wall.", spec.key, spec.wall.name());
        placed.push(id);
    }
    Ok(placed)
}
