// src/editor/mod.rs

pub mod builder;

pub use builder::{bind_adornments, BuildError, BuildPhase, GeneratedRoom, RoomBuilder};

use std::sync::Arc;

use log::error;
use parking_lot::RwLock;

use crate::room::config::RoomConfig;
use crate::scene::{NodeId, SceneGraph};

/// The main editor state: the scene graph, the room's authoring config,
/// and the messages the UI panels display. The scene lives behind
/// `Arc<RwLock<...>>` so the panels can read it while the editor mutates
/// it on reset.
pub struct Editor {
    scene: Arc<RwLock<SceneGraph>>,
    room_root: NodeId,

    /// The authoring configuration the inspector edits. Applied on the
    /// next reset; generation itself never mutates it.
    pub config: RoomConfig,

    built: Option<GeneratedRoom>,
    phase: BuildPhase,

    /// Messages or status for UI.
    pub status_message: String,
    pub error_message: Option<String>,

    /// Whether the inspector panel is shown.
    pub show_side_panel: bool,
}

impl Editor {
    /// Creates an editor and builds the room once from `config`, the way
    /// the room rebuilt itself on scene load in the original workflow.
    pub fn new(config: RoomConfig) -> Self {
        let mut scene = SceneGraph::new();
        let room_root = scene.spawn("Room");
        let mut editor = Self {
            scene: Arc::new(RwLock::new(scene)),
            room_root,
            config,
            built: None,
            phase: BuildPhase::Empty,
            status_message: "Welcome to RoomEd!".to_owned(),
            error_message: None,
            show_side_panel: true,
        };
        editor.reset();
        editor
    }

    pub fn scene(&self) -> Arc<RwLock<SceneGraph>> {
        Arc::clone(&self.scene)
    }

    pub fn room_root(&self) -> NodeId {
        self.room_root
    }

    /// References to the last successful build, if any.
    pub fn built(&self) -> Option<&GeneratedRoom> {
        self.built.as_ref()
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// The single rebuild entry point: destroys the previous children of
    /// the room root and regenerates floor, walls, and adornments from the
    /// current config. Re-triggerable at any time.
    pub fn reset(&mut self) {
        let scene = Arc::clone(&self.scene);
        let mut scene = scene.write();
        let mut builder = RoomBuilder::new(&mut scene, self.room_root);
        match builder.build(&self.config) {
            Ok(room) => {
                self.status_message = format!(
                    "Room rebuilt: 1 floor, {} walls, {} adornments.",
                    room.walls.len(),
                    room.adornments.len()
                );
                self.error_message = None;
                self.built = Some(room);
            }
            Err(err) => {
                error!("Room rebuild failed: {err}");
                self.error_message = Some(format!("Room rebuild failed: {err}"));
                self.built = None;
            }
        }
        self.phase = builder.phase();
    }

    /// Replaces the config with defaults and rebuilds.
    pub fn new_room(&mut self) {
        self.config = RoomConfig::default();
        self.reset();
        self.status_message = "New room.".to_owned();
    }

    /// Applies a loaded config and rebuilds.
    pub fn apply_config(&mut self, config: RoomConfig) {
        self.config = config;
        self.reset();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(RoomConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::adornment::{AdornmentSpec, WallId};
    use crate::utils::geometry::Vec3;

    #[test]
    fn editor_builds_on_construction() {
        let editor = Editor::new(RoomConfig::default());
        assert_eq!(editor.phase(), BuildPhase::Built);
        let room = editor.built().expect("initial build");
        assert_eq!(room.walls.len(), 3);
        assert!(editor.error_message.is_none());
    }

    #[test]
    fn reset_is_structurally_idempotent() {
        let config = RoomConfig {
            floor_size: Vec3::new(2.0, 1.0, 3.0),
            ..RoomConfig::default()
        };
        let mut editor = Editor::new(config);

        let scene = editor.scene();
        let count_after_first = scene.read().len();

        editor.reset();
        assert_eq!(scene.read().len(), count_after_first);
        assert_eq!(editor.phase(), BuildPhase::Built);
    }

    #[test]
    fn failed_reset_surfaces_the_error() {
        let mut config = RoomConfig::default();
        config.adornments.push(AdornmentSpec {
            key: "Ghost".to_owned(),
            wall: WallId::Back,
            prefab: None,
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        });

        let editor = Editor::new(config);
        assert_eq!(editor.phase(), BuildPhase::WallsGenerated);
        assert!(editor.built().is_none());
        assert!(editor
            .error_message
            .as_deref()
            .is_some_and(|msg| msg.contains("Ghost")));
    }
}
