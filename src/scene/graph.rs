// src/scene/graph.rs
//
// The scene collaborator: a small arena-style graph exposing exactly the
// create/destroy/parent/transform surface generation needs. Geometry and
// placement code never import this; the builder is the only writer during
// a rebuild.

use log::info;

use crate::mesh::Mesh;
use crate::room::config::Material;
use crate::utils::geometry::Vec3;

/// A stable handle into the scene graph. Slots are never reused within a
/// graph's lifetime, so a destroyed node's id simply resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One object in the hierarchy: a name, a local transform, and optional
/// render data. Fields are plain data; structural changes (parenting,
/// destruction) go through [`SceneGraph`] so both sides of the relation
/// stay consistent.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub local_position: Vec3,
    /// Euler angles, degrees.
    pub local_rotation: Vec3,
    pub local_scale: Vec3,
    pub mesh: Option<Mesh>,
    pub material: Option<Material>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            parent: None,
            children: Vec::new(),
            local_position: Vec3::ZERO,
            local_rotation: Vec3::ZERO,
            local_scale: Vec3::ONE,
            mesh: None,
            material: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Option<Node>>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root-level node.
    pub fn spawn(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(name.into())));
        id
    }

    /// Creates a node parented under `parent`.
    pub fn spawn_child(&mut self, name: impl Into<String>, parent: NodeId) -> NodeId {
        let id = self.spawn(name);
        self.set_parent(id, Some(parent));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Reparents `child`, keeping both child- and parent-side links in
    /// sync. A parent of `None` detaches the node to the root level.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        let old_parent = self.get(child).and_then(|node| node.parent);
        if let Some(old_id) = old_parent {
            if let Some(old) = self.get_mut(old_id) {
                old.children.retain(|c| *c != child);
            }
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        if let Some(new_id) = parent {
            if let Some(new) = self.get_mut(new_id) {
                new.children.push(child);
            }
        }
    }

    /// The node's children, cloned so callers can mutate the graph while
    /// iterating.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id).map(|node| node.children.clone()).unwrap_or_default()
    }

    /// Destroys a node and its entire subtree. Each destruction is logged.
    pub fn destroy(&mut self, id: NodeId) {
        if let Some(parent_id) = self.get(id).and_then(|node| node.parent) {
            if let Some(parent) = self.get_mut(parent_id) {
                parent.children.retain(|c| *c != id);
            }
        }
        self.destroy_subtree(id);
    }

    /// Destroys every child of `id`, leaving the node itself in place.
    pub fn destroy_children(&mut self, id: NodeId) {
        for child in self.children(id) {
            self.destroy_subtree(child);
        }
        if let Some(node) = self.get_mut(id) {
            node.children.clear();
        }
    }

    fn destroy_subtree(&mut self, id: NodeId) {
        let node = match self.nodes.get_mut(id.0).and_then(Option::take) {
            Some(node) => node,
            None => return,
        };
        info!("Destroying '{}'.", node.name);
        for child in node.children {
            self.destroy_subtree(child);
        }
    }

    /// First node with the given name, if any. Kept for tooling and tests;
    /// generation holds direct ids instead of searching by name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, node)| node.name == name).map(|(id, _)| id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i), node)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_child_links_both_sides() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn("Room");
        let floor = scene.spawn_child("Room.Floor", root);

        assert_eq!(scene.get(floor).unwrap().parent, Some(root));
        assert_eq!(scene.children(root), vec![floor]);
    }

    #[test]
    fn destroy_removes_whole_subtree_and_detaches() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn("Room");
        let walls = scene.spawn_child("Room.Walls", root);
        let back = scene.spawn_child("Room.Walls.Back", walls);
        let adornment = scene.spawn_child("Lamp", back);

        scene.destroy(walls);

        assert!(!scene.contains(walls));
        assert!(!scene.contains(back));
        assert!(!scene.contains(adornment));
        assert!(scene.contains(root));
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn destroy_children_keeps_the_node() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn("Room");
        scene.spawn_child("Room.Floor", root);
        scene.spawn_child("Room.Walls", root);

        scene.destroy_children(root);

        assert!(scene.contains(root));
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn find_by_name_sees_spawned_nodes() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn("Room");
        let floor = scene.spawn_child("Room.Floor", root);

        assert_eq!(scene.find_by_name("Room.Floor"), Some(floor));
        assert_eq!(scene.find_by_name("Room.Ceiling"), None);
    }

    #[test]
    fn reparent_moves_between_parents() {
        let mut scene = SceneGraph::new();
        let a = scene.spawn("A");
        let b = scene.spawn("B");
        let child = scene.spawn_child("Child", a);

        scene.set_parent(child, Some(b));

        assert!(scene.children(a).is_empty());
        assert_eq!(scene.children(b), vec![child]);
        assert_eq!(scene.get(child).unwrap().parent, Some(b));
    }
}
