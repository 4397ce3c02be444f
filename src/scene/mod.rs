// src/scene/mod.rs

pub mod graph;

pub use graph::{Node, NodeId, SceneGraph};
