// src/room/mod.rs

pub mod adornment;
pub mod config;
pub mod placement;

pub use adornment::{AdornmentSpec, Prefab, WallId};
pub use config::{ConfigError, Material, RoomConfig};
pub use placement::{wall_extents, wall_transform, WallTransform};
