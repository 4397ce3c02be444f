// src/utils/mod.rs
pub mod geometry;

pub use geometry::{rotate_y_deg, Vec3};
