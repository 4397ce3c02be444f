// src/lib.rs

pub mod editor;
pub mod mesh;
pub mod room;
pub mod scene;
pub mod ui;
pub mod utils;
