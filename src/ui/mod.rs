// src/ui/mod.rs
pub mod central_panel;
pub mod file;
pub mod main_window;
pub mod menu;
pub mod side_panel;
pub mod status_bar;

pub use main_window::{run_main_window, MainWindow};
