// src/ui/file.rs

use std::path::PathBuf;

use log::{error, info};
use rfd::FileDialog;

use crate::room::config::RoomConfig;

/// Presents a file dialog and loads the selected room config.
///
/// Returns:
/// - `Some((path, config))` if a file was selected and parsed.
/// - `None` if the user canceled (or if there was an error; the error is
///   logged).
pub fn open_config() -> Option<(PathBuf, RoomConfig)> {
    let path = FileDialog::new()
        .add_filter("Room Config", &["json"])
        .pick_file()?;
    info!("Selected config file: {:?}", path);

    match RoomConfig::load_json(&path) {
        Ok(config) => Some((path, config)),
        Err(err) => {
            error!("Failed to load room config: {}", err);
            None
        }
    }
}

/// Presents a save dialog and writes the config as pretty JSON.
pub fn save_config(config: &RoomConfig) -> Option<PathBuf> {
    let path = FileDialog::new()
        .add_filter("Room Config", &["json"])
        .set_file_name("room.json")
        .save_file()?;

    match config.save_json(&path) {
        Ok(()) => {
            info!("Saved room config to {:?}", path);
            Some(path)
        }
        Err(err) => {
            error!("Failed to save room config: {}", err);
            None
        }
    }
}
