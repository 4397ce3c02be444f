//! # RoomEd Main Entry Point
//!
//! RoomEd is an interactive editor that procedurally generates a
//! rectangular room (floor plus three walls) and hangs configurable
//! adornments on the walls. This file initializes logging and starts the
//! main event loop using eframe/egui.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;

use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("RoomEd starting...");

    room_ed::ui::run_main_window()?;

    info!("RoomEd exiting.");
    Ok(())
}
