//! # Main Window Module
//!
//! Aggregates the RoomEd UI: a top menu bar, the inspector side panel, the
//! central top-down preview, and a bottom status bar, all sharing one
//! `Editor` behind `Arc<RwLock<...>>`. The module also provides a helper
//! function `run_main_window()` to launch the UI as a standalone egui
//! application.

use std::error::Error;
use std::sync::Arc;

use eframe::egui;
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::room::config::RoomConfig;
use crate::ui::central_panel::CentralPanel;
use crate::ui::menu::MenuBar;
use crate::ui::side_panel::SidePanel;
use crate::ui::status_bar::StatusBar;

/// MainWindow holds the UI panels and drives them each frame.
pub struct MainWindow {
    menu: MenuBar,
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
}

impl MainWindow {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            menu: MenuBar::new(Arc::clone(&editor)),
            side_panel: SidePanel::new(Arc::clone(&editor)),
            central_panel: CentralPanel::new(Arc::clone(&editor)),
            status_bar: StatusBar::new(editor),
        }
    }

    /// Draws the complete UI layout. Outer panels first; the central
    /// preview takes whatever space remains.
    pub fn update(&mut self, ctx: &egui::Context) {
        self.menu.update(ctx);
        self.side_panel.update(ctx);
        self.status_bar.update(ctx);
        self.central_panel.update(ctx);
    }
}

/// A wrapper to integrate MainWindow into an eframe App.
struct RoomEdApp {
    window: MainWindow,
}

impl eframe::App for RoomEdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.update(ctx);
    }
}

/// Runs the RoomEd UI as a standalone egui application, generating the
/// default room on startup.
pub fn run_main_window() -> Result<(), Box<dyn Error>> {
    let editor = Arc::new(RwLock::new(Editor::new(RoomConfig::default())));
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "RoomEd",
        native_options,
        Box::new(move |_cc| {
            Box::new(RoomEdApp {
                window: MainWindow::new(editor),
            })
        }),
    );
    // Since run_native returns (), we simply return Ok.
    Ok(())
}
