// src/ui/menu.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::ui::file;

pub struct MenuBar {
    editor: Arc<RwLock<Editor>>,
}

impl MenuBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Room").clicked() {
                        self.editor.write().new_room();
                        ui.close_menu();
                    }
                    if ui.button("Open Config...").clicked() {
                        if let Some((path, config)) = file::open_config() {
                            let mut editor = self.editor.write();
                            editor.apply_config(config);
                            editor.status_message = format!("Loaded {}.", path.display());
                        }
                        ui.close_menu();
                    }
                    if ui.button("Save Config...").clicked() {
                        let config = self.editor.read().config.clone();
                        if let Some(path) = file::save_config(&config) {
                            self.editor.write().status_message =
                                format!("Saved {}.", path.display());
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        // Handle exit at a higher level (window close button).
                        ui.close_menu();
                    }
                });

                ui.menu_button("Room", |ui| {
                    if ui.button("Reset").clicked() {
                        self.editor.write().reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut editor = self.editor.write();
                    if ui.checkbox(&mut editor.show_side_panel, "Inspector").clicked() {
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About...").clicked() {
                        self.editor.write().status_message =
                            "RoomEd: procedural room generation playground.".to_owned();
                        ui.close_menu();
                    }
                });
            });
        });
    }
}
