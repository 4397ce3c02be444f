// src/ui/status_bar.rs

use std::sync::Arc;

use eframe::egui::{self, Color32, Context};
use parking_lot::RwLock;

use crate::editor::Editor;

pub struct StatusBar {
    editor: Arc<RwLock<Editor>>,
}

impl StatusBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let editor = self.editor.read(); // Keep the read lock short.

            ui.horizontal(|ui| {
                ui.label(&editor.status_message);
                if let Some(err) = &editor.error_message {
                    ui.colored_label(Color32::RED, err);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Phase: {}", editor.phase().name()));
                });
            });
        });
    }
}
