// src/ui/side_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Color32, Context, DragValue, Ui};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::room::adornment::{AdornmentSpec, Prefab, WallId};
use crate::room::config::Material;
use crate::utils::geometry::Vec3;

/// The inspector: floor size, materials, the adornment list, and the
/// Reset button that triggers regeneration.
pub struct SidePanel {
    editor: Arc<RwLock<Editor>>,
}

impl SidePanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) {
        if !self.editor.read().show_side_panel {
            return; // Early exit if user has hidden it
        }

        egui::SidePanel::left("inspector")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                let mut editor = self.editor.write();
                show_room(ui, &mut editor);
                ui.separator();
                show_materials(ui, &mut editor);
                ui.separator();
                show_adornments(ui, &mut editor);
                ui.separator();

                if ui.button("Reset").clicked() {
                    editor.reset();
                }
                if let Some(err) = editor.error_message.clone() {
                    ui.colored_label(Color32::RED, err);
                }
            });
    }
}

fn show_room(ui: &mut Ui, editor: &mut Editor) {
    ui.heading("Room");
    ui.label("Floor size (half-extents; y is wall height)");
    vec3_row(ui, &mut editor.config.floor_size, 0.1);
}

fn show_materials(ui: &mut Ui, editor: &mut Editor) {
    ui.heading("Materials");
    material_row(ui, "Floor", &mut editor.config.floor_material);
    material_row(ui, "Back wall", &mut editor.config.back_wall_material);
    material_row(ui, "Left wall", &mut editor.config.left_wall_material);
    material_row(ui, "Right wall", &mut editor.config.right_wall_material);
}

fn show_adornments(ui: &mut Ui, editor: &mut Editor) {
    ui.heading("Adornments");

    let mut remove: Option<usize> = None;
    for (i, spec) in editor.config.adornments.iter_mut().enumerate() {
        let title = format!("{} ({})", spec.key, spec.wall.name());
        egui::CollapsingHeader::new(title)
            .id_source(i)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Key");
                    ui.text_edit_singleline(&mut spec.key);
                });

                ui.horizontal(|ui| {
                    ui.label("Wall");
                    egui::ComboBox::from_id_source((i, "wall"))
                        .selected_text(spec.wall.name())
                        .show_ui(ui, |ui| {
                            for wall in WallId::all() {
                                ui.selectable_value(&mut spec.wall, *wall, wall.name());
                            }
                        });
                });

                ui.label("Offset");
                vec3_row(ui, &mut spec.offset, 0.05);
                ui.label("Rotation (deg)");
                vec3_row(ui, &mut spec.rotation, 1.0);
                ui.label("Scale");
                vec3_row(ui, &mut spec.scale, 0.05);

                if spec.prefab.is_none() {
                    ui.colored_label(Color32::YELLOW, "No prefab assigned.");
                }
                if ui.button("Remove").clicked() {
                    remove = Some(i);
                }
            });
    }
    if let Some(i) = remove {
        editor.config.adornments.remove(i);
    }

    if ui.button("Add Adornment").clicked() {
        let key = format!("Adornment {}", editor.config.adornments.len() + 1);
        editor.config.adornments.push(AdornmentSpec::new(
            key.clone(),
            WallId::Back,
            Prefab::quad(&key, 0.1, 0.1),
        ));
    }
}

fn material_row(ui: &mut Ui, label: &str, material: &mut Material) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_rgba_unmultiplied(&mut material.rgba);
        ui.text_edit_singleline(&mut material.name);
    });
}

fn vec3_row(ui: &mut Ui, value: &mut Vec3, speed: f64) {
    ui.horizontal(|ui| {
        ui.add(DragValue::new(&mut value.x).speed(speed).prefix("x: "));
        ui.add(DragValue::new(&mut value.y).speed(speed).prefix("y: "));
        ui.add(DragValue::new(&mut value.z).speed(speed).prefix("z: "));
    });
}
