//! Central panel UI module: a top-down (x/z) preview of the generated
//! room, with drag-to-pan and scroll-to-zoom. Draws straight from the
//! scene graph, so a partially built room (a failed adornment pass) still
//! shows whatever made it in.

use std::sync::Arc;

use eframe::egui::{
    self, Align2, Color32, Context, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2,
};
use parking_lot::RwLock;

use crate::editor::Editor;
use crate::room::config::Material;
use crate::scene::{Node, SceneGraph};
use crate::utils::geometry::{rotate_y_deg, Vec3};

pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,

    /// Pixels per world unit.
    zoom: f32,

    /// Pan offset in screen coordinates.
    pan: Vec2,
}

impl CentralPanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            zoom: 60.0,
            pan: Vec2::ZERO,
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();

                let response = ui.interact(rect, ui.id(), Sense::drag());
                if response.dragged() {
                    self.pan += response.drag_delta();
                }
                let scroll = ui.input().scroll_delta.y;
                if scroll != 0.0 {
                    self.zoom = (self.zoom * (1.0 + scroll * 0.001)).clamp(4.0, 400.0);
                }

                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, Color32::BLACK);
                self.draw_grid(&painter, rect);

                let editor = self.editor.read();
                let scene_arc = editor.scene();
                let scene = scene_arc.read();
                self.draw_room(&painter, rect, &editor, &scene);
            });
    }

    /// Maps a world-space (x, z) point to screen coordinates. World +z
    /// points up the screen.
    fn world_to_screen(&self, rect: Rect, x: f32, z: f32) -> Pos2 {
        let center = rect.center() + self.pan;
        Pos2::new(center.x + x * self.zoom, center.y - z * self.zoom)
    }

    fn draw_grid(&self, painter: &Painter, rect: Rect) {
        let color = Color32::from_gray(36);
        let center = rect.center() + self.pan;
        let step = self.zoom;

        let mut x = center.x % step;
        while x < rect.right() {
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                Stroke::new(1.0, color),
            );
            x += step;
        }
        let mut y = center.y % step;
        while y < rect.bottom() {
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, color),
            );
            y += step;
        }
    }

    fn draw_room(&self, painter: &Painter, rect: Rect, editor: &Editor, scene: &SceneGraph) {
        // Floor first, then walls, then adornment markers on top.
        for root_child in scene.children(editor.room_root()) {
            let Some(node) = scene.get(root_child) else { continue };
            if node.mesh.is_some() {
                self.draw_floor(painter, rect, node);
            } else {
                for wall_id in scene.children(root_child) {
                    if let Some(wall) = scene.get(wall_id) {
                        self.draw_wall(painter, rect, wall);
                        for adornment_id in scene.children(wall_id) {
                            if let Some(adornment) = scene.get(adornment_id) {
                                self.draw_adornment(painter, rect, wall, adornment);
                            }
                        }
                    }
                }
            }
        }
    }

    fn draw_floor(&self, painter: &Painter, rect: Rect, node: &Node) {
        let Some(mesh) = &node.mesh else { return };
        let points: Vec<Pos2> = mesh
            .vertices
            .iter()
            .map(|v| self.world_to_screen(rect, v.x, v.z))
            .collect();
        let fill = material_color(node.material.as_ref()).linear_multiply(0.6);
        painter.add(egui::Shape::convex_polygon(
            points,
            fill,
            Stroke::new(1.0, Color32::from_gray(120)),
        ));
    }

    fn draw_wall(&self, painter: &Painter, rect: Rect, node: &Node) {
        // The wall plane spans ±width along its local X; rotate that axis
        // into world space to find the footprint endpoints.
        let half_width = node
            .mesh
            .as_ref()
            .map(|m| m.vertices.iter().map(|v| v.x.abs()).fold(0.0, f32::max))
            .unwrap_or(0.0);
        let axis = rotate_y_deg(Vec3::new(half_width, 0.0, 0.0), node.local_rotation.y);
        let start = node.local_position - axis;
        let end = node.local_position + axis;

        let color = material_color(node.material.as_ref());
        painter.line_segment(
            [
                self.world_to_screen(rect, start.x, start.z),
                self.world_to_screen(rect, end.x, end.z),
            ],
            Stroke::new(3.0, color),
        );
        painter.text(
            self.world_to_screen(rect, node.local_position.x, node.local_position.z),
            Align2::CENTER_BOTTOM,
            &node.name,
            FontId::proportional(11.0),
            Color32::from_gray(160),
        );
    }

    fn draw_adornment(&self, painter: &Painter, rect: Rect, wall: &Node, node: &Node) {
        let world =
            wall.local_position + rotate_y_deg(node.local_position, wall.local_rotation.y);
        let color = material_color(node.material.as_ref());
        painter.circle_filled(self.world_to_screen(rect, world.x, world.z), 4.0, color);
    }
}

fn material_color(material: Option<&Material>) -> Color32 {
    let rgba = material.map(|m| m.rgba).unwrap_or([1.0, 1.0, 1.0, 1.0]);
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
