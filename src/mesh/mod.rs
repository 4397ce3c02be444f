// src/mesh/mod.rs
//
// Flat quad meshes for the generated floor and walls. Builders are pure
// functions of their numeric inputs; the scene graph attaches the result
// to a node and never reaches back in here.

use serde::{Deserialize, Serialize};

use crate::utils::geometry::Vec3;

/// Index buffer shared by every generated quad: two triangles, (0,1,3)
/// and (1,2,3), wound so the visible face survives normal recalculation.
const QUAD_TRIANGLES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A mesh in the host-neutral sense: positions, an index buffer, and
/// per-vertex normals derived from the triangle winding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Recomputes per-vertex normals from the triangle winding: each face
    /// normal is accumulated into its three vertices, then normalized.
    /// For the flat quads built here every vertex ends up with the single
    /// face direction.
    pub fn recalculate_normals(&mut self) {
        self.normals = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.triangles.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let edge1 = self.vertices[b] - self.vertices[a];
            let edge2 = self.vertices[c] - self.vertices[a];
            let face_normal = edge1.cross(&edge2);
            self.normals[a] = self.normals[a] + face_normal;
            self.normals[b] = self.normals[b] + face_normal;
            self.normals[c] = self.normals[c] + face_normal;
        }
        for normal in &mut self.normals {
            *normal = normal.normalize();
        }
    }
}

/// Builds the floor quad: a rectangle centered at the origin in the
/// horizontal plane. `width` and `depth` are half-extents: a width of 1
/// spans -1..+1. That doubling matches the observed sizing convention and
/// is deliberately left as-is.
pub fn build_floor_mesh(name: &str, width: f32, depth: f32) -> Mesh {
    let mut mesh = Mesh::new(name);
    mesh.vertices = vec![
        Vec3::new(-width, 0.0, depth),
        Vec3::new(width, 0.0, depth),
        Vec3::new(width, 0.0, -depth),
        Vec3::new(-width, 0.0, -depth),
    ];
    mesh.triangles = QUAD_TRIANGLES.to_vec();
    mesh.recalculate_normals();
    mesh
}

/// Builds a wall quad: a rectangle in the vertical plane at local z=0,
/// with the same half-extent convention as the floor.
pub fn build_wall_mesh(name: &str, width: f32, height: f32) -> Mesh {
    let mut mesh = Mesh::new(name);
    mesh.vertices = vec![
        Vec3::new(-width, height, 0.0),
        Vec3::new(width, height, 0.0),
        Vec3::new(width, -height, 0.0),
        Vec3::new(-width, -height, 0.0),
    ];
    mesh.triangles = QUAD_TRIANGLES.to_vec();
    mesh.recalculate_normals();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn floor_mesh_is_a_double_triangle_quad() {
        let mesh = build_floor_mesh("Room.Floor", 2.0, 3.0);

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles.len(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles, vec![0, 1, 3, 1, 2, 3]);
        assert_eq!(mesh.name, "Room.Floor");

        // Half-extents: corners at (±2, 0, ±3).
        assert_eq!(mesh.vertices[0], Vec3::new(-2.0, 0.0, 3.0));
        assert_eq!(mesh.vertices[1], Vec3::new(2.0, 0.0, 3.0));
        assert_eq!(mesh.vertices[2], Vec3::new(2.0, 0.0, -3.0));
        assert_eq!(mesh.vertices[3], Vec3::new(-2.0, 0.0, -3.0));
    }

    #[test]
    fn floor_normals_point_up() {
        let mesh = build_floor_mesh("Floor", 1.0, 1.0);
        assert_eq!(mesh.normals.len(), 4);
        for normal in &mesh.normals {
            assert_approx_eq!(normal.y, 1.0, 1e-6);
            assert_approx_eq!(normal.x, 0.0, 1e-6);
            assert_approx_eq!(normal.z, 0.0, 1e-6);
        }
    }

    #[test]
    fn wall_mesh_vertices_symmetric_about_origin() {
        let mesh = build_wall_mesh("Wall", 1.5, 0.75);

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles.len(), 6);
        for vertex in &mesh.vertices {
            let opposite = -*vertex;
            assert!(
                mesh.vertices.iter().any(|v| v.approx_eq(&opposite, 1e-6)),
                "no mirror vertex for {vertex:?}"
            );
        }
    }

    #[test]
    fn wall_mesh_lies_in_vertical_plane() {
        let mesh = build_wall_mesh("Wall", 2.0, 1.0);
        for vertex in &mesh.vertices {
            assert_eq!(vertex.z, 0.0);
        }
        // Flat shading: one shared normal, perpendicular to the plane.
        for normal in &mesh.normals {
            assert_approx_eq!(normal.x, 0.0, 1e-6);
            assert_approx_eq!(normal.y, 0.0, 1e-6);
            assert_approx_eq!(normal.z.abs(), 1.0, 1e-6);
        }
    }
}
