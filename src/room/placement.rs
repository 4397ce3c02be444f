// src/room/placement.rs
//
// Pure wall placement math: given the room's floor size, where does each
// wall sit and how is it rotated. The builder applies the result to scene
// nodes; nothing here touches the scene graph.

use crate::room::adornment::WallId;
use crate::utils::geometry::Vec3;

/// A wall's local transform relative to the room root. Rotation is Euler
/// angles in degrees; no scale is applied to walls (meshes are baked to
/// final size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Computes a wall's local position and rotation from the floor size.
///
/// The back wall sits on the far z edge unrotated; the side walls sit on
/// the x edges, rotated -90/+90 degrees about Y so their planes face
/// inward.
pub fn wall_transform(floor_size: Vec3, wall: WallId) -> WallTransform {
    match wall {
        WallId::Back => WallTransform {
            position: Vec3::new(0.0, floor_size.y, floor_size.z),
            rotation: Vec3::ZERO,
        },
        WallId::Left => WallTransform {
            position: Vec3::new(-floor_size.x, floor_size.y, 0.0),
            rotation: Vec3::new(0.0, -90.0, 0.0),
        },
        WallId::Right => WallTransform {
            position: Vec3::new(floor_size.x, floor_size.y, 0.0),
            rotation: Vec3::new(0.0, 90.0, 0.0),
        },
    }
}

/// The mesh half-extents for a wall: the back wall spans the floor's x
/// extent, the side walls span its z extent; all share the y height.
pub fn wall_extents(floor_size: Vec3, wall: WallId) -> (f32, f32) {
    match wall {
        WallId::Back => (floor_size.x, floor_size.y),
        WallId::Left | WallId::Right => (floor_size.z, floor_size.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_wall_keeps_identity_rotation() {
        for size in [
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(2.0, 1.0, 3.0),
            Vec3::new(0.5, 4.0, 8.0),
        ] {
            let t = wall_transform(size, WallId::Back);
            assert_eq!(t.rotation, Vec3::ZERO);
            assert_eq!(t.position, Vec3::new(0.0, size.y, size.z));
        }
    }

    #[test]
    fn side_walls_mirror_each_other() {
        let size = Vec3::new(2.5, 1.5, 4.0);
        let left = wall_transform(size, WallId::Left);
        let right = wall_transform(size, WallId::Right);

        assert_eq!(left.rotation, Vec3::new(0.0, -90.0, 0.0));
        assert_eq!(right.rotation, Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(left.position.x, -right.position.x);
        assert_eq!(left.position.z, 0.0);
        assert_eq!(right.position.z, 0.0);
    }

    #[test]
    fn concrete_two_one_three_scenario() {
        let size = Vec3::new(2.0, 1.0, 3.0);

        let back = wall_transform(size, WallId::Back);
        assert_eq!(back.position, Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(back.rotation, Vec3::ZERO);

        let left = wall_transform(size, WallId::Left);
        assert_eq!(left.position, Vec3::new(-2.0, 1.0, 0.0));
        assert_eq!(left.rotation, Vec3::new(0.0, -90.0, 0.0));

        let right = wall_transform(size, WallId::Right);
        assert_eq!(right.position, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(right.rotation, Vec3::new(0.0, 90.0, 0.0));
    }

    #[test]
    fn wall_extents_follow_floor_edges() {
        let size = Vec3::new(2.0, 1.0, 3.0);
        assert_eq!(wall_extents(size, WallId::Back), (2.0, 1.0));
        assert_eq!(wall_extents(size, WallId::Left), (3.0, 1.0));
        assert_eq!(wall_extents(size, WallId::Right), (3.0, 1.0));
    }
}
