// src/utils/geometry.rs
use serde::{Deserialize, Serialize};

/// A 3-component vector. Positions, Euler rotations (degrees) and scales
/// all use this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(&self) -> Vec3 {
        let length = self.length();
        if length == 0.0 {
            return *self;
        }
        Vec3::new(self.x / length, self.y / length, self.z / length)
    }

    pub fn scaled(&self, factor: f32) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Component-wise approximate comparison.
    pub fn approx_eq(&self, other: &Vec3, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Rotates `v` about the Y axis by `degrees`. Matches the handedness used
/// by the wall placement table: -90 carries local +X onto world +Z.
pub fn rotate_y_deg(v: Vec3, degrees: f32) -> Vec3 {
    let theta = degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn cross_of_axes_gives_third_axis() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let z = Vec3::new(0.0, 0.0, -1.0);
        let up = x.cross(&z);
        assert!(up.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn normalize_handles_zero_vector() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_approx_eq!(Vec3::new(0.0, 3.0, 4.0).normalize().length(), 1.0, 1e-6);
    }

    #[test]
    fn rotate_y_carries_x_onto_z_at_minus_ninety() {
        let rotated = rotate_y_deg(Vec3::new(1.0, 0.0, 0.0), -90.0);
        assert!(rotated.approx_eq(&Vec3::new(0.0, 0.0, 1.0), 1e-6));

        let mirrored = rotate_y_deg(Vec3::new(1.0, 0.0, 0.0), 90.0);
        assert!(mirrored.approx_eq(&Vec3::new(0.0, 0.0, -1.0), 1e-6));
    }
}
