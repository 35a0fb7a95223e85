//! Vector math and the fixed three-axis rotation composition.
//!
//! World space is right-handed. Rotation vectors are not a single orientation:
//! they are three sequential axis rotations applied in a fixed order
//! (see [`RotationAxis::ORDER`]).

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 3D vector / point in world space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).length()
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn midpoint(self, other: Vec3) -> Vec3 {
        (self + other) * 0.5
    }

    /// Arithmetic mean of `points`. Returns the origin for an empty slice.
    pub fn centroid(points: &[Vec3]) -> Vec3 {
        if points.is_empty() {
            return Vec3::zero();
        }
        let sum = points.iter().fold(Vec3::zero(), |acc, &p| acc + p);
        sum / points.len() as f64
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

// ── axis rotations ────────────────────────────────────────────────────────

/// Rotates `p` about the X axis by `angle` radians.
pub fn rotate_x(p: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotates `p` about the Y axis by `angle` radians.
pub fn rotate_y(p: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotates `p` about the Z axis by `angle` radians.
pub fn rotate_z(p: Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// One component of a camera rotation vector.
///
/// Mapping (index → formula):
/// - `Yaw`   = component 0, rotates about the Y axis (horizontal turn)
/// - `Pitch` = component 1, rotates about the X axis (vertical tilt)
/// - `Roll`  = component 2, rotates about the Z axis
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RotationAxis {
    Yaw,
    Pitch,
    Roll,
}

impl RotationAxis {
    /// Application order for composed rotations. Not commutative; do not reorder.
    pub const ORDER: [RotationAxis; 3] = [RotationAxis::Yaw, RotationAxis::Pitch, RotationAxis::Roll];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RotationAxis::Yaw => 0,
            RotationAxis::Pitch => 1,
            RotationAxis::Roll => 2,
        }
    }

    /// Rotates `p` by `angle` using this component's axis formula.
    #[inline]
    pub fn rotate(self, p: Vec3, angle: f64) -> Vec3 {
        match self {
            RotationAxis::Yaw => rotate_y(p, angle),
            RotationAxis::Pitch => rotate_x(p, angle),
            RotationAxis::Roll => rotate_z(p, angle),
        }
    }
}

/// Three sequential axis angles in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rotation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Rotation {
    #[inline]
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    #[inline]
    pub fn angle(&self, axis: RotationAxis) -> f64 {
        match axis {
            RotationAxis::Yaw => self.yaw,
            RotationAxis::Pitch => self.pitch,
            RotationAxis::Roll => self.roll,
        }
    }

    #[inline]
    pub fn angle_mut(&mut self, axis: RotationAxis) -> &mut f64 {
        match axis {
            RotationAxis::Yaw => &mut self.yaw,
            RotationAxis::Pitch => &mut self.pitch,
            RotationAxis::Roll => &mut self.roll,
        }
    }

    /// Applies yaw, then pitch, then roll to `v`.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        RotationAxis::ORDER
            .iter()
            .fold(v, |acc, &axis| axis.rotate(acc, self.angle(axis)))
    }

    /// Rotates `v` into the camera frame: same order as [`apply`](Self::apply),
    /// each non-zero angle negated.
    pub fn apply_inverse(&self, v: Vec3) -> Vec3 {
        RotationAxis::ORDER.iter().fold(v, |acc, &axis| {
            let angle = self.angle(axis);
            if angle != 0.0 { axis.rotate(acc, -angle) } else { acc }
        })
    }
}

impl From<[f64; 3]> for Rotation {
    #[inline]
    fn from([yaw, pitch, roll]: [f64; 3]) -> Self {
        Rotation::new(yaw, pitch, roll)
    }
}

impl From<Rotation> for [f64; 3] {
    #[inline]
    fn from(r: Rotation) -> Self {
        [r.yaw, r.pitch, r.roll]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    // ── single axis ───────────────────────────────────────────────────────

    #[test]
    fn rotate_x_quarter_turn_maps_y_to_z() {
        assert_vec_eq(rotate_x(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_2), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rotate_y_quarter_turn_maps_z_to_x() {
        assert_vec_eq(rotate_y(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_z_quarter_turn_maps_x_to_y() {
        assert_vec_eq(rotate_z(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn rotation_round_trips_on_every_axis() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-40.5, 0.25, 900.0),
            Vec3::new(0.0, -7.0, 0.0),
        ];
        let angles = [0.1, -1.3, PI, 2.0 * PI + 0.4, 1e-4];

        for axis in RotationAxis::ORDER {
            for &p in &points {
                for &theta in &angles {
                    let back = axis.rotate(axis.rotate(p, theta), -theta);
                    assert_vec_eq(back, p);
                }
            }
        }
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(3.0, -4.0, 12.0);
        for axis in RotationAxis::ORDER {
            assert_relative_eq!(axis.rotate(p, 0.77).length(), 13.0, epsilon = 1e-9);
        }
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn axis_mapping_uses_yaw_pitch_roll_formulas() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(RotationAxis::Yaw.rotate(p, 0.3), rotate_y(p, 0.3));
        assert_eq!(RotationAxis::Pitch.rotate(p, 0.3), rotate_x(p, 0.3));
        assert_eq!(RotationAxis::Roll.rotate(p, 0.3), rotate_z(p, 0.3));
    }

    #[test]
    fn apply_composes_in_fixed_order() {
        let r = Rotation::new(0.4, -0.9, 1.7);
        let p = Vec3::new(5.0, -1.0, 2.5);
        let expected = rotate_z(rotate_x(rotate_y(p, 0.4), -0.9), 1.7);
        assert_eq!(r.apply(p), expected);
    }

    #[test]
    fn apply_inverse_negates_each_angle_in_same_order() {
        let r = Rotation::new(0.4, -0.9, 1.7);
        let p = Vec3::new(5.0, -1.0, 2.5);
        let expected = rotate_z(rotate_x(rotate_y(p, -0.4), 0.9), -1.7);
        assert_eq!(r.apply_inverse(p), expected);
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = Vec3::new(5.0, -1.0, 2.5);
        assert_eq!(Rotation::default().apply(p), p);
        assert_eq!(Rotation::default().apply_inverse(p), p);
    }

    // ── helpers ───────────────────────────────────────────────────────────

    #[test]
    fn centroid_of_square() {
        let pts = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ];
        assert_eq!(Vec3::centroid(&pts), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(Vec3::centroid(&[]), Vec3::zero());
    }

    #[test]
    fn deserializes_from_triplet() {
        let v: Vec3 = serde_json::from_str("[1.5, -2, 3]").unwrap();
        assert_eq!(v, Vec3::new(1.5, -2.0, 3.0));
    }
}
