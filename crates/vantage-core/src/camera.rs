//! Pinhole camera and the world → screen transform.

use crate::math::{Rotation, Vec3};
use crate::target::{ScreenPoint, ScreenSize};

/// Focal factor substituted when a point sits exactly on the camera plane
/// (camera-relative z == 0). Keeps the projection finite; it is not a near-plane clip.
pub const DEGENERATE_FOCAL_FACTOR: f64 = 0.0001;

/// Camera state mutated by the controller every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Rotation,
    pub focal_length: f64,
    pub zoom: f64,
}

impl Camera {
    #[inline]
    pub const fn new(position: Vec3, rotation: Rotation, focal_length: f64, zoom: f64) -> Self {
        Self { position, rotation, focal_length, zoom }
    }

    /// Maps a world point onto the screen.
    #[inline]
    pub fn project(&self, point: Vec3, screen: ScreenSize) -> ScreenPoint {
        transform(point, self.position, self.rotation, self.focal_length, self.zoom, screen)
    }

    /// Point expressed in camera space (translated, then rotated into the camera frame).
    #[inline]
    pub fn to_camera_space(&self, point: Vec3) -> Vec3 {
        self.rotation.apply_inverse(point - self.position)
    }

    /// Distance from the camera position to `point`.
    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f64 {
        self.position.distance(point)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 50.0, 750.0), Rotation::default(), 1000.0, 1.0)
    }
}

/// Full transform pipeline: translate, rotate into the camera frame,
/// perspective-scale, zoom, then center on the screen.
pub fn transform(
    point: Vec3,
    position: Vec3,
    rotation: Rotation,
    focal_length: f64,
    zoom: f64,
    screen: ScreenSize,
) -> ScreenPoint {
    let local = rotation.apply_inverse(point - position);

    let factor = if local.z != 0.0 {
        focal_length / local.z
    } else {
        DEGENERATE_FOCAL_FACTOR
    };

    let (x, y) = project_orthographic(local);
    let center = screen.center();

    ScreenPoint::new(x * factor * zoom + center.x, y * factor * zoom + center.y)
}

/// Fixed orthographic projection `[[1,0,0],[0,1,0],[0,0,0]]`: drops z.
#[inline]
fn project_orthographic(p: Vec3) -> (f64, f64) {
    (p.x, p.y)
}
