//! Per-frame control input.
//!
//! Produced once per frame by whatever polls the keyboard; the core never
//! talks to devices. Continuous controls (held keys) carry step counts,
//! discrete ones (toggles, subdivision) carry edge-triggered flags.

use crate::math::{RotationAxis, Vec3};

/// Camera-relative movement direction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unrotated movement vector for one step of length `step`.
    ///
    /// Forward is -Z (into the scene). The projection mirrors both screen axes
    /// for points in front of the camera, so left is +X and up is -Y.
    pub fn vector(self, step: f64) -> Vec3 {
        match self {
            Direction::Forward => Vec3::new(0.0, 0.0, -step),
            Direction::Backward => Vec3::new(0.0, 0.0, step),
            Direction::Left => Vec3::new(step, 0.0, 0.0),
            Direction::Right => Vec3::new(-step, 0.0, 0.0),
            Direction::Up => Vec3::new(0.0, -step, 0.0),
            Direction::Down => Vec3::new(0.0, step, 0.0),
        }
    }
}

/// Display flag flipped by a toggle request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Toggle {
    /// Draw wall polygons at all.
    Walls,
    /// Opaque walls vs. see-through walls.
    SolidWalls,
    /// Palette colors vs. monochrome distance shading.
    ColorWalls,
    /// Wireframe edge overlay.
    Edges,
}

/// One frame of control deltas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlInput {
    /// Directions held this frame; each contributes one step.
    pub moves: Vec<Direction>,
    /// Signed rotation steps per axis.
    pub rotations: Vec<(RotationAxis, f64)>,
    /// Signed zoom steps.
    pub zoom: f64,
    /// Signed focal-length steps.
    pub focal: f64,
    /// Positive raises the speed multiplier, negative lowers it. Magnitude is ignored.
    pub speed: i32,
    /// Signed light-strength steps.
    pub light: f64,
    /// Signed subdivision level change.
    pub subdivision: i32,
    pub toggles: Vec<Toggle>,
    pub reset: bool,
}

impl ControlInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
