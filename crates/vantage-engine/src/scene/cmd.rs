use crate::coords::Vec2;
use crate::paint::Color;

/// Filled polygon outline in logical pixels. Filled as a fan from the first point,
/// so it must be convex (projected quads are, unless they straddle the camera).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

/// Straight segment of constant screen-space width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Line(LineCmd),
}
