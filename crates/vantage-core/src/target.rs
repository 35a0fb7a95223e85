//! Render-target contract and screen-space types.
//!
//! The pipeline never rasterizes anything itself. It emits one call per
//! primitive, in paint order, to a [`RenderTarget`] supplied by the caller.

use serde::{Deserialize, Serialize};

/// Point in screen space (pixels, origin top-left, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Screen resolution used for centering projected points.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

/// 8-bit straight-alpha sRGB color.
///
/// Deserializes from `[r, g, b]` (opaque) or `[r, g, b, a]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "RgbaRepr", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const PURPLE: Rgba = Rgba::rgb(255, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque gray with all channels set to `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RgbaRepr {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl From<RgbaRepr> for Rgba {
    fn from(repr: RgbaRepr) -> Self {
        match repr {
            RgbaRepr::Rgb([r, g, b]) => Rgba::rgb(r, g, b),
            RgbaRepr::Rgba([r, g, b, a]) => Rgba::new(r, g, b, a),
        }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Drawing surface the depth-sort renderer paints into.
///
/// Implementations must preserve call order: later primitives are painted
/// over earlier ones.
pub trait RenderTarget {
    /// Draws a line segment between two screen points.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Rgba);

    /// Fills a polygon given its ordered outline. `color.a < 255` is translucent.
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Rgba);
}

/// Recording target, handy for tests and headless frame dumps.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recorder {
    pub ops: Vec<RecordedOp>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    Line { from: ScreenPoint, to: ScreenPoint, color: Rgba },
    Polygon { points: Vec<ScreenPoint>, color: Rgba },
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[ScreenPoint], Rgba)> {
        self.ops.iter().filter_map(|op| match op {
            RecordedOp::Polygon { points, color } => Some((points.as_slice(), *color)),
            RecordedOp::Line { .. } => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RecordedOp::Line { .. }))
            .count()
    }
}

impl RenderTarget for Recorder {
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Rgba) {
        self.ops.push(RecordedOp::Line { from, to, color });
    }

    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Rgba) {
        self.ops.push(RecordedOp::Polygon { points: points.to_vec(), color });
    }
}
