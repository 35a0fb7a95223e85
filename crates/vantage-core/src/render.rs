//! Painter's-algorithm renderer.
//!
//! Every frame the subdivided wall patches are sorted by distance from the
//! camera, farthest first, and painted in that order so nearer patches
//! overwrite farther ones. There is no depth buffer; intersecting or
//! interleaved geometry can be drawn in the wrong order.

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::input::Toggle;
use crate::scene::Scene;
use crate::subdivide::TaggedQuad;
use crate::target::{RenderTarget, Rgba, ScreenPoint, ScreenSize};

/// Display flags flipped at runtime.
///
/// The edge overlay starts off: edges are not depth sorted, so over solid
/// walls they would show hidden back edges.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisplayOptions {
    pub draw_walls: bool,
    pub solid_walls: bool,
    pub color_walls: bool,
    pub draw_edges: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { draw_walls: true, solid_walls: true, color_walls: true, draw_edges: false }
    }
}

impl DisplayOptions {
    pub fn toggle(&mut self, toggle: Toggle) {
        let flag = match toggle {
            Toggle::Walls => &mut self.draw_walls,
            Toggle::SolidWalls => &mut self.solid_walls,
            Toggle::ColorWalls => &mut self.color_walls,
            Toggle::Edges => &mut self.draw_edges,
        };
        *flag = !*flag;
    }
}

/// Primitive counts for one rendered frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub polygons: usize,
    pub lines: usize,
}

/// Wall patch index paired with its depth key.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthEntry {
    pub depth: f64,
    pub index: usize,
}

/// Orders `quads` farthest first by camera distance to each centroid.
///
/// The sort is stable, so equal depths keep their input order.
pub fn depth_sorted(camera: &Camera, quads: &[TaggedQuad]) -> Vec<DepthEntry> {
    let mut order: Vec<DepthEntry> = quads
        .iter()
        .enumerate()
        .map(|(index, t)| DepthEntry { depth: camera.distance_to(t.quad.centroid()), index })
        .collect();
    order.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    order
}

/// Gray level for monochrome shading: farther patches are darker,
/// a stronger light brightens everything.
pub fn mono_shade(depth: f64, light_strength: f64) -> u8 {
    (255.0 - (depth / 5.0) / light_strength).clamp(0.0, 255.0) as u8
}

/// Everything a frame reads, borrowed from the owning viewer.
#[derive(Debug, Copy, Clone)]
pub struct FrameView<'a> {
    pub camera: &'a Camera,
    pub scene: &'a Scene,
    pub walls: &'a [TaggedQuad],
    pub options: DisplayOptions,
    pub light_strength: f64,
}

#[derive(Debug, Clone)]
pub struct DepthSortRenderer {
    screen: ScreenSize,
    palette: Vec<Rgba>,
    translucent_alpha: u8,
    edge_color: Rgba,
}

impl DepthSortRenderer {
    pub fn new(screen: ScreenSize, config: &RenderConfig) -> Self {
        Self {
            screen,
            palette: config.palette.clone(),
            translucent_alpha: config.translucent_alpha,
            edge_color: config.edge_color,
        }
    }

    #[inline]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Updates the projection target after a resize.
    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    /// Palette color for a figure index.
    pub fn figure_color(&self, figure: usize) -> Rgba {
        match self.palette.len() {
            0 => Rgba::WHITE,
            n => self.palette[figure % n],
        }
    }

    /// Paints one frame into `target`: walls back to front, then edges.
    pub fn render<T: RenderTarget + ?Sized>(&self, frame: &FrameView<'_>, target: &mut T) -> FrameStats {
        let mut stats = FrameStats::default();
        let opts = frame.options;

        if opts.draw_walls && !frame.walls.is_empty() {
            let alpha = if opts.solid_walls { 255 } else { self.translucent_alpha };
            let order = depth_sorted(frame.camera, frame.walls);
            let mut prev_depth = order[0].depth;

            for entry in &order {
                let tagged = &frame.walls[entry.index];
                let color = if opts.color_walls {
                    self.figure_color(tagged.figure)
                } else {
                    Rgba::gray(mono_shade(prev_depth, frame.light_strength))
                };
                prev_depth = entry.depth;

                let outline = tagged.quad.0.map(|p| frame.camera.project(p, self.screen));
                if !outline.iter().all(|p| p.is_finite()) {
                    continue;
                }
                target.fill_polygon(&outline, color.with_alpha(alpha));
                stats.polygons += 1;
            }
        }

        if opts.draw_edges {
            for figure in frame.scene.figures() {
                for (a, b) in figure.edge_segments() {
                    let from: ScreenPoint = frame.camera.project(a, self.screen);
                    let to = frame.camera.project(b, self.screen);
                    if from.is_finite() && to.is_finite() {
                        target.draw_line(from, to, self.edge_color);
                        stats.lines += 1;
                    }
                }
            }
        }

        stats
    }
}
