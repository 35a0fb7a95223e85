//! Glue between the viewer and the engine runtime.

use vantage_core::{FrameStats, RenderTarget, Rgba, ScreenPoint, ScreenSize, Viewer};
use vantage_engine::coords::Vec2;
use vantage_engine::core::{App, AppControl, FrameCtx};
use vantage_engine::paint::Color;
use vantage_engine::render::PolygonRenderer;
use vantage_engine::scene::DrawList;

use crate::bindings;

/// Width of edge lines in logical pixels.
const EDGE_WIDTH: f32 = 1.0;

/// Frames between window-title refreshes.
const TITLE_INTERVAL: u64 = 30;

pub fn to_color(c: Rgba) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, c.a)
}

fn to_vec2(p: ScreenPoint) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Records viewer output into an engine [`DrawList`].
pub struct DrawListTarget<'a> {
    pub list: &'a mut DrawList,
    pub line_width: f32,
}

impl RenderTarget for DrawListTarget<'_> {
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Rgba) {
        self.list.push_line(to_vec2(from), to_vec2(to), self.line_width, to_color(color));
    }

    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Rgba) {
        self.list.push_polygon(points.iter().copied().map(to_vec2), to_color(color));
    }
}

pub struct ViewerApp {
    viewer: Viewer,
    title: String,
    draw_list: DrawList,
    renderer: PolygonRenderer,
    last_stats: FrameStats,
}

impl ViewerApp {
    pub fn new(viewer: Viewer, title: impl Into<String>) -> Self {
        Self {
            viewer,
            title: title.into(),
            draw_list: DrawList::new(),
            renderer: PolygonRenderer::new(),
            last_stats: FrameStats::default(),
        }
    }

    /// Records the current viewer frame into the draw list.
    fn record(&mut self) -> FrameStats {
        self.draw_list.clear();
        let mut target = DrawListTarget { list: &mut self.draw_list, line_width: EDGE_WIDTH };
        self.viewer.render(&mut target)
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.pressed(bindings::EXIT_KEY) {
            log::info!("exit requested");
            return AppControl::Exit;
        }

        let input = bindings::collect(ctx.input, ctx.input_frame);
        self.viewer.update(&input, ctx.time.fps);

        let (w, h) = ctx.window.logical_size();
        let screen = ScreenSize::new(f64::from(w), f64::from(h));
        if screen != self.viewer.screen() {
            log::debug!("viewport now {w}x{h}");
            self.viewer.resize(screen);
        }

        let stats = self.record();
        if stats != self.last_stats {
            log::trace!("frame: {} polygons, {} lines", stats.polygons, stats.lines);
            self.last_stats = stats;
        }

        if ctx.time.frame_index % TITLE_INTERVAL == 0 {
            let fps = ctx.time.fps.unwrap_or(0.0);
            ctx.window.set_title(&format!(
                "{} | {fps:.0} fps | level {} | {} patches",
                self.title,
                self.viewer.subdivision_level(),
                stats.polygons
            ));
        }

        let clear = to_color(self.viewer.background());
        let list = &self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(clear, |rctx, target| renderer.render(rctx, target, list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::{Scene, ViewerConfig};
    use vantage_engine::scene::DrawCmd;

    const BOX: &str = r#"{ "box": [[0,0,0],[10,0,0],[10,10,0],[0,10,0],[0,0,10],[10,0,10],[10,10,10],[0,10,10]] }"#;

    #[test]
    fn colors_are_premultiplied_on_the_way_in() {
        let c = to_color(Rgba::new(255, 0, 0, 51));
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn adapter_keeps_viewer_order() {
        let mut list = DrawList::new();
        let mut target = DrawListTarget { list: &mut list, line_width: 2.0 };
        target.fill_polygon(
            &[ScreenPoint::new(0.0, 0.0), ScreenPoint::new(4.0, 0.0), ScreenPoint::new(0.0, 4.0)],
            Rgba::RED,
        );
        target.draw_line(ScreenPoint::new(1.0, 1.0), ScreenPoint::new(2.0, 2.0), Rgba::WHITE);

        assert!(matches!(list.items()[0], DrawCmd::Polygon(_)));
        let DrawCmd::Line(line) = &list.items()[1] else { panic!("expected line") };
        assert_eq!(line.width, 2.0);
        assert_eq!(line.to, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn recorded_frame_matches_stats() {
        let scene = Scene::from_json_str(BOX).unwrap();
        let viewer = Viewer::new(scene, &ViewerConfig::default());
        let mut app = ViewerApp::new(viewer, "test");

        let stats = app.record();
        assert_eq!(stats.polygons + stats.lines, app.draw_list.len());
        assert_eq!(stats.polygons, 6 * 16);
    }
}
