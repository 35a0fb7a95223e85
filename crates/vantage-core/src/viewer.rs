//! Viewer: all per-frame state of one interactive session.

use crate::camera::Camera;
use crate::config::{RenderConfig, ViewerConfig};
use crate::controller::CameraController;
use crate::input::ControlInput;
use crate::render::{DepthSortRenderer, DisplayOptions, FrameStats, FrameView};
use crate::scene::Scene;
use crate::subdivide::{MAX_LEVEL, SubdividedWalls};
use crate::target::{RenderTarget, Rgba, ScreenSize};

/// Owns the camera controller, scene, subdivided walls and display options.
///
/// Driven by one frame loop: `update` with the frame's input, then `render`.
#[derive(Debug, Clone)]
pub struct Viewer {
    controller: CameraController,
    scene: Scene,
    walls: SubdividedWalls,
    renderer: DepthSortRenderer,
    options: DisplayOptions,
    subdivision_level: u32,
    light_strength: f64,
    render_cfg: RenderConfig,
}

impl Viewer {
    pub fn new(scene: Scene, config: &ViewerConfig) -> Self {
        let mut render_cfg = config.render.clone();
        render_cfg.subdivision_max = render_cfg.subdivision_max.min(MAX_LEVEL);
        let subdivision_level = render_cfg.subdivision_level.min(render_cfg.subdivision_max);
        let walls = SubdividedWalls::build(&scene, subdivision_level);

        log::info!(
            "viewer ready: {} figures, {} walls, {} patches at level {subdivision_level}",
            scene.figures().len(),
            scene.wall_count(),
            walls.len()
        );

        Self {
            controller: CameraController::new(config.camera.clone(), config.controls.clone()),
            renderer: DepthSortRenderer::new(config.screen, &render_cfg),
            options: DisplayOptions::default(),
            light_strength: render_cfg.light_strength,
            subdivision_level,
            scene,
            walls,
            render_cfg,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        self.controller.camera()
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn walls(&self) -> &SubdividedWalls {
        &self.walls
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn subdivision_level(&self) -> u32 {
        self.subdivision_level
    }

    pub fn light_strength(&self) -> f64 {
        self.light_strength
    }

    pub fn background(&self) -> Rgba {
        self.render_cfg.background
    }

    pub fn screen(&self) -> ScreenSize {
        self.renderer.screen()
    }

    /// Re-centers the projection after the drawing surface changed size.
    pub fn resize(&mut self, screen: ScreenSize) {
        self.renderer.set_screen(screen);
    }

    /// Applies one frame of input measured at `fps`.
    pub fn update(&mut self, input: &ControlInput, fps: Option<f64>) {
        self.controller.apply(input, fps);

        for &toggle in &input.toggles {
            self.options.toggle(toggle);
            log::debug!("toggled {toggle:?}: {:?}", self.options);
        }

        if input.subdivision != 0 {
            self.change_subdivision(input.subdivision);
        }

        if input.light != 0.0 {
            let r = &self.render_cfg;
            self.light_strength =
                (self.light_strength + input.light * r.light_step).clamp(r.light_min, r.light_max);
        }
    }

    /// Moves the subdivision level by `delta`, clamped to `[0, subdivision_max]`.
    /// Walls are rebuilt only when the level actually changes.
    pub fn change_subdivision(&mut self, delta: i32) {
        let max = i64::from(self.render_cfg.subdivision_max);
        let level = (i64::from(self.subdivision_level) + i64::from(delta)).clamp(0, max);
        // Clamped into [0, u32::MAX].
        self.subdivision_level = level as u32;
        self.walls.rebuild_if_needed(&self.scene, self.subdivision_level);
    }

    /// Draws one frame into `target`.
    pub fn render<T: RenderTarget + ?Sized>(&self, target: &mut T) -> FrameStats {
        let frame = FrameView {
            camera: self.controller.camera(),
            scene: &self.scene,
            walls: self.walls.quads(),
            options: self.options,
            light_strength: self.light_strength,
        };
        self.renderer.render(&frame, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Direction, Toggle};
    use crate::math::Vec3;
    use crate::target::Recorder;
    use approx::assert_relative_eq;

    const CUBE: &str = r#"{
        "cube": [[-50,-50,-50],[50,-50,-50],[50,50,-50],[-50,50,-50],
                 [-50,-50,50],[50,-50,50],[50,50,50],[-50,50,50]]
    }"#;

    fn viewer() -> Viewer {
        Viewer::new(Scene::from_json_str(CUBE).unwrap(), &ViewerConfig::default())
    }

    #[test]
    fn initial_frame_draws_every_patch() {
        let v = viewer();
        let mut rec = Recorder::new();
        let stats = v.render(&mut rec);
        assert_eq!(v.subdivision_level(), 2);
        assert_eq!(stats, FrameStats { polygons: 6 * 16, lines: 0 });
    }

    #[test]
    fn subdivision_is_clamped() {
        let mut v = viewer();
        v.update(&ControlInput { subdivision: -5, ..ControlInput::default() }, None);
        assert_eq!(v.subdivision_level(), 0);
        assert_eq!(v.walls().len(), 6);

        v.update(&ControlInput { subdivision: 100, ..ControlInput::default() }, None);
        assert_eq!(v.subdivision_level(), 6);
        assert_eq!(v.walls().level(), Some(6));
    }

    #[test]
    fn subdivision_never_exceeds_max_level() {
        let mut config = ViewerConfig::default();
        config.render.subdivision_max = 40;
        let wall = r#"{ "w": { "points": [[0,0,0],[10,0,0],[10,10,0],[0,10,0]], "edges": [], "walls": [[0,1,2,3]] } }"#;
        let mut v = Viewer::new(Scene::from_json_str(wall).unwrap(), &config);

        v.change_subdivision(38);
        assert_eq!(v.subdivision_level(), MAX_LEVEL);
        assert_eq!(v.walls().len(), 4usize.pow(MAX_LEVEL));
    }

    #[test]
    fn light_strength_is_clamped() {
        let mut v = viewer();
        v.update(&ControlInput { light: -1000.0, ..ControlInput::default() }, None);
        assert_relative_eq!(v.light_strength(), 0.01);
        v.update(&ControlInput { light: 3.0, ..ControlInput::default() }, None);
        assert_relative_eq!(v.light_strength(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn toggles_change_what_is_drawn() {
        let mut v = viewer();
        let input = ControlInput { toggles: vec![Toggle::Walls, Toggle::Edges], ..ControlInput::default() };
        v.update(&input, None);
        let mut rec = Recorder::new();
        assert_eq!(v.render(&mut rec), FrameStats { polygons: 0, lines: 12 });
    }

    #[test]
    fn update_moves_the_camera() {
        let mut v = viewer();
        let before = v.camera().position;
        v.update(&ControlInput { moves: vec![Direction::Forward], ..ControlInput::default() }, Some(75.0));
        let after = v.camera().position;
        assert_relative_eq!(after.z, before.z - 0.05 * 75.0, epsilon = 1e-9);
        assert_eq!(Vec3::new(after.x, after.y, 0.0), Vec3::new(before.x, before.y, 0.0));
    }
}
