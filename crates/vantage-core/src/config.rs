//! Viewer configuration.
//!
//! One explicit record handed to the controller and renderer at construction.
//! Every field has a default, so a config file only needs the values it changes.
//! Inconsistent values are repaired by [`ViewerConfig::sanitized`], never rejected.

use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::ConfigError;
use crate::math::{Rotation, Vec3};
use crate::subdivide::MAX_LEVEL;
use crate::target::{Rgba, ScreenSize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub screen: ScreenSize,
    pub camera: CameraDefaults,
    pub controls: ControlConfig,
    pub render: RenderConfig,
}

/// Values the camera starts with and returns to on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDefaults {
    pub position: Vec3,
    pub rotation: Rotation,
    pub focal_length: f64,
    pub zoom: f64,
    /// Speed multiplier applied to movement and rotation steps.
    pub speed: f64,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 50.0, 750.0),
            rotation: Rotation::default(),
            focal_length: 1000.0,
            zoom: 1.0,
            speed: 75.0,
        }
    }
}

impl CameraDefaults {
    pub fn camera(&self) -> Camera {
        Camera::new(self.position, self.rotation, self.focal_length, self.zoom)
    }
}

/// Step sizes and bounds for camera controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Length of one unscaled movement step along a camera axis.
    pub move_step: f64,
    /// Radians per unscaled rotation step.
    pub rotation_step: f64,
    pub zoom_step: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub focal_step: f64,
    pub focal_min: f64,
    /// Factor the speed multiplier is multiplied / divided by per adjustment.
    pub speed_factor: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Frame rate at which steps are applied unscaled. Slower frames move further.
    pub reference_fps: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_step: 0.05,
            rotation_step: 0.0001,
            zoom_step: 0.001,
            zoom_min: 0.1,
            zoom_max: 10.0,
            focal_step: 0.1,
            focal_min: 1.0,
            speed_factor: 1.01,
            speed_min: 1.0,
            speed_max: 1000.0,
            reference_fps: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub subdivision_level: u32,
    pub subdivision_max: u32,
    pub light_strength: f64,
    pub light_min: f64,
    pub light_max: f64,
    pub light_step: f64,
    /// Alpha used for see-through walls.
    pub translucent_alpha: u8,
    /// Wall colors, picked by figure index modulo length.
    pub palette: Vec<Rgba>,
    pub edge_color: Rgba,
    pub background: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            subdivision_level: 2,
            subdivision_max: 6,
            light_strength: 1.0,
            light_min: 0.01,
            light_max: 100.0,
            light_step: 0.01,
            translucent_alpha: 50,
            palette: default_palette(),
            edge_color: Rgba::WHITE,
            background: Rgba::BLACK,
        }
    }
}

pub fn default_palette() -> Vec<Rgba> {
    vec![Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::PURPLE]
}

impl ViewerConfig {
    /// Parses a JSON config; missing fields take their defaults.
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: ViewerConfig = serde_json::from_str(src)?;
        Ok(cfg.sanitized())
    }

    /// Repairs out-of-range or inconsistent values, logging each repair.
    pub fn sanitized(mut self) -> Self {
        let c = &mut self.controls;
        if c.zoom_min <= 0.0 {
            log::warn!("zoom_min {} must be positive; using 0.1", c.zoom_min);
            c.zoom_min = 0.1;
        }
        if c.zoom_min > c.zoom_max {
            log::warn!("zoom bounds [{}, {}] inverted; swapping", c.zoom_min, c.zoom_max);
            std::mem::swap(&mut c.zoom_min, &mut c.zoom_max);
        }
        if c.focal_min <= 0.0 {
            log::warn!("focal_min {} must be positive; using 1.0", c.focal_min);
            c.focal_min = 1.0;
        }
        if c.speed_min > c.speed_max {
            log::warn!("speed bounds [{}, {}] inverted; swapping", c.speed_min, c.speed_max);
            std::mem::swap(&mut c.speed_min, &mut c.speed_max);
        }
        if c.speed_factor <= 1.0 {
            log::warn!("speed_factor {} must exceed 1; using 1.01", c.speed_factor);
            c.speed_factor = 1.01;
        }
        if c.reference_fps <= 0.0 {
            log::warn!("reference_fps {} must be positive; using 75", c.reference_fps);
            c.reference_fps = 75.0;
        }

        let cam = &mut self.camera;
        let zoom = cam.zoom.clamp(c.zoom_min, c.zoom_max);
        if zoom != cam.zoom {
            log::warn!("initial zoom {} clamped to {zoom}", cam.zoom);
            cam.zoom = zoom;
        }
        if cam.focal_length < c.focal_min {
            log::warn!("initial focal length {} raised to {}", cam.focal_length, c.focal_min);
            cam.focal_length = c.focal_min;
        }
        cam.speed = cam.speed.clamp(c.speed_min, c.speed_max);

        let r = &mut self.render;
        if r.palette.is_empty() {
            log::warn!("empty palette; using default colors");
            r.palette = default_palette();
        }
        if r.subdivision_max > MAX_LEVEL {
            log::warn!("subdivision_max {} too deep; using {MAX_LEVEL}", r.subdivision_max);
            r.subdivision_max = MAX_LEVEL;
        }
        if r.subdivision_level > r.subdivision_max {
            log::warn!(
                "subdivision level {} above max {}; clamping",
                r.subdivision_level,
                r.subdivision_max
            );
            r.subdivision_level = r.subdivision_max;
        }
        if r.light_min <= 0.0 {
            log::warn!("light_min {} must be positive; using 0.01", r.light_min);
            r.light_min = 0.01;
        }
        if r.light_min > r.light_max {
            std::mem::swap(&mut r.light_min, &mut r.light_max);
        }
        r.light_strength = r.light_strength.clamp(r.light_min, r.light_max);

        self
    }
}
