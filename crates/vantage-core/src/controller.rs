//! Camera controller: applies camera-relative control deltas to the camera.

use core::f64::consts::TAU;

use crate::camera::Camera;
use crate::config::{CameraDefaults, ControlConfig};
use crate::input::{ControlInput, Direction};
use crate::math::RotationAxis;

/// Owns the camera and mutates it from per-frame input.
///
/// Every operation is cumulative: calling `move_camera(Forward)` twice moves two steps.
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    speed: f64,
    frame_rate: Option<f64>,
    defaults: CameraDefaults,
    controls: ControlConfig,
}

impl CameraController {
    pub fn new(defaults: CameraDefaults, controls: ControlConfig) -> Self {
        Self {
            camera: defaults.camera(),
            speed: defaults.speed,
            frame_rate: None,
            defaults,
            controls,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current speed multiplier (before frame-rate scaling).
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Records the measured frame rate. Non-finite or non-positive values
    /// disable frame-rate scaling.
    pub fn set_frame_rate(&mut self, fps: f64) {
        self.frame_rate = (fps.is_finite() && fps > 0.0).then_some(fps);
    }

    /// Speed multiplier scaled so motion per second is independent of frame rate.
    pub fn effective_speed(&self) -> f64 {
        match self.frame_rate {
            Some(fps) => self.speed * self.controls.reference_fps / fps,
            None => self.speed,
        }
    }

    /// Moves one step in `direction`, expressed in camera-local axes.
    pub fn move_camera(&mut self, direction: Direction) {
        let local = direction.vector(self.controls.move_step);
        let world = self.camera.rotation.apply(local);
        self.camera.position += world * self.effective_speed();
    }

    /// Turns `axis` by `steps` rotation steps. The per-call delta is wrapped to `[0, 2π)`
    /// in magnitude before its sign is applied.
    pub fn rotate(&mut self, axis: RotationAxis, steps: f64) {
        if steps == 0.0 {
            return;
        }
        let magnitude = (steps.abs() * self.controls.rotation_step * self.effective_speed()) % TAU;
        *self.camera.rotation.angle_mut(axis) += magnitude.copysign(steps);
    }

    pub fn zoom_by(&mut self, steps: f64) {
        let c = &self.controls;
        self.camera.zoom = (self.camera.zoom + steps * c.zoom_step).clamp(c.zoom_min, c.zoom_max);
    }

    pub fn adjust_focal_length(&mut self, steps: f64) {
        let c = &self.controls;
        self.camera.focal_length = (self.camera.focal_length + steps * c.focal_step).max(c.focal_min);
    }

    pub fn speed_up(&mut self) {
        self.speed = (self.speed * self.controls.speed_factor).min(self.controls.speed_max);
    }

    pub fn slow_down(&mut self) {
        self.speed = (self.speed / self.controls.speed_factor).max(self.controls.speed_min);
    }

    /// Restores position, rotation, zoom, focal length and speed to their defaults.
    pub fn reset(&mut self) {
        self.camera = self.defaults.camera();
        self.speed = self.defaults.speed;
        log::debug!("camera reset to {:?}", self.camera.position);
    }

    /// Applies one frame of input measured at `fps`. A reset request wins over
    /// every other delta.
    pub fn apply(&mut self, input: &ControlInput, fps: Option<f64>) {
        self.set_frame_rate(fps.unwrap_or(0.0));
        for &direction in &input.moves {
            self.move_camera(direction);
        }
        for &(axis, steps) in &input.rotations {
            self.rotate(axis, steps);
        }
        if input.zoom != 0.0 {
            self.zoom_by(input.zoom);
        }
        if input.focal != 0.0 {
            self.adjust_focal_length(input.focal);
        }
        match input.speed.signum() {
            1 => self.speed_up(),
            -1 => self.slow_down(),
            _ => {}
        }
        if input.reset {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rotation, Vec3};
    use approx::assert_relative_eq;
    use core::f64::consts::FRAC_PI_2;

    fn unit_speed() -> CameraController {
        let defaults = CameraDefaults { speed: 1.0, ..CameraDefaults::default() };
        CameraController::new(defaults, ControlConfig::default())
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn forward_with_zero_rotation_adds_forward_vector() {
        let mut ctl = unit_speed();
        let start = ctl.camera().position;
        ctl.move_camera(Direction::Forward);
        let step = ControlConfig::default().move_step;
        assert_eq!(ctl.camera().position, start + Vec3::new(0.0, 0.0, -step));
    }

    #[test]
    fn movement_scales_with_speed() {
        let mut ctl = CameraController::new(CameraDefaults::default(), ControlConfig::default());
        let start = ctl.camera().position;
        ctl.move_camera(Direction::Backward);
        assert_relative_eq!(ctl.camera().position.z - start.z, 0.05 * 75.0, epsilon = 1e-9);
    }

    #[test]
    fn movement_follows_yaw() {
        let defaults = CameraDefaults {
            speed: 1.0,
            rotation: Rotation::new(FRAC_PI_2, 0.0, 0.0),
            position: Vec3::zero(),
            ..CameraDefaults::default()
        };
        let mut ctl = CameraController::new(defaults, ControlConfig::default());
        ctl.move_camera(Direction::Forward);
        // Forward (-Z) yawed a quarter turn points along -X.
        let p = ctl.camera().position;
        assert_relative_eq!(p.x, -0.05, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn slow_frames_move_further() {
        let mut ctl = unit_speed();
        ctl.set_frame_rate(37.5);
        assert_relative_eq!(ctl.effective_speed(), 2.0, epsilon = 1e-12);
        ctl.set_frame_rate(0.0);
        assert_eq!(ctl.effective_speed(), 1.0);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_accumulates_signed_steps() {
        let mut ctl = unit_speed();
        ctl.rotate(RotationAxis::Yaw, 3.0);
        ctl.rotate(RotationAxis::Pitch, -2.0);
        let r = ctl.camera().rotation;
        assert_relative_eq!(r.yaw, 3.0 * 0.0001, epsilon = 1e-15);
        assert_relative_eq!(r.pitch, -2.0 * 0.0001, epsilon = 1e-15);
        assert_eq!(r.roll, 0.0);
    }

    #[test]
    fn rotate_delta_wraps_at_full_turn() {
        let controls = ControlConfig { rotation_step: 1.0, ..ControlConfig::default() };
        let defaults = CameraDefaults { speed: 1.0, ..CameraDefaults::default() };
        let mut ctl = CameraController::new(defaults, controls);
        ctl.rotate(RotationAxis::Roll, TAU + 0.5);
        assert_relative_eq!(ctl.camera().rotation.roll, 0.5, epsilon = 1e-12);
        ctl.rotate(RotationAxis::Roll, -(TAU + 0.25));
        assert_relative_eq!(ctl.camera().rotation.roll, 0.25, epsilon = 1e-12);
    }

    // ── clamps ────────────────────────────────────────────────────────────

    #[test]
    fn zoom_is_clamped() {
        let mut ctl = unit_speed();
        ctl.zoom_by(1e9);
        assert_eq!(ctl.camera().zoom, 10.0);
        ctl.zoom_by(-1e9);
        assert_eq!(ctl.camera().zoom, 0.1);
    }

    #[test]
    fn focal_length_stays_positive() {
        let mut ctl = unit_speed();
        ctl.adjust_focal_length(-1e9);
        assert_eq!(ctl.camera().focal_length, 1.0);
        ctl.adjust_focal_length(10.0);
        assert_relative_eq!(ctl.camera().focal_length, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn speed_is_bounded() {
        let mut ctl = unit_speed();
        ctl.slow_down();
        assert_eq!(ctl.speed(), 1.0);
        ctl.speed_up();
        assert_relative_eq!(ctl.speed(), 1.01, epsilon = 1e-12);
        for _ in 0..2000 {
            ctl.speed_up();
        }
        assert_eq!(ctl.speed(), 1000.0);
    }

    // ── reset / apply ─────────────────────────────────────────────────────

    #[test]
    fn reset_restores_defaults() {
        let mut ctl = unit_speed();
        ctl.move_camera(Direction::Left);
        ctl.rotate(RotationAxis::Yaw, 10.0);
        ctl.zoom_by(100.0);
        ctl.adjust_focal_length(-50.0);
        ctl.speed_up();
        ctl.reset();
        assert_eq!(*ctl.camera(), CameraDefaults::default().camera());
        assert_eq!(ctl.speed(), 1.0);
    }

    #[test]
    fn apply_runs_every_delta() {
        let mut ctl = unit_speed();
        let input = ControlInput {
            moves: vec![Direction::Up, Direction::Up],
            rotations: vec![(RotationAxis::Yaw, 1.0)],
            zoom: 10.0,
            speed: 1,
            ..ControlInput::default()
        };
        ctl.apply(&input, Some(75.0));
        let cam = ctl.camera();
        assert_relative_eq!(cam.position.y, 50.0 - 0.1, epsilon = 1e-12);
        assert_relative_eq!(cam.rotation.yaw, 0.0001, epsilon = 1e-15);
        assert_relative_eq!(cam.zoom, 1.01, epsilon = 1e-12);
        assert_relative_eq!(ctl.speed(), 1.01, epsilon = 1e-12);
    }

    #[test]
    fn reset_wins_over_same_frame_deltas() {
        let mut ctl = unit_speed();
        let input = ControlInput {
            moves: vec![Direction::Forward],
            reset: true,
            ..ControlInput::default()
        };
        ctl.apply(&input, None);
        assert_eq!(*ctl.camera(), CameraDefaults::default().camera());
    }
}
