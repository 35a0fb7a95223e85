//! Vantage core crate.
//!
//! Platform-free viewing pipeline: camera transform, scene model, quad
//! subdivision, painter's-algorithm rendering and camera control. Drawing goes
//! through the [`RenderTarget`] trait so the whole pipeline runs headless.

pub mod camera;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod subdivide;
pub mod target;
pub mod viewer;

pub use camera::{Camera, transform};
pub use config::ViewerConfig;
pub use controller::CameraController;
pub use error::{ConfigError, SceneError};
pub use input::{ControlInput, Direction, Toggle};
pub use math::{Rotation, RotationAxis, Vec3};
pub use render::{DepthSortRenderer, DisplayOptions, FrameStats};
pub use scene::{Figure, Quad, Scene};
pub use target::{RenderTarget, Rgba, ScreenPoint, ScreenSize};
pub use viewer::Viewer;
