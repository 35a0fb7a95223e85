//! Vantage engine crate.
//!
//! Platform shell for the viewer: winit window and event loop, keyboard
//! input tracking, frame timing, and a wgpu renderer for flat polygons and
//! lines recorded into a [`scene::DrawList`].

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
