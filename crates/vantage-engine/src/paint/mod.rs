//! Paint model for renderers.
//!
//! Colors are stored linear-ish premultiplied so the polygon pipeline can use
//! `One, OneMinusSrcAlpha` blending directly.

pub mod color;

pub use color::Color;
