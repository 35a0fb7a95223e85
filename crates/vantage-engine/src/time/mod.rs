//! Frame timing.
//!
//! One `FrameClock` per window; call `tick()` once per presented frame to
//! get a `FrameTime` with the clamped delta and a smoothed frame rate.

mod frame_clock;

pub use frame_clock::{FpsEstimator, FrameClock, FrameTime};
