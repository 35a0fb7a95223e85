//! Contract between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and input; the application sees them only
//! through the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
