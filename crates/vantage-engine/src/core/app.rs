use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Returned from app callbacks to keep running or shut down.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by the runtime.
pub trait App {
    /// Raw window events, after the runtime has updated input state.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
