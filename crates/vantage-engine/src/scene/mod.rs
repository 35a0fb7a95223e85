//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic polygon and line commands
//! - keep them in submission order, which is paint order

mod cmd;
mod list;

pub use cmd::{DrawCmd, LineCmd, PolygonCmd};
pub use list::DrawList;
