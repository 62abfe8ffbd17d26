//! Recorded draw stream.
//!
//! Responsibilities:
//! - flatten canvas-style path calls into polylines (`path`)
//! - snapshot the style state at each fill/stroke (`cmd`)
//! - keep commands in paint order, back-to-front (`list`)
//! - expose all of it as a [`crate::surface::DrawContext`] (`recorder`)

mod cmd;
mod list;
mod path;
mod recorder;

pub use cmd::{DrawCmd, FillCmd, StrokeCmd};
pub use list::DrawList;
pub use path::{Path, SubPath, ARC_STEP};
pub use recorder::Recorder;
