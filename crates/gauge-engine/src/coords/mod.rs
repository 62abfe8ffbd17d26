//! Coordinate and geometry types shared by the shape model, the recorder and
//! the renderers.
//!
//! Canonical CPU space:
//! - Logical pixels, `f64` (canvas-style drawing API)
//! - Origin top-left
//! - +X right, +Y down, so positive angles turn clockwise on screen
//!
//! Renderers convert to `f32` NDC in shaders using a viewport uniform.

mod angle;
mod point;
mod rect;
mod viewport;

pub use angle::Angle;
pub use point::{Point, Transform};
pub use rect::Rect;
pub use viewport::Viewport;
