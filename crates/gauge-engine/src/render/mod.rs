//! GPU rendering subsystem.
//!
//! Renderers consume recorded `scene` draw lists and issue GPU commands via
//! wgpu. Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod common;
mod ctx;
mod path;
mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use path::PathRenderer;
pub use tessellate::{tessellate, Batch, PathVertex, Tessellation};
