//! Drawing-context contract and the origin-carrying surface wrapper.
//!
//! The engine never creates a platform context; it draws through whatever
//! implements [`DrawContext`]. [`crate::scene::Recorder`] is the in-tree
//! implementation used by the GPU renderer and by tests.

mod context;
mod wrapper;

pub use context::{DrawContext, Shadow};
pub use wrapper::Surface;
