//! Composite meshes with progress-aware drawing.
//!
//! Each builder returns a [`Mesh`](crate::shape::Mesh) tagged with a
//! [`MeshKind`](crate::shape::MeshKind); the mesh's `draw` dispatches to the
//! matching `draw` function here.

pub(crate) mod intervals;
pub(crate) mod rounded_arc;
pub(crate) mod rounded_rect;

pub use intervals::progress_bar_intervals;
pub use rounded_arc::{rounded_arc, set_rounded_arc_color};
pub use rounded_rect::rounded_rect;
