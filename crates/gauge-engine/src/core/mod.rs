//! Contract between the window runtime and the application it drives.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub(crate) use app::title_update;
pub use ctx::{FrameCtx, WindowCtx};
