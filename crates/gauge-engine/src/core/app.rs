use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// What the runtime does after an app callback returns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum AppControl {
    #[default]
    Continue,
    /// Close the window and leave the event loop.
    Exit,
}

impl AppControl {
    #[inline]
    pub fn is_exit(self) -> bool {
        self == AppControl::Exit
    }
}

/// A gauge application hosted by [`Runtime`](crate::window::Runtime).
///
/// The runtime owns the window and GPU. Per redraw it calls
/// [`on_frame`](App::on_frame) and then syncs the window title from
/// [`title`](App::title).
pub trait App {
    /// Sees every window event before the runtime handles resize and close.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Draws one frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Desired window title, or `None` to keep the current one.
    fn title(&self) -> Option<String> {
        None
    }
}

/// Returns the title to apply when `wanted` differs from `current`.
pub(crate) fn title_update(current: &str, wanted: Option<String>) -> Option<String> {
    wanted.filter(|t| t != current)
}
