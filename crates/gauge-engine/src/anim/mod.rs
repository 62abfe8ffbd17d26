//! Animation drivers.
//!
//! An [`Animation`] eases a value from `from` to `to` over a duration on top
//! of a fixed-step [`Clock`](crate::time::Clock), calling back once per frame.
//! [`FrameScheduler`] runs any number of drivers on shared frames,
//! [`Sequence`] chains them end to end, and [`OuterLoop`] pairs a fixed
//! update cadence with per-frame drawing.

mod driver;
mod outer;
mod scheduler;
mod sequence;

pub use driver::{run_animation, Animation, DriverConfig, Progress};
pub use outer::{OuterLoop, StopHandle};
pub use scheduler::{FrameScheduler, FrameTask, TaskId};
pub use sequence::Sequence;

/// Control directive returned by per-frame callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

impl Flow {
    #[inline]
    pub fn is_stop(self) -> bool {
        self == Flow::Stop
    }

    /// `Stop` when `done`.
    #[inline]
    pub fn stop_if(done: bool) -> Self {
        if done { Flow::Stop } else { Flow::Continue }
    }
}
