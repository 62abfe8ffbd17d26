//! Time subsystem.
//!
//! - [`Clock`]: fixed-timestep simulation clock driving animations
//! - [`FrameClock`]: variable-rate frame timing for render loops
//! - [`TimeSource`]: millisecond monotonic time, real or manual
//!
//! Everything here is measured in milliseconds as `f64`.

mod clock;
mod frame_clock;
mod source;

pub use clock::{Clock, ClockState};
pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualTime, MonotonicTime, TimeSource};

/// Default fixed step: one 60 Hz frame, in milliseconds.
pub const DEFAULT_TICK_MS: f64 = 1000.0 / 60.0;
