use super::{MonotonicTime, TimeSource};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time since the previous frame, clamped, in milliseconds.
    pub dt_ms: f64,

    /// Time-source reading taken at the tick.
    pub now_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    #[inline]
    pub fn dt_secs(&self) -> f64 {
        self.dt_ms / 1000.0
    }
}

/// Variable-rate frame clock, one per render loop.
///
/// Delta time is clamped so a debugger pause, a minimized window, or a long
/// stall does not hand downstream code a pathological value.
#[derive(Debug, Clone)]
pub struct FrameClock<T: TimeSource = MonotonicTime> {
    time: T,
    last: f64,
    frame_index: u64,
    dt_min: f64,
    dt_max: f64,
}

impl FrameClock<MonotonicTime> {
    /// Clamps dt into 0.1ms..250ms.
    pub fn new() -> Self {
        Self::with_source(MonotonicTime::new())
    }
}

impl Default for FrameClock<MonotonicTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> FrameClock<T> {
    pub fn with_source(time: T) -> Self {
        Self::with_clamps(time, 0.1, 250.0)
    }

    pub fn with_clamps(time: T, dt_min_ms: f64, dt_max_ms: f64) -> Self {
        debug_assert!(dt_min_ms <= dt_max_ms);
        let last = time.now_ms();
        Self {
            time,
            last,
            frame_index: 0,
            dt_min: dt_min_ms,
            dt_max: dt_max_ms,
        }
    }

    /// Resets the baseline, e.g. after resuming from suspension.
    pub fn reset(&mut self) {
        self.last = self.time.now_ms();
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = self.time.now_ms();
        let dt = (now - self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt_ms: dt,
            now_ms: now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualTime;

    #[test]
    fn dt_is_clamped_both_ways() {
        let t = ManualTime::new();
        let mut fc = FrameClock::with_source(t.clone());

        let ft = fc.tick();
        assert_eq!(ft.dt_ms, 0.1);
        assert_eq!(ft.frame_index, 0);

        t.advance(16.0);
        assert_eq!(fc.tick().dt_ms, 16.0);

        t.advance(5_000.0);
        let ft = fc.tick();
        assert_eq!(ft.dt_ms, 250.0);
        assert_eq!(ft.frame_index, 2);
    }

    #[test]
    fn reset_moves_baseline() {
        let t = ManualTime::new();
        let mut fc = FrameClock::with_source(t.clone());
        t.advance(100.0);
        fc.reset();
        t.advance(8.0);
        assert_eq!(fc.tick().dt_ms, 8.0);
    }
}
