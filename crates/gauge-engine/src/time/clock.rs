use super::{MonotonicTime, TimeSource, DEFAULT_TICK_MS};

/// Lifecycle of a [`Clock`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ClockState {
    /// Constructed or reset; never started since.
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Fixed-timestep virtual clock.
///
/// Real time and simulated time are tracked separately. Every `tick()` adds
/// the real delta since the previous tick to `elapsed_time`, but advances
/// simulated time by exactly one `tick_size`, regardless of how long the
/// frame actually took. Callers catch simulated time up to real time by
/// ticking while [`Clock::backlog`] covers at least one step.
#[derive(Debug, Clone)]
pub struct Clock<T: TimeSource = MonotonicTime> {
    time: T,
    state: ClockState,
    auto_start: bool,
    tick_size: f64,

    start_time: f64,
    prev_time: f64,
    elapsed_time: f64,
    tick_count: u64,
    dropped: f64,
}

impl Clock<MonotonicTime> {
    /// Wall-clock clock with the given step in milliseconds.
    pub fn new(tick_size: f64) -> Self {
        Self::with_source(MonotonicTime::new(), tick_size)
    }
}

impl Default for Clock<MonotonicTime> {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS)
    }
}

impl<T: TimeSource> Clock<T> {
    pub fn with_source(time: T, tick_size: f64) -> Self {
        debug_assert!(tick_size > 0.0, "tick size must be positive");
        Self {
            time,
            state: ClockState::Idle,
            auto_start: false,
            tick_size,
            start_time: 0.0,
            prev_time: 0.0,
            elapsed_time: 0.0,
            tick_count: 0,
            dropped: 0.0,
        }
    }

    /// When set, a `tick()` on a clock that is not running starts it.
    pub fn auto_start(mut self, enabled: bool) -> Self {
        self.auto_start = enabled;
        self
    }

    /// Clears every accumulator and starts running from now.
    pub fn start(&mut self) {
        let now = self.time.now_ms();
        self.start_time = now;
        self.prev_time = now;
        self.elapsed_time = 0.0;
        self.tick_count = 0;
        self.dropped = 0.0;
        self.state = ClockState::Running;
        log::debug!("clock started at {now:.3}ms");
    }

    /// Halts accumulation. Accumulated values stay readable.
    pub fn stop(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Stopped;
            log::debug!(
                "clock stopped after {} ticks ({:.3}ms real)",
                self.tick_count,
                self.elapsed_time
            );
        }
    }

    /// Back to `Idle` with cleared accumulators.
    pub fn reset(&mut self) {
        self.state = ClockState::Idle;
        self.elapsed_time = 0.0;
        self.tick_count = 0;
        self.dropped = 0.0;
    }

    /// Advances by one fixed step and returns the real delta since the
    /// previous tick.
    ///
    /// A clock that is not running returns 0 and changes nothing, unless it
    /// auto-starts, in which case this call only starts it.
    pub fn tick(&mut self) -> f64 {
        if self.state != ClockState::Running {
            if self.auto_start {
                self.start();
            }
            return 0.0;
        }

        let now = self.time.now_ms();
        let delta = now - self.prev_time;
        self.prev_time = now;
        self.elapsed_time += delta;
        self.tick_count += 1;
        delta
    }

    /// Real time not yet covered by simulated ticks.
    pub fn backlog(&self) -> f64 {
        if self.state != ClockState::Running {
            return 0.0;
        }
        self.time.now_ms() - self.start_time - self.dropped - self.elapsed_ticks()
    }

    /// Forgets the current backlog so simulated time resumes from here
    /// instead of racing to catch up. Returns the dropped milliseconds.
    pub fn drop_backlog(&mut self) -> f64 {
        let backlog = self.backlog();
        if backlog > 0.0 {
            self.dropped += backlog;
            backlog
        } else {
            0.0
        }
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    #[inline]
    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Accumulated real time across ticks, in milliseconds.
    #[inline]
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Simulated time: `tick_count * tick_size`, in milliseconds.
    #[inline]
    pub fn elapsed_ticks(&self) -> f64 {
        self.tick_count as f64 * self.tick_size
    }

    #[inline]
    pub fn time_source(&self) -> &T {
        &self.time
    }
}
