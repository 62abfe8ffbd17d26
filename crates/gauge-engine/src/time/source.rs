use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Millisecond-resolution monotonic time.
pub trait TimeSource {
    /// Milliseconds since an arbitrary fixed point; never decreases.
    fn now_ms(&self) -> f64;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Copy, Clone)]
pub struct MonotonicTime {
    base: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self { base: Instant::now() }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.base.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced time. Clones share the same reading, so a test can hold
/// one handle while clocks and drivers hold others.
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Rc<Cell<f64>>,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: f64) {
        debug_assert!(ms >= self.now.get(), "manual time must not run backwards");
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.set(self.now.get() + ms);
    }
}

impl TimeSource for ManualTime {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
