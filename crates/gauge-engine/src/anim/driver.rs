use std::future::Future;
use std::time::Duration;

use crate::math::{clamp, EasingFn};
use crate::time::{Clock, MonotonicTime, TimeSource, DEFAULT_TICK_MS};

use super::scheduler::FrameTask;
use super::Flow;

/// Slack for comparing the clock backlog against one step, so exact
/// frame-length advances are not lost to rounding.
const TICK_EPSILON: f64 = 1e-6;

/// Driver tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DriverConfig {
    /// Fixed simulation step, in milliseconds.
    pub tick_size: f64,
    /// Most ticks a single frame may run while catching up.
    pub time_out: u32,
    /// Start the clock on the first frame instead of at construction.
    pub auto_start: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_size: DEFAULT_TICK_MS,
            time_out: 120,
            auto_start: false,
        }
    }
}

/// Per-frame values handed to the animation callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Progress {
    /// Eased value between `from` and `to`.
    pub value: f64,
    /// Eased progress in `[0, 1]` (may leave the range for overshooting
    /// easings).
    pub progress: f64,
    /// Simulated milliseconds, clamped to the duration.
    pub ticks: f64,
}

/// Eases from `from` to `to` over `duration` milliseconds.
///
/// Simulated time comes from a fixed-step [`Clock`]. Each [`frame`]
/// ticks the clock until simulated time catches up with real time, bounded
/// by [`DriverConfig::time_out`]; anything left over after that is dropped.
///
/// The animation ends once simulated time reaches the duration or the
/// callback returns [`Flow::Stop`].
///
/// `duration` must be positive.
///
/// [`frame`]: Animation::frame
pub struct Animation<F, T: TimeSource = MonotonicTime> {
    clock: Clock<T>,
    config: DriverConfig,
    from: f64,
    to: f64,
    duration: f64,
    easing: EasingFn,
    on_progress: F,
    last_catch_up: u32,
    done: bool,
}

/// Starts an animation on wall-clock time with the default configuration.
pub fn run_animation<F>(to: f64, from: f64, duration: f64, on_progress: F, easing: EasingFn) -> Animation<F>
where
    F: FnMut(Progress) -> Flow,
{
    Animation::with_source(MonotonicTime::new(), DriverConfig::default(), to, from, duration, on_progress, easing)
}

impl<F, T> Animation<F, T>
where
    F: FnMut(Progress) -> Flow,
    T: TimeSource,
{
    pub fn with_source(
        time: T,
        config: DriverConfig,
        to: f64,
        from: f64,
        duration: f64,
        on_progress: F,
        easing: EasingFn,
    ) -> Self {
        debug_assert!(duration > 0.0, "animation duration must be positive");
        let mut clock = Clock::with_source(time, config.tick_size).auto_start(config.auto_start);
        if !config.auto_start {
            clock.start();
        }
        Self {
            clock,
            config,
            from,
            to,
            duration,
            easing,
            on_progress,
            last_catch_up: 0,
            done: false,
        }
    }

    /// Runs one animation frame.
    ///
    /// Returns `Flow::Stop` on the frame the animation ends and on every
    /// call after that.
    pub fn frame(&mut self) -> Flow {
        if self.done {
            return Flow::Stop;
        }
        if !self.clock.is_running() {
            self.clock.tick();
        }

        let step = self.clock.tick_size();
        let mut n = 0;
        while n < self.config.time_out && self.clock.backlog() + TICK_EPSILON >= step {
            self.clock.tick();
            n += 1;
        }
        if n == self.config.time_out && self.clock.backlog() + TICK_EPSILON >= step {
            let dropped = self.clock.drop_backlog();
            log::debug!("animation catch-up capped at {n} ticks, dropped {dropped:.1}ms");
        }
        self.last_catch_up = n;

        let elapsed = self.clock.elapsed_ticks();
        let ticks = clamp(elapsed, 0.0, self.duration);
        let value = (self.easing)(ticks, self.from, self.to - self.from, self.duration);
        let progress = (self.easing)(ticks, 0.0, 1.0, self.duration);

        let flow = (self.on_progress)(Progress { value, progress, ticks });

        if flow.is_stop() {
            log::debug!("animation cancelled by callback at {ticks:.1}ms");
            self.finish();
            return Flow::Stop;
        }
        if elapsed / self.duration >= 1.0 {
            log::debug!("animation finished after {} ticks", self.clock.tick_count());
            self.finish();
            return Flow::Stop;
        }
        Flow::Continue
    }

    /// Ends the animation without another callback.
    pub fn cancel(&mut self) {
        if !self.done {
            log::debug!("animation cancelled");
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.done = true;
        self.clock.stop();
    }
}

impl<F, T: TimeSource> Animation<F, T> {
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Ticks run by the most recent frame.
    #[inline]
    pub fn last_catch_up(&self) -> u32 {
        self.last_catch_up
    }

    #[inline]
    pub fn clock(&self) -> &Clock<T> {
        &self.clock
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Resolves once the nominal duration has passed on the tokio timer.
    ///
    /// This is independent of frame delivery: it does not wait for the
    /// animation's own frames, only for the wall-clock length it was given.
    ///
    /// The timer is created on first poll, so the future can be built
    /// anywhere but must be awaited inside a tokio runtime.
    pub fn finished(&self) -> impl Future<Output = ()> + 'static {
        let wait = Duration::from_secs_f64(self.duration.max(0.0) / 1000.0);
        async move { tokio::time::sleep(wait).await }
    }
}

impl<F, T> FrameTask for Animation<F, T>
where
    F: FnMut(Progress) -> Flow,
    T: TimeSource,
{
    fn frame(&mut self) -> Flow {
        Animation::frame(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::math::easing;
    use crate::time::ManualTime;

    fn recorder() -> (Rc<RefCell<Vec<Progress>>>, impl FnMut(Progress) -> Flow) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |p| {
            sink.borrow_mut().push(p);
            Flow::Continue
        })
    }

    // ── end to end ──

    #[test]
    fn sixty_exact_frames_reach_the_target() {
        let t = ManualTime::new();
        let (seen, cb) = recorder();
        let mut anim =
            Animation::with_source(t.clone(), DriverConfig::default(), 100.0, 0.0, 1000.0, cb, easing::linear);

        let mut frames = 0;
        loop {
            t.advance(1000.0 / 60.0);
            frames += 1;
            if anim.frame().is_stop() {
                break;
            }
            assert!(frames < 60, "should not stop before the 60th frame");
        }

        assert_eq!(frames, 60);
        assert_eq!(anim.clock().tick_count(), 60);
        assert!(anim.is_finished());

        let last = *seen.borrow().last().unwrap();
        assert!((last.value - 100.0).abs() < 1e-9);
        assert!((last.progress - 1.0).abs() < 1e-9);
        assert_eq!(seen.borrow().len(), 60);
    }

    #[test]
    fn values_are_monotonic_under_linear_easing() {
        let t = ManualTime::new();
        let (seen, cb) = recorder();
        let mut anim =
            Animation::with_source(t.clone(), DriverConfig::default(), 10.0, 50.0, 500.0, cb, easing::linear);
        while !anim.frame().is_stop() {
            t.advance(16.0);
        }
        let seen = seen.borrow();
        assert!(seen.windows(2).all(|w| w[1].value <= w[0].value));
        assert_eq!(seen.last().unwrap().value, 10.0);
    }

    // ── catch-up ──

    #[test]
    fn stall_catch_up_is_bounded_by_time_out() {
        let t = ManualTime::new();
        let config = DriverConfig { time_out: 12, ..DriverConfig::default() };
        let (_seen, cb) = recorder();
        let mut anim = Animation::with_source(t.clone(), config, 1.0, 0.0, 10_000.0, cb, easing::linear);

        t.advance(500.0);
        anim.frame();
        assert_eq!(anim.last_catch_up(), 12);
        assert!(anim.clock().backlog() < anim.clock().tick_size());

        // the dropped backlog is not replayed on the next frame
        t.advance(1000.0 / 60.0);
        anim.frame();
        assert_eq!(anim.last_catch_up(), 1);
    }

    #[test]
    fn stall_within_time_out_catches_up_fully() {
        let t = ManualTime::new();
        let (_seen, cb) = recorder();
        let mut anim =
            Animation::with_source(t.clone(), DriverConfig::default(), 1.0, 0.0, 10_000.0, cb, easing::linear);

        t.advance(500.0);
        anim.frame();
        assert_eq!(anim.last_catch_up(), 30);

        t.advance(60_000.0);
        anim.frame();
        assert_eq!(anim.last_catch_up(), 120);
    }

    #[test]
    fn ticks_are_clamped_to_duration() {
        let t = ManualTime::new();
        let (seen, cb) = recorder();
        let mut anim = Animation::with_source(t.clone(), DriverConfig::default(), 1.0, 0.0, 100.0, cb, easing::linear);
        t.advance(400.0);
        assert_eq!(anim.frame(), Flow::Stop);
        let p = seen.borrow()[0];
        assert_eq!(p.ticks, 100.0);
        assert_eq!(p.value, 1.0);
    }

    // ── cancellation ──

    #[test]
    fn callback_stop_ends_animation() {
        let t = ManualTime::new();
        let mut calls = 0;
        let mut anim = Animation::with_source(
            t.clone(),
            DriverConfig::default(),
            1.0,
            0.0,
            1000.0,
            |p: Progress| {
                calls += 1;
                Flow::stop_if(p.progress >= 0.25)
            },
            easing::linear,
        );

        while !anim.frame().is_stop() {
            t.advance(1000.0 / 60.0);
        }
        assert!(anim.is_finished());
        assert!(anim.clock().tick_count() < 60);
        assert_eq!(anim.frame(), Flow::Stop);
        drop(anim);
        assert!(calls > 1);
    }

    #[test]
    fn cancel_skips_further_callbacks() {
        let t = ManualTime::new();
        let (seen, cb) = recorder();
        let mut anim = Animation::with_source(t.clone(), DriverConfig::default(), 1.0, 0.0, 1000.0, cb, easing::linear);
        anim.cancel();
        t.advance(100.0);
        assert_eq!(anim.frame(), Flow::Stop);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn auto_start_waits_for_first_frame() {
        let t = ManualTime::new();
        let config = DriverConfig { auto_start: true, ..DriverConfig::default() };
        let (seen, cb) = recorder();
        let mut anim = Animation::with_source(t.clone(), config, 1.0, 0.0, 1000.0, cb, easing::linear);

        t.advance(5_000.0);
        anim.frame();
        assert_eq!(anim.last_catch_up(), 0);
        assert_eq!(seen.borrow()[0].ticks, 0.0);
    }

    // ── sequencing ──

    #[tokio::test(start_paused = true)]
    async fn finished_resolves_after_nominal_duration() {
        let anim = run_animation(1.0, 0.0, 250.0, |_| Flow::Continue, easing::linear);
        let start = tokio::time::Instant::now();
        anim.finished().await;
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(250));
        assert!(waited < Duration::from_millis(260));
    }

    #[test]
    fn finished_future_builds_without_a_runtime() {
        let anim = run_animation(1.0, 0.0, 250.0, |_| Flow::Continue, easing::linear);
        let pending = anim.finished();
        drop(pending);
    }
}
