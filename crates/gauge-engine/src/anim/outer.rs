use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::time::{MonotonicTime, TimeSource};

use super::Flow;

/// Shared termination flag of an [`OuterLoop`].
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Two cadences sharing one stop flag: `update` on a fixed interval (logic
/// polling) and `draw` every frame.
///
/// Either side returning [`Flow::Stop`] stops both. They are otherwise
/// independent; a slow update never delays a draw.
pub struct OuterLoop<U, D, T: TimeSource = MonotonicTime> {
    update: U,
    draw: D,
    interval: f64,
    next_update: f64,
    time: T,
    stop: StopHandle,
}

impl<U, D> OuterLoop<U, D>
where
    U: FnMut() -> Flow,
    D: FnMut() -> Flow,
{
    pub fn new(interval_ms: f64, update: U, draw: D) -> Self {
        Self::with_source(MonotonicTime::new(), interval_ms, update, draw)
    }
}

impl<U, D, T> OuterLoop<U, D, T>
where
    U: FnMut() -> Flow,
    D: FnMut() -> Flow,
    T: TimeSource,
{
    pub fn with_source(time: T, interval_ms: f64, update: U, draw: D) -> Self {
        debug_assert!(interval_ms > 0.0, "update interval must be positive");
        let next_update = time.now_ms() + interval_ms;
        Self {
            update,
            draw,
            interval: interval_ms,
            next_update,
            time,
            stop: StopHandle::default(),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Frame-driven form: call once per rendered frame.
    ///
    /// Runs `update` if its interval has elapsed (missed intervals coalesce
    /// into one call), then `draw`.
    pub fn frame(&mut self) -> Flow {
        if self.stop.is_stopped() {
            return Flow::Stop;
        }

        let now = self.time.now_ms();
        if now >= self.next_update {
            self.next_update += self.interval;
            if self.next_update <= now {
                self.next_update = now + self.interval;
            }
            if (self.update)().is_stop() {
                return self.halt("update");
            }
        }

        if (self.draw)().is_stop() {
            return self.halt("draw");
        }
        Flow::Continue
    }

    /// Timer-driven form: an update interval and a frame interval run
    /// concurrently on the tokio timer until either side stops.
    pub async fn run(mut self, frame_interval: Duration) {
        let mut updates = tokio::time::interval(Duration::from_secs_f64(self.interval / 1000.0));
        updates.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut frames = tokio::time::interval(frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The first interval tick completes immediately; updates wait a full period.
        updates.tick().await;

        while !self.stop.is_stopped() {
            tokio::select! {
                _ = updates.tick() => {
                    if (self.update)().is_stop() {
                        self.halt("update");
                    }
                }
                _ = frames.tick() => {
                    if (self.draw)().is_stop() {
                        self.halt("draw");
                    }
                }
            }
        }
    }

    fn halt(&mut self, side: &str) -> Flow {
        log::debug!("outer loop stopped by {side}");
        self.stop.stop();
        Flow::Stop
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::time::ManualTime;

    fn counting(count: &Rc<Cell<u32>>, stop_at: u32) -> impl FnMut() -> Flow {
        let count = count.clone();
        move || {
            count.set(count.get() + 1);
            Flow::stop_if(count.get() == stop_at)
        }
    }

    // ── frame driven ──

    #[test]
    fn update_runs_on_interval_draw_every_frame() {
        let t = ManualTime::new();
        let updates = Rc::new(Cell::new(0));
        let draws = Rc::new(Cell::new(0));
        let mut lp = OuterLoop::with_source(t.clone(), 100.0, counting(&updates, 0), counting(&draws, 0));

        for _ in 0..30 {
            t.advance(10.0);
            assert_eq!(lp.frame(), Flow::Continue);
        }
        assert_eq!(updates.get(), 3);
        assert_eq!(draws.get(), 30);
    }

    #[test]
    fn missed_intervals_coalesce() {
        let t = ManualTime::new();
        let updates = Rc::new(Cell::new(0));
        let mut lp = OuterLoop::with_source(t.clone(), 100.0, counting(&updates, 0), || Flow::Continue);
        t.advance(1_000.0);
        lp.frame();
        lp.frame();
        assert_eq!(updates.get(), 1);
        t.advance(100.0);
        lp.frame();
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn update_stop_halts_draw_too() {
        let t = ManualTime::new();
        let updates = Rc::new(Cell::new(0));
        let draws = Rc::new(Cell::new(0));
        let mut lp = OuterLoop::with_source(t.clone(), 50.0, counting(&updates, 2), counting(&draws, 0));

        let mut frames = 0;
        while lp.frame() == Flow::Continue {
            t.advance(10.0);
            frames += 1;
        }
        let drawn = draws.get();
        assert_eq!(updates.get(), 2);
        assert_eq!(drawn, frames);

        t.advance(100.0);
        assert_eq!(lp.frame(), Flow::Stop);
        assert_eq!(draws.get(), drawn);
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn stop_handle_stops_from_outside() {
        let draws = Rc::new(Cell::new(0));
        let mut lp = OuterLoop::with_source(ManualTime::new(), 50.0, || Flow::Continue, counting(&draws, 0));
        let handle = lp.stop_handle();
        lp.frame();
        handle.stop();
        assert_eq!(lp.frame(), Flow::Stop);
        assert!(lp.is_stopped());
        assert_eq!(draws.get(), 1);
    }

    // ── timer driven ──

    #[tokio::test(start_paused = true)]
    async fn run_stops_when_draw_stops() {
        let updates = Rc::new(Cell::new(0));
        let draws = Rc::new(Cell::new(0));
        let lp = OuterLoop::new(100.0, counting(&updates, 0), counting(&draws, 20));

        let start = tokio::time::Instant::now();
        lp.run(Duration::from_millis(16)).await;

        assert_eq!(draws.get(), 20);
        // 19 frame periods after the immediate first frame
        assert!(start.elapsed() >= Duration::from_millis(19 * 16));
        assert!((2..=3).contains(&updates.get()));
    }
}
