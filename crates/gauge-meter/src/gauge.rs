use core::f64::consts::TAU;
use std::cell::Cell;
use std::rc::Rc;

use gauge_engine::anim::{Animation, DriverConfig, Flow, FrameScheduler, Progress, TaskId};
use gauge_engine::composite::{progress_bar_intervals, rounded_arc, set_rounded_arc_color};
use gauge_engine::coords::{Angle, Transform};
use gauge_engine::math::easing;
use gauge_engine::paint::Color;
use gauge_engine::shape::{Arc, Mesh, Polygon, Style};
use gauge_engine::surface::DrawContext;
use gauge_engine::time::{MonotonicTime, TimeSource};

use crate::config::MeterConfig;
use crate::feed::Measurement;
use crate::hysteresis::Hysteresis;
use crate::scale::speed_to_fraction;
use crate::state::{Phase, PhaseTracker, SpeedtestState};

/// One gauge session: dial and phase bar geometry plus the state that moves
/// them.
///
/// [`update`](Gauge::update) is the logic tick, fed polled measurements at
/// the configured interval. [`draw`](Gauge::draw) runs once per display
/// frame and also advances the gauge's own animations.
pub struct Gauge<T: TimeSource + Clone + 'static = MonotonicTime> {
    config: MeterConfig,
    time: T,

    track: Mesh,
    progress: Mesh,
    needle: Polygon,
    hub: Arc,
    bar_track: Mesh,
    bar: Mesh,

    tracker: PhaseTracker,
    smoothing: Hysteresis,
    display: Rc<Cell<f64>>,
    bar_progress: f64,

    scheduler: FrameScheduler,
    needle_reset: Option<TaskId>,
}

impl Gauge {
    pub fn new(config: MeterConfig) -> Self {
        Self::with_source(MonotonicTime::new(), config)
    }
}

impl<T: TimeSource + Clone + 'static> Gauge<T> {
    pub fn with_source(time: T, config: MeterConfig) -> Self {
        let c = &config;
        let track = rounded_arc(c.center, c.radius, c.start_angle, c.end_angle, c.track_color, c.line_width);
        let progress = rounded_arc(c.center, c.radius, c.start_angle, c.end_angle, c.download_color, c.line_width);
        let needle = needle(c);
        let hub = Arc::new(c.center, c.hub_radius, 0.0, TAU, Style::filled(c.needle_color));

        let segments = c.bar_segments;
        let bar_track =
            progress_bar_intervals(c.bar_origin, c.bar_width, c.bar_height, segments, c.bar_gap, c.track_color);
        let bar = progress_bar_intervals(c.bar_origin, c.bar_width, c.bar_height, segments, c.bar_gap, c.bar_color);

        let smoothing = Hysteresis::new(c.smoothing);

        Self {
            track,
            progress,
            needle,
            hub,
            bar_track,
            bar,
            tracker: PhaseTracker::new(),
            smoothing,
            display: Rc::new(Cell::new(0.0)),
            bar_progress: 0.0,
            scheduler: FrameScheduler::new(),
            needle_reset: None,
            time,
            config,
        }
    }

    /// Applies a measurement snapshot.
    ///
    /// Returns [`Flow::Stop`] once the test has finished or aborted.
    pub fn update(&mut self, m: &Measurement) -> Flow {
        if let Some(tr) = self.tracker.observe(m) {
            self.on_transition(tr.to);
        }

        // snapshots the tracker rejected leave the bar where it is
        let state = self.tracker.state();
        if m.state == state {
            self.bar_progress = m.overall_progress();
        }

        if !self.is_resetting() {
            if let Some(phase @ (Phase::Download | Phase::Upload)) = state.phase() {
                if let Some(mbps) = m.reading(phase).value {
                    let target = speed_to_fraction(mbps, self.config.max_mbps);
                    self.display.set(self.smoothing.update(target));
                }
            }
        }

        Flow::stop_if(state.is_terminal())
    }

    fn on_transition(&mut self, to: SpeedtestState) {
        let color = match to {
            SpeedtestState::Download => self.config.download_color,
            SpeedtestState::Upload => self.config.upload_color,
            _ => return,
        };
        set_rounded_arc_color(&mut self.progress, color);
        self.start_needle_reset();
    }

    /// Eases the needle back to zero; readings are held off until it lands.
    fn start_needle_reset(&mut self) {
        if let Some(id) = self.needle_reset.take() {
            self.scheduler.cancel(id);
        }
        self.smoothing.hold(0.0);

        let from = self.display.get();
        if from <= 0.0 {
            self.display.set(0.0);
            return;
        }

        let display = Rc::clone(&self.display);
        let anim = Animation::with_source(
            self.time.clone(),
            DriverConfig::default(),
            0.0,
            from,
            self.config.needle_reset_ms,
            move |p: Progress| {
                display.set(p.value);
                Flow::Continue
            },
            easing::ease_out_quad,
        );
        self.needle_reset = Some(self.scheduler.schedule(anim));
    }

    /// Draws the gauge. Advances running gauge animations by one frame first.
    pub fn draw(&mut self, ctx: &mut dyn DrawContext) {
        self.scheduler.run_frame();
        if let Some(id) = self.needle_reset {
            if !self.scheduler.is_scheduled(id) {
                self.needle_reset = None;
            }
        }

        let fraction = self.display.get();

        // two passes: full track, then the progress arc over it
        self.track.draw(ctx, 1.0);
        self.progress.draw(ctx, fraction);

        self.needle_at(fraction).draw(ctx, 1.0);
        self.hub.draw(ctx, 1.0);

        self.bar_track.draw(ctx, 1.0);
        self.bar.draw(ctx, self.bar_progress);
    }

    /// The needle polygon as drawn for dial fraction `fraction`.
    pub fn needle_at(&self, fraction: f64) -> Polygon {
        let c = self.config.center;
        let mut needle = self.needle.clone();
        needle.rotate_about_point(c.x, c.y, Angle::Rad(fraction * self.config.sweep()));
        needle
    }

    /// Back to idle for a fresh run.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.needle_reset = None;
        self.tracker.reset();
        self.smoothing.reset();
        self.display.set(0.0);
        self.bar_progress = 0.0;
        set_rounded_arc_color(&mut self.progress, self.config.download_color);
    }

    #[inline]
    pub fn state(&self) -> SpeedtestState {
        self.tracker.state()
    }

    #[inline]
    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    /// Dial position in `[0, 1]` currently shown.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.display.get()
    }

    #[inline]
    pub fn bar_progress(&self) -> f64 {
        self.bar_progress
    }

    #[inline]
    pub fn is_resetting(&self) -> bool {
        self.needle_reset.is_some_and(|id| self.scheduler.is_scheduled(id))
    }

    #[inline]
    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// Color the progress arc currently draws with.
    pub fn progress_color(&self) -> Option<Color> {
        self.progress.shape_at(1).map(|s| s.style().stroke.base_color())
    }
}

/// Triangle at the dial start angle, tip first.
fn needle(c: &MeterConfig) -> Polygon {
    let a = c.start_angle.radians();
    let half = c.needle_width / 2.0;
    let tip = c.center.polar(c.needle_length, a);
    let left = c.center.polar(half, a - TAU / 4.0);
    let right = c.center.polar(half, a + TAU / 4.0);
    Polygon::new(vec![tip, left, right], Style::filled(c.needle_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_engine::coords::Point;
    use gauge_engine::scene::{DrawCmd, Recorder};
    use gauge_engine::time::ManualTime;

    use crate::feed::PhaseReading;

    fn gauge() -> (ManualTime, Gauge<ManualTime>) {
        let time = ManualTime::new();
        (time.clone(), Gauge::with_source(time, MeterConfig::default()))
    }

    fn snapshot(state: SpeedtestState, phase: Phase, progress: f64, mbps: f64) -> Measurement {
        let mut m = Measurement { state, ..Default::default() };
        *m.reading_mut(phase) = PhaseReading::new(progress, Some(mbps));
        m
    }

    fn near(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    // ── update ──

    #[test]
    fn ping_leaves_needle_at_rest() {
        let (_, mut g) = gauge();
        let flow = g.update(&snapshot(SpeedtestState::Ping, Phase::Ping, 0.5, 20.0));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(g.state(), SpeedtestState::Ping);
        assert_eq!(g.fraction(), 0.0);
        assert!((g.bar_progress() - 0.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn download_reading_moves_needle_on_log_scale() {
        let (_, mut g) = gauge();
        g.update(&snapshot(SpeedtestState::Download, Phase::Download, 0.1, 1000.0));
        // entering from idle: nothing to reset, first reading is smoothed from 0
        assert!(!g.is_resetting());
        assert!((g.fraction() - 0.3).abs() < 1e-12);

        for _ in 0..60 {
            g.update(&snapshot(SpeedtestState::Download, Phase::Download, 0.5, 1000.0));
        }
        assert!((g.fraction() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn terminal_state_stops() {
        let (_, mut g) = gauge();
        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.9, 10.0));
        let flow = g.update(&Measurement { state: SpeedtestState::Finished, ..Default::default() });
        assert_eq!(flow, Flow::Stop);
        assert_eq!(g.bar_progress(), 1.0);
    }

    #[test]
    fn backwards_snapshot_is_ignored() {
        let (_, mut g) = gauge();
        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.2, 10.0));
        g.update(&snapshot(SpeedtestState::Download, Phase::Download, 0.2, 10.0));
        assert_eq!(g.state(), SpeedtestState::Upload);
    }

    #[test]
    fn stale_snapshots_do_not_move_the_bar() {
        let (_, mut g) = gauge();
        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.5, 10.0));
        let before = g.bar_progress();
        assert!((before - 2.5 / 3.0).abs() < 1e-12);

        g.update(&snapshot(SpeedtestState::Ping, Phase::Ping, 0.1, 20.0));
        assert_eq!(g.state(), SpeedtestState::Upload);
        assert_eq!(g.bar_progress(), before);

        g.update(&Measurement { state: SpeedtestState::Finished, ..Default::default() });
        assert_eq!(g.bar_progress(), 1.0);

        let flow = g.update(&snapshot(SpeedtestState::Download, Phase::Download, 0.0, 10.0));
        assert_eq!(flow, Flow::Stop);
        assert_eq!(g.state(), SpeedtestState::Finished);
        assert_eq!(g.bar_progress(), 1.0);
    }

    // ── phase change ──

    #[test]
    fn upload_recolors_and_resets_needle() {
        let (time, mut g) = gauge();
        let cfg = g.config().clone();
        for _ in 0..40 {
            g.update(&snapshot(SpeedtestState::Download, Phase::Download, 0.5, 500.0));
        }
        let held = g.fraction();
        assert!(held > 0.5);
        assert_eq!(g.progress_color(), Some(cfg.download_color));

        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.0, 50.0));
        assert_eq!(g.progress_color(), Some(cfg.upload_color));
        assert!(g.is_resetting());

        // readings are held off while the needle returns
        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.1, 50.0));
        assert_eq!(g.fraction(), held);

        let mut rec = Recorder::new();
        time.advance(cfg.needle_reset_ms / 2.0);
        g.draw(&mut rec);
        let mid = g.fraction();
        assert!(mid > 0.0 && mid < held);

        time.advance(cfg.needle_reset_ms);
        g.draw(&mut rec);
        assert!(g.fraction().abs() < 1e-12);
        assert!(!g.is_resetting());

        // next reading eases up from zero
        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.2, 50.0));
        let expected = cfg.smoothing * speed_to_fraction(50.0, cfg.max_mbps);
        assert!((g.fraction() - expected).abs() < 1e-12);
    }

    // ── draw ──

    #[test]
    fn idle_draw_order() {
        let (_, mut g) = gauge();
        let mut rec = Recorder::new();
        g.draw(&mut rec);
        let items = rec.list().items();
        // track (3), progress end cap (1), needle, hub, three full bar track segments (3 each)
        assert_eq!(items.len(), 3 + 1 + 1 + 1 + 9);
        assert!(items[1].is_stroke());
        assert!(items[3..6].iter().all(DrawCmd::is_fill));
    }

    #[test]
    fn needle_rotates_with_fraction() {
        let (_, g) = gauge();
        let c = g.config().clone();

        let rest = g.needle_at(0.0);
        assert!(near(rest.points()[0], c.center.polar(c.needle_length, c.start_angle.radians())));

        let full = g.needle_at(1.0);
        assert!(near(full.points()[0], c.center.polar(c.needle_length, c.end_angle.radians())));
    }

    #[test]
    fn reset_returns_to_idle() {
        let (_, mut g) = gauge();
        g.update(&snapshot(SpeedtestState::Download, Phase::Download, 0.5, 200.0));
        g.update(&snapshot(SpeedtestState::Upload, Phase::Upload, 0.5, 200.0));
        g.reset();
        assert_eq!(g.state(), SpeedtestState::Idle);
        assert_eq!(g.fraction(), 0.0);
        assert_eq!(g.bar_progress(), 0.0);
        assert!(!g.is_resetting());
        assert_eq!(g.progress_color(), Some(g.config().download_color));
    }
}
