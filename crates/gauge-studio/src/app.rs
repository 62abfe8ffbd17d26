use std::cell::{Cell, RefCell};
use std::rc::Rc;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use gauge_engine::anim::{Flow, OuterLoop};
use gauge_engine::coords::Point;
use gauge_engine::core::{App, AppControl, FrameCtx};
use gauge_engine::paint::Color;
use gauge_engine::render::PathRenderer;
use gauge_engine::scene::Recorder;
use gauge_engine::surface::Surface;
use gauge_meter::{Gauge, MeterConfig, SpeedtestState};

use crate::feed::{FeedProfile, SimulatedFeed};

type Callback = Box<dyn FnMut() -> Flow>;

/// State shared between the app and its outer-loop callbacks.
struct Shared {
    gauge: RefCell<Gauge>,
    feed: RefCell<SimulatedFeed>,
    recorder: RefCell<Recorder>,
    origin: Cell<Point>,
}

impl Shared {
    fn record(&self) {
        let mut rec = self.recorder.borrow_mut();
        rec.reset();
        let mut surface = Surface::new(&mut *rec, self.origin.get());
        self.gauge.borrow_mut().draw(&mut surface);
    }
}

pub struct GaugeApp {
    shared: Rc<Shared>,
    outer: OuterLoop<Callback, Callback>,
    renderer: PathRenderer,
    layout: (f64, f64),
    background: Color,
}

impl GaugeApp {
    pub fn new(config: MeterConfig, profile: FeedProfile) -> Self {
        let layout = config.size;
        let interval = config.update_interval_ms;
        let shared = Rc::new(Shared {
            gauge: RefCell::new(Gauge::new(config)),
            feed: RefCell::new(SimulatedFeed::new(profile)),
            recorder: RefCell::new(Recorder::new()),
            origin: Cell::new(Point::zero()),
        });
        Self {
            outer: outer_loop(&shared, interval),
            shared,
            renderer: PathRenderer::new(),
            layout,
            background: Color::from_rgb_hex(0x14171F),
        }
    }

    fn restart(&mut self) {
        let state = self.shared.gauge.borrow().state();
        if !state.is_terminal() {
            return;
        }
        log::info!("restarting speed test");
        self.shared.gauge.borrow_mut().reset();
        self.shared.feed.borrow_mut().restart();
        let interval = self.shared.gauge.borrow().config().update_interval_ms;
        self.outer = outer_loop(&self.shared, interval);
    }

    /// Zoom fitting the gauge layout into the window, and the origin that
    /// centers it in the zoomed viewport.
    fn fit(&self, window: (f32, f32)) -> (f32, Point) {
        let (w, h) = (window.0 as f64, window.1 as f64);
        let (lw, lh) = self.layout;
        let zoom = (w / lw).min(h / lh).max(0.05);
        let origin = Point::new((w / zoom - lw) / 2.0, (h / zoom - lh) / 2.0);
        (zoom as f32, origin)
    }
}

fn outer_loop(shared: &Rc<Shared>, interval_ms: f64) -> OuterLoop<Callback, Callback> {
    let logic = Rc::clone(shared);
    let mut last = SpeedtestState::Idle;
    let update: Callback = Box::new(move || {
        let m = logic.feed.borrow().sample();
        let mut gauge = logic.gauge.borrow_mut();
        let flow = gauge.update(&m);
        if gauge.state() != last {
            last = gauge.state();
            log::info!("speed test: {last:?}");
        }
        flow
    });

    let render = Rc::clone(shared);
    let draw: Callback = Box::new(move || {
        render.record();
        Flow::Continue
    });

    OuterLoop::new(interval_ms, update, draw)
}

fn window_title(state: SpeedtestState) -> String {
    match state {
        SpeedtestState::Idle => "Speed test".to_string(),
        SpeedtestState::Finished => "Speed test · done (space to rerun)".to_string(),
        s => format!("Speed test · {s:?}"),
    }
}

impl App for GaugeApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if event.state != ElementState::Pressed || event.repeat {
                return AppControl::Continue;
            }
            match &event.logical_key {
                Key::Named(NamedKey::Escape) => return AppControl::Exit,
                Key::Named(NamedKey::Space) => self.restart(),
                _ => {}
            }
        }
        AppControl::Continue
    }

    fn title(&self) -> Option<String> {
        Some(window_title(self.shared.gauge.borrow().state()))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (zoom, origin) = self.fit(ctx.window.logical_size());
        self.shared.origin.set(origin);

        // Once the test ends the loop is stopped; keep showing the final state.
        if self.outer.frame().is_stop() {
            self.shared.record();
        }

        let renderer = &mut self.renderer;
        let recorder = self.shared.recorder.borrow();
        ctx.render_scaled(zoom, self.background, |rctx, target| {
            renderer.render(rctx, target, recorder.list());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_follows_phase() {
        assert_eq!(window_title(SpeedtestState::Idle), "Speed test");
        assert_eq!(window_title(SpeedtestState::Download), "Speed test · Download");
        assert!(window_title(SpeedtestState::Finished).contains("space"));
    }
}
