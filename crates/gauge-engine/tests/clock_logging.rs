//! Clock transitions reach the `log` facade at debug level.
//!
//! Runs in its own test binary so the capturing logger is the only one
//! installed.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use gauge_engine::time::{Clock, ManualTime};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

fn level_of(prefix: &str) -> Option<Level> {
    let records = CAPTURE.records.lock().unwrap();
    records.iter().find(|(_, msg)| msg.starts_with(prefix)).map(|(level, _)| *level)
}

#[test]
fn start_and_stop_log_at_debug() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let time = ManualTime::new();
    let mut clock = Clock::with_source(time.clone(), 10.0);
    clock.start();
    time.advance(25.0);
    clock.tick();
    clock.stop();

    assert_eq!(level_of("clock started"), Some(Level::Debug));
    assert_eq!(level_of("clock stopped"), Some(Level::Debug));
}
