//! Offline stand-in for a speed-test engine.

use gauge_engine::time::{MonotonicTime, TimeSource};
use gauge_meter::{Measurement, Phase, PhaseReading, SpeedtestState};

/// Phase lengths and target speeds of a simulated run.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedProfile {
    pub ping_ms: f64,
    pub download_ms: f64,
    pub upload_ms: f64,
    pub latency_ms: f64,
    pub download_mbps: f64,
    pub upload_mbps: f64,
}

impl Default for FeedProfile {
    fn default() -> Self {
        Self {
            ping_ms: 1500.0,
            download_ms: 6000.0,
            upload_ms: 6000.0,
            latency_ms: 18.0,
            download_mbps: 420.0,
            upload_mbps: 95.0,
        }
    }
}

/// Produces ping → download → upload snapshots from elapsed time.
///
/// Speeds ramp up towards the profile's target and wobble around it, which is
/// enough to exercise smoothing and phase changes.
pub struct SimulatedFeed<T: TimeSource = MonotonicTime> {
    time: T,
    profile: FeedProfile,
    started: f64,
}

impl SimulatedFeed {
    pub fn new(profile: FeedProfile) -> Self {
        Self::with_source(MonotonicTime::new(), profile)
    }
}

impl<T: TimeSource> SimulatedFeed<T> {
    pub fn with_source(time: T, profile: FeedProfile) -> Self {
        let started = time.now_ms();
        Self { time, profile, started }
    }

    /// Starts the run over from `Idle` at the current time.
    pub fn restart(&mut self) {
        self.started = self.time.now_ms();
    }

    pub fn sample(&self) -> Measurement {
        let p = &self.profile;
        let t = self.time.now_ms() - self.started;

        let mut m = Measurement::default();
        let phases = [(Phase::Ping, p.ping_ms), (Phase::Download, p.download_ms), (Phase::Upload, p.upload_ms)];

        let mut offset = 0.0;
        for (phase, len) in phases {
            let local = t - offset;
            if local < len {
                m.state = phase.into();
                *m.reading_mut(phase) = PhaseReading::new(local / len, Some(self.value(phase, local)));
                return m;
            }
            *m.reading_mut(phase) = PhaseReading::new(1.0, Some(self.value(phase, len)));
            offset += len;
        }

        m.state = SpeedtestState::Finished;
        m
    }

    fn value(&self, phase: Phase, local_ms: f64) -> f64 {
        let p = &self.profile;
        let wobble = 1.0 + 0.06 * (local_ms / 170.0).sin() + 0.03 * (local_ms / 53.0).sin();
        match phase {
            Phase::Ping => p.latency_ms * wobble,
            Phase::Download => p.download_mbps * ramp(local_ms) * wobble,
            Phase::Upload => p.upload_mbps * ramp(local_ms) * wobble,
        }
    }
}

fn ramp(local_ms: f64) -> f64 {
    1.0 - (-local_ms / 800.0).exp()
}
