//! Measurement snapshots polled from a speed-test engine.

use gauge_engine::math::clamp;

use crate::state::{Phase, SpeedtestState};

/// One phase's reading.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PhaseReading {
    /// Completion of the phase, nominally in `[0, 1]`.
    pub progress: f64,
    /// Latest magnitude: milliseconds for ping, Mbit/s otherwise.
    pub value: Option<f64>,
}

impl PhaseReading {
    pub fn new(progress: f64, value: Option<f64>) -> Self {
        Self { progress, value }
    }

    /// Progress clamped into `[0, 1]`; non-finite reads as 0.
    #[inline]
    pub fn progress_clamped(&self) -> f64 {
        if self.progress.is_finite() { clamp(self.progress, 0.0, 1.0) } else { 0.0 }
    }
}

/// Snapshot of a running test.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Measurement {
    pub state: SpeedtestState,
    pub ping: PhaseReading,
    pub download: PhaseReading,
    pub upload: PhaseReading,
}

impl Measurement {
    #[inline]
    pub fn reading(&self, phase: Phase) -> &PhaseReading {
        match phase {
            Phase::Ping => &self.ping,
            Phase::Download => &self.download,
            Phase::Upload => &self.upload,
        }
    }

    #[inline]
    pub fn reading_mut(&mut self, phase: Phase) -> &mut PhaseReading {
        match phase {
            Phase::Ping => &mut self.ping,
            Phase::Download => &mut self.download,
            Phase::Upload => &mut self.upload,
        }
    }

    /// Whole-test progress: each phase is an equal third.
    pub fn overall_progress(&self) -> f64 {
        match self.state {
            SpeedtestState::Idle => 0.0,
            SpeedtestState::Finished => 1.0,
            SpeedtestState::Aborted => {
                Phase::ALL.iter().map(|p| self.reading(*p).progress_clamped()).sum::<f64>() / 3.0
            }
            s => match s.phase() {
                Some(p) => (p.index() as f64 + self.reading(p).progress_clamped()) / 3.0,
                None => 0.0,
            },
        }
    }
}
