//! Speed-test phase state machine.

use crate::feed::Measurement;

/// The three measured phases, in run order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    Ping,
    Download,
    Upload,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Ping, Phase::Download, Phase::Upload];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Phase::Ping => 0,
            Phase::Download => 1,
            Phase::Upload => 2,
        }
    }
}

/// Progress of a single phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TestState {
    #[default]
    NotStarted,
    Started,
    Finished,
}

/// Overall state of a speed test.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SpeedtestState {
    #[default]
    Idle,
    Ping,
    Download,
    Upload,
    Finished,
    Aborted,
}

impl SpeedtestState {
    /// The phase running in this state, if any.
    pub fn phase(self) -> Option<Phase> {
        match self {
            SpeedtestState::Ping => Some(Phase::Ping),
            SpeedtestState::Download => Some(Phase::Download),
            SpeedtestState::Upload => Some(Phase::Upload),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SpeedtestState::Finished | SpeedtestState::Aborted)
    }

    fn rank(self) -> u8 {
        match self {
            SpeedtestState::Idle => 0,
            SpeedtestState::Ping => 1,
            SpeedtestState::Download => 2,
            SpeedtestState::Upload => 3,
            SpeedtestState::Finished | SpeedtestState::Aborted => 4,
        }
    }
}

impl From<Phase> for SpeedtestState {
    fn from(p: Phase) -> Self {
        match p {
            Phase::Ping => SpeedtestState::Ping,
            Phase::Download => SpeedtestState::Download,
            Phase::Upload => SpeedtestState::Upload,
        }
    }
}

/// A state change accepted by [`PhaseTracker::observe`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Transition {
    pub from: SpeedtestState,
    pub to: SpeedtestState,
}

/// Tracks the overall state and each phase's [`TestState`] from polled
/// measurement snapshots.
///
/// Transitions only move forward (`Idle → Ping → Download → Upload →
/// Finished`, with `Aborted` reachable from any non-terminal state). Phases
/// skipped by a forward jump count as finished. A snapshot reporting an
/// earlier state is ignored.
#[derive(Debug, Clone, Default)]
pub struct PhaseTracker {
    state: SpeedtestState,
    phases: [TestState; 3],
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> SpeedtestState {
        self.state
    }

    #[inline]
    pub fn test_state(&self, phase: Phase) -> TestState {
        self.phases[phase.index()]
    }

    /// Applies the state reported by `m`. Returns the transition, if one
    /// happened.
    pub fn observe(&mut self, m: &Measurement) -> Option<Transition> {
        self.advance(m.state)
    }

    pub fn advance(&mut self, to: SpeedtestState) -> Option<Transition> {
        let from = self.state;
        if to == from {
            return None;
        }
        if from.is_terminal() {
            log::debug!("ignoring {to:?} after terminal {from:?}");
            return None;
        }
        if to != SpeedtestState::Aborted && to.rank() < from.rank() {
            log::debug!("ignoring backwards transition {from:?} -> {to:?}");
            return None;
        }

        match to {
            SpeedtestState::Aborted => {}
            SpeedtestState::Finished => self.phases = [TestState::Finished; 3],
            _ => {
                if let Some(phase) = to.phase() {
                    for p in Phase::ALL.into_iter().take_while(|p| *p != phase) {
                        self.phases[p.index()] = TestState::Finished;
                    }
                    self.phases[phase.index()] = TestState::Started;
                }
            }
        }

        self.state = to;
        log::debug!("speedtest {from:?} -> {to:?}");
        Some(Transition { from, to })
    }

    /// Back to `Idle` with every phase not started.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
