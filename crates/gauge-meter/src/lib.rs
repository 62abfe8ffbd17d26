//! Speed-test gauge built on `gauge-engine`.
//!
//! A [`Gauge`] turns polled [`Measurement`] snapshots into a dial (track,
//! progress arc, needle) and a per-phase progress bar.

pub mod config;
pub mod feed;
pub mod gauge;
pub mod hysteresis;
pub mod scale;
pub mod state;

pub use config::MeterConfig;
pub use feed::{Measurement, PhaseReading};
pub use gauge::Gauge;
pub use hysteresis::Hysteresis;
pub use scale::speed_to_fraction;
pub use state::{Phase, PhaseTracker, SpeedtestState, TestState, Transition};
