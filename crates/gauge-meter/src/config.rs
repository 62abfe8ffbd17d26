use gauge_engine::coords::{Angle, Point};
use gauge_engine::paint::Color;

use crate::state::Phase;

/// Gauge layout, colors and timing.
///
/// Coordinates are logical pixels relative to the drawing surface's origin.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterConfig {
    /// Logical size the layout below was designed for.
    pub size: (f64, f64),

    // dial
    pub center: Point,
    pub radius: f64,
    pub line_width: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub track_color: Color,
    pub download_color: Color,
    pub upload_color: Color,
    /// Dial maximum in Mbit/s (log scale).
    pub max_mbps: f64,

    // needle
    pub needle_length: f64,
    pub needle_width: f64,
    pub needle_color: Color,
    pub hub_radius: f64,

    // phase bar
    pub bar_origin: Point,
    pub bar_width: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    /// One per phase by default.
    pub bar_segments: usize,
    pub bar_color: Color,

    // timing
    /// Logic update cadence, milliseconds.
    pub update_interval_ms: f64,
    /// Fraction of the gap to the new reading covered per update.
    pub smoothing: f64,
    /// Needle return-to-zero animation on phase change, milliseconds.
    pub needle_reset_ms: f64,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            size: (400.0, 440.0),

            center: Point::new(200.0, 200.0),
            radius: 150.0,
            line_width: 24.0,
            start_angle: Angle::Deg(135.0),
            end_angle: Angle::Deg(405.0),
            track_color: Color::from_rgb_hex(0x2A2F3A),
            download_color: Color::from_rgb_hex(0x6AFFF3),
            upload_color: Color::from_rgb_hex(0xBF71FF),
            max_mbps: 1000.0,

            needle_length: 120.0,
            needle_width: 10.0,
            needle_color: Color::from_rgb_hex(0xF5F5F5),
            hub_radius: 12.0,

            bar_origin: Point::new(80.0, 390.0),
            bar_width: 240.0,
            bar_height: 8.0,
            bar_gap: 8.0,
            bar_segments: Phase::ALL.len(),
            bar_color: Color::from_rgb_hex(0x6AFFF3),

            update_interval_ms: 100.0,
            smoothing: 0.3,
            needle_reset_ms: 400.0,
        }
    }
}

impl MeterConfig {
    /// Dial sweep in radians.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle.radians() - self.start_angle.radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_consistent() {
        let c = MeterConfig::default();
        assert!((c.sweep() - 270f64.to_radians()).abs() < 1e-12);
        assert!(c.needle_length < c.radius - c.line_width / 2.0);
        assert!(c.bar_origin.x + c.bar_width <= c.size.0);
        assert!(c.bar_origin.y + c.bar_height <= c.size.1);
    }
}
