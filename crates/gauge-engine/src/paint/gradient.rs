use crate::coords::Point;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected in ascending `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - `spread` defines out-of-range behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Two-stop padded gradient, the common case for gauge arcs.
    pub fn two_stop(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            SpreadMode::Pad,
        )
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Same gradient with both axis points offset by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut g = self.clone();
        g.start = Point::new(g.start.x + dx, g.start.y + dy);
        g.end = Point::new(g.end.x + dx, g.end.y + dy);
        g
    }

    /// Color at `p`, projected onto the gradient axis.
    ///
    /// Invalid gradients fall back to the first stop (or transparent).
    pub fn color_at(&self, p: Point) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::transparent();
        };
        if !self.is_valid() {
            return first.color;
        }

        let axis = self.end - self.start;
        let len2 = axis.x * axis.x + axis.y * axis.y;
        let rel = p - self.start;
        let raw = ((rel.x * axis.x + rel.y * axis.y) / len2) as f32;

        let t = match self.spread {
            SpreadMode::Pad => raw.clamp(0.0, 1.0),
            SpreadMode::Repeat => raw.rem_euclid(1.0),
            SpreadMode::Reflect => {
                let m = raw.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        };

        let mut prev = *first;
        for stop in &self.stops {
            if t <= stop.t {
                let span = stop.t - prev.t;
                if span <= 0.0 {
                    return stop.color;
                }
                return prev.color.lerp(stop.color, (t - prev.t) / span);
            }
            prev = *stop;
        }
        prev.color
    }
}
