use core::f64::consts::PI;

use crate::coords::Point;

/// Parametric step used by [`slerp_points`].
pub const SLERP_STEP: f64 = 0.1;

/// `(1 - t) * from + t * to`.
#[inline]
pub fn lerp(t: f64, from: f64, to: f64) -> f64 {
    (1.0 - t) * from + t * to
}

/// Clamps `x` into `[lo, hi]`.
///
/// Unlike `f64::clamp` this never panics on `lo > hi`; the upper bound wins.
#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Maps `x` from `[min, max]` onto `[0, 1]` (unclamped).
///
/// `min == max` is a caller precondition violation.
#[inline]
pub fn normalize(x: f64, min: f64, max: f64) -> f64 {
    (x - min) / (max - min)
}

/// Direction a sampled arc turns in screen space (+Y down).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Winding {
    /// Increasing angle; on screen this turns clockwise.
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Winding {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::Clockwise => 1.0,
            Winding::CounterClockwise => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// Samples a half circle from `p1` to `p2`.
///
/// The two points are treated as the ends of a diameter: the center is their
/// midpoint (the foot of the perpendicular bisector on the chord) and the arc
/// bulges to the side selected by `winding`. The parameter runs over `[0, 1]`
/// in steps of [`SLERP_STEP`], so the result always holds 11 points, the
/// first at `p1` and the last at `p2`.
///
/// `winding` picks the bulge side only; order is always `p1` to `p2`. For the
/// same arc walked backwards use [`slerp_points_signed`] with a negative sign.
///
/// Used to build capsule end caps.
pub fn slerp_points(p1: Point, p2: Point, winding: Winding) -> Vec<Point> {
    let center = p1.midpoint(p2);
    let radius = center.distance_to(p1);
    let start = center.angle_to(p1);
    let sign = winding.sign();

    let steps = (1.0 / SLERP_STEP).round() as usize;
    (0..=steps)
        .map(|i| {
            if i == 0 {
                return p1;
            }
            if i == steps {
                return p2;
            }
            let t = i as f64 * SLERP_STEP;
            center.polar(radius, start + sign * PI * t)
        })
        .collect()
}

/// Sign-driven form: `sign >= 0` samples the clockwise arc from `p1` to
/// `p2`; a negative sign returns that same arc from `p2` back to `p1`.
pub fn slerp_points_signed(p1: Point, p2: Point, sign: f64) -> Vec<Point> {
    if sign < 0.0 {
        // Walking p2 -> p1 against the winding traces the same half circle.
        slerp_points(p2, p1, Winding::Clockwise.reversed())
    } else {
        slerp_points(p1, p2, Winding::Clockwise)
    }
}
