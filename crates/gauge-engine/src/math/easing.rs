//! Named timing functions.
//!
//! Every function has the signature `(elapsed, from, distance, duration) -> value`
//! and satisfies `f(0) == from` and `f(duration) == from + distance` exactly.
//! The bounce variants overshoot the `[from, from + distance]` range mid-curve
//! but still land exactly on the end value.
//!
//! `duration == 0` is a caller precondition violation.

use super::bezier::de_casteljau;

/// Timing function signature.
pub type EasingFn = fn(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64;

/// Control values for [`bounce_out`]: overshoots past the end, settles back.
const BOUNCE_OUT: [f64; 4] = [0.0, 1.25, 1.1, 1.0];

/// Control values for [`bounce_in_out`]: dips below the start, overshoots the end.
const BOUNCE_IN_OUT: [f64; 4] = [0.0, -0.3, 1.3, 1.0];

pub fn linear(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let t = elapsed / duration;
    distance * t + from
}

pub fn ease_in_quad(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let t = elapsed / duration;
    distance * t * t + from
}

pub fn ease_out_quad(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let t = elapsed / duration;
    -distance * t * (t - 2.0) + from
}

pub fn ease_in_out_quad(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let mut t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return distance / 2.0 * t * t + from;
    }
    t -= 1.0;
    -distance / 2.0 * (t * (t - 2.0) - 1.0) + from
}

pub fn ease_in_cubic(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let t = elapsed / duration;
    distance * t * t * t + from
}

pub fn ease_out_cubic(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let t = elapsed / duration - 1.0;
    distance * (t * t * t + 1.0) + from
}

pub fn ease_in_out_cubic(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let mut t = elapsed / (duration / 2.0);
    if t < 1.0 {
        return distance / 2.0 * t * t * t + from;
    }
    t -= 2.0;
    distance / 2.0 * (t * t * t + 2.0) + from
}

/// Cubic Hermite: `distance * t² * (3 - 2t) + from`.
pub fn smoothstep(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    let t = elapsed / duration;
    distance * t * t * (3.0 - 2.0 * t) + from
}

pub fn bounce_out(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    distance * de_casteljau(&BOUNCE_OUT, elapsed / duration) + from
}

pub fn bounce_in_out(elapsed: f64, from: f64, distance: f64, duration: f64) -> f64 {
    distance * de_casteljau(&BOUNCE_IN_OUT, elapsed / duration) + from
}

/// Every timing function by name.
pub const ALL: [(&str, EasingFn); 10] = [
    ("linear", linear),
    ("ease_in_quad", ease_in_quad),
    ("ease_out_quad", ease_out_quad),
    ("ease_in_out_quad", ease_in_out_quad),
    ("ease_in_cubic", ease_in_cubic),
    ("ease_out_cubic", ease_out_cubic),
    ("ease_in_out_cubic", ease_in_out_cubic),
    ("smoothstep", smoothstep),
    ("bounce_out", bounce_out),
    ("bounce_in_out", bounce_in_out),
];

/// Looks up a timing function by its snake_case name.
pub fn by_name(name: &str) -> Option<EasingFn> {
    ALL.iter().find(|(n, _)| *n == name).map(|&(_, f)| f)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(f64, f64, f64); 5] = [
        (0.0, 1.0, 1.0),
        (0.0, 100.0, 1000.0),
        (10.0, 90.0, 250.0),
        (-5.5, 0.1, 3.0),
        (42.0, -17.25, 1000.0 / 60.0),
    ];

    fn is_bounce(name: &str) -> bool {
        name.starts_with("bounce")
    }

    // ── boundary conditions ───────────────────────────────────────────────

    #[test]
    fn start_boundary_is_exact() {
        for (name, f) in ALL {
            for (from, dist, dur) in CASES {
                assert_eq!(f(0.0, from, dist, dur), from, "{name} at 0");
            }
        }
    }

    #[test]
    fn end_boundary_is_exact() {
        for (name, f) in ALL {
            for (from, dist, dur) in CASES {
                assert_eq!(f(dur, from, dist, dur), from + dist, "{name} at duration");
            }
        }
    }

    #[test]
    fn non_bounce_stays_in_range() {
        for (name, f) in ALL.iter().filter(|(n, _)| !is_bounce(n)) {
            for i in 0..=100 {
                let v = f(i as f64, 0.0, 1.0, 100.0);
                assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{name} left range: {v}");
            }
        }
    }

    #[test]
    fn bounce_out_overshoots() {
        let peak = (0..=100)
            .map(|i| bounce_out(i as f64, 0.0, 1.0, 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn bounce_in_out_dips_below_start() {
        let low = (0..=100)
            .map(|i| bounce_in_out(i as f64, 0.0, 1.0, 100.0))
            .fold(f64::MAX, f64::min);
        assert!(low < 0.0);
    }

    // ── shape of the curves ───────────────────────────────────────────────

    #[test]
    fn in_out_variants_are_symmetric_at_midpoint() {
        assert!((ease_in_out_quad(50.0, 0.0, 1.0, 100.0) - 0.5).abs() < 1e-12);
        assert!((ease_in_out_cubic(50.0, 0.0, 1.0, 100.0) - 0.5).abs() < 1e-12);
        assert!((smoothstep(50.0, 0.0, 1.0, 100.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_in_lags_ease_out_leads() {
        let lin = linear(25.0, 0.0, 1.0, 100.0);
        assert!(ease_in_quad(25.0, 0.0, 1.0, 100.0) < lin);
        assert!(ease_out_quad(25.0, 0.0, 1.0, 100.0) > lin);
        assert!(ease_in_cubic(25.0, 0.0, 1.0, 100.0) < ease_in_quad(25.0, 0.0, 1.0, 100.0));
        assert!(ease_out_cubic(25.0, 0.0, 1.0, 100.0) > ease_out_quad(25.0, 0.0, 1.0, 100.0));
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn by_name_finds_every_entry() {
        for (name, f) in ALL {
            let g = by_name(name).unwrap();
            assert_eq!(g(3.0, 1.0, 2.0, 7.0), f(3.0, 1.0, 2.0, 7.0));
        }
        assert!(by_name("elastic").is_none());
    }
}
