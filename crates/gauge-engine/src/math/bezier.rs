//! Bezier evaluation by De Casteljau's algorithm.
//!
//! The recursive formulation revisits the same `(depth, index)` node from two
//! parents, which is exponential without caching. Each call keeps its own memo
//! keyed by that pair, so repeated evaluations never share state.

use std::collections::HashMap;

use crate::coords::Point;

/// Evaluates the scalar Bezier curve with the given control values at `t`.
///
/// `controls` must not be empty.
pub fn de_casteljau(controls: &[f64], t: f64) -> f64 {
    debug_assert!(!controls.is_empty(), "de_casteljau needs at least one control value");
    let mut memo = HashMap::new();
    node(controls, t, controls.len() - 1, 0, &mut memo)
}

/// Evaluates a 2D Bezier curve at `t`, one De Casteljau pass per axis.
pub fn de_casteljau_point(controls: &[Point], t: f64) -> Point {
    let xs: Vec<f64> = controls.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = controls.iter().map(|p| p.y).collect();
    Point::new(de_casteljau(&xs, t), de_casteljau(&ys, t))
}

fn node(
    controls: &[f64],
    t: f64,
    depth: usize,
    index: usize,
    memo: &mut HashMap<(usize, usize), f64>,
) -> f64 {
    if depth == 0 {
        return controls[index];
    }
    if let Some(&v) = memo.get(&(depth, index)) {
        return v;
    }
    let a = node(controls, t, depth - 1, index, memo);
    let b = node(controls, t, depth - 1, index + 1, memo);
    let v = (1.0 - t) * a + t * b;
    memo.insert((depth, index), v);
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bernstein_cubic(c: [f64; 4], t: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * mt * c[0] + 3.0 * mt * mt * t * c[1] + 3.0 * mt * t * t * c[2] + t * t * t * c[3]
    }

    #[test]
    fn matches_closed_form_cubic() {
        let c = [0.0, 1.3, -0.4, 1.0];
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert!((de_casteljau(&c, t) - bernstein_cubic(c, t)).abs() < 1e-12);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let c = [2.0, 9.0, -7.0, 5.0];
        assert_eq!(de_casteljau(&c, 0.0), 2.0);
        assert_eq!(de_casteljau(&c, 1.0), 5.0);
    }

    #[test]
    fn single_control_is_constant() {
        assert_eq!(de_casteljau(&[4.5], 0.3), 4.5);
    }

    #[test]
    fn high_degree_stays_fast_and_bounded() {
        // Degree 40 would be 2^40 calls without the memo.
        let c: Vec<f64> = (0..41).map(|i| (i % 2) as f64).collect();
        let v = de_casteljau(&c, 0.5);
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn point_curve_is_linear_for_two_controls() {
        let p = de_casteljau_point(&[Point::new(0.0, 0.0), Point::new(10.0, 20.0)], 0.25);
        assert!((p.x - 2.5).abs() < 1e-12 && (p.y - 5.0).abs() < 1e-12);
    }
}
