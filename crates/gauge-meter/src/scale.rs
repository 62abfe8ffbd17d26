//! Mapping raw speeds onto the dial.

/// Logarithmic dial position of `mbps` on a scale topping out at `max_mbps`:
/// `ln(1 + mbps) / ln(1 + max_mbps)`, clamped into `[0, 1]`.
///
/// Non-finite or negative speeds read as 0. `max_mbps` must be positive.
pub fn speed_to_fraction(mbps: f64, max_mbps: f64) -> f64 {
    debug_assert!(max_mbps > 0.0, "dial maximum must be positive");
    if !mbps.is_finite() || mbps <= 0.0 {
        return 0.0;
    }
    (mbps.ln_1p() / max_mbps.ln_1p()).clamp(0.0, 1.0)
}
