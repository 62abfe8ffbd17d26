//! Scalar and point interpolation.
//!
//! - `interp`: lerp / clamp / normalize and sampled circular arcs between points
//! - `bezier`: memoized De Casteljau evaluation
//! - `easing`: named timing functions `(elapsed, from, distance, duration) -> value`

pub mod bezier;
pub mod easing;
mod interp;

pub use easing::EasingFn;
pub use interp::{clamp, lerp, normalize, slerp_points, slerp_points_signed, Winding, SLERP_STEP};
