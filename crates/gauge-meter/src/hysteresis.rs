use gauge_engine::math::lerp;

/// Exponential smoothing of a noisy reading.
///
/// Each update moves the held value a fixed fraction (`factor`) of the way
/// toward the new target: `held = lerp(factor, held, target)`. The first
/// update after construction or [`reset`](Hysteresis::reset) takes the target
/// as-is. `factor` is clamped into `[0, 1]`; 1 disables smoothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hysteresis {
    factor: f64,
    held: Option<f64>,
}

impl Hysteresis {
    pub fn new(factor: f64) -> Self {
        Self { factor: factor.clamp(0.0, 1.0), held: None }
    }

    pub fn update(&mut self, target: f64) -> f64 {
        let next = match self.held {
            Some(held) => lerp(self.factor, held, target),
            None => target,
        };
        self.held = Some(next);
        next
    }

    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.held
    }

    /// Forgets the held value; the next update starts fresh.
    pub fn reset(&mut self) {
        self.held = None;
    }

    /// Overwrites the held value.
    pub fn hold(&mut self, value: f64) {
        self.held = Some(value);
    }
}
