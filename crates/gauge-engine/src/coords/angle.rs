use core::f64::consts::PI;
use core::ops::Neg;

/// Rotation amount with an explicit unit.
///
/// Transforms accept an `Angle` instead of a raw number plus a "radians?"
/// flag. Degrees are converted with `theta * π / 180`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Angle {
    Deg(f64),
    Rad(f64),
}

impl Angle {
    #[inline]
    pub fn radians(self) -> f64 {
        match self {
            Angle::Deg(d) => d * PI / 180.0,
            Angle::Rad(r) => r,
        }
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        match self {
            Angle::Deg(d) => d,
            Angle::Rad(r) => r * 180.0 / PI,
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::Deg(0.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        match self {
            Angle::Deg(d) => Angle::Deg(-d),
            Angle::Rad(r) => Angle::Rad(-r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_convert_to_radians() {
        assert!((Angle::Deg(180.0).radians() - PI).abs() < 1e-12);
        assert!((Angle::Deg(90.0).radians() - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn radians_pass_through() {
        assert_eq!(Angle::Rad(1.25).radians(), 1.25);
    }

    #[test]
    fn negation_keeps_unit() {
        assert_eq!(-Angle::Deg(30.0), Angle::Deg(-30.0));
        assert_eq!(-Angle::Rad(0.5), Angle::Rad(-0.5));
    }
}
