use core::ops::{Add, Div, Mul, Sub};

use super::Angle;

/// 2D point in logical pixels.
///
/// Points are mutated in place by [`Transform`] methods; each method returns
/// `&mut Self` so calls chain. Chain order is significant: `rotate` turns about
/// the coordinate origin as the point stands *now*, not where it started.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Angle of the vector from `self` to `other`, radians.
    #[inline]
    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Point on a circle of `radius` around `self` at `angle` radians.
    #[inline]
    pub fn polar(self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    /// Returns a transformed copy, leaving `self` untouched.
    #[inline]
    pub fn with(mut self, f: impl FnOnce(&mut Point)) -> Point {
        f(&mut self);
        self
    }
}

/// Shared transform vocabulary for points, shapes and meshes.
///
/// `rotate_about_point` is provided in terms of the other three so every
/// implementor gets the same translate → rotate → translate-back order.
pub trait Transform {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self;

    fn scale(&mut self, s: f64) -> &mut Self;

    /// Rotates about the coordinate origin.
    fn rotate(&mut self, theta: Angle) -> &mut Self;

    fn rotate_about_point(&mut self, ox: f64, oy: f64, theta: Angle) -> &mut Self {
        self.translate(-ox, -oy).rotate(theta).translate(ox, oy)
    }
}

impl Transform for Point {
    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.x += dx;
        self.y += dy;
        self
    }

    #[inline]
    fn scale(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    #[inline]
    fn rotate(&mut self, theta: Angle) -> &mut Self {
        let (sin, cos) = theta.radians().sin_cos();
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.x = x;
        self.y = y;
        self
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}
