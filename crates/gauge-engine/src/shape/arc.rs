use crate::coords::{Angle, Point, Transform};
use crate::surface::DrawContext;

use super::Style;

/// Circular arc around `center`, from `begin` to `end` radians, clockwise.
///
/// Transforms move the center; `scale` also scales the radius and `rotate`
/// turns the angular span by the same amount, so an arc rotated about its own
/// center stays put and spins.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub begin: f64,
    pub end: f64,
    pub style: Style,
}

impl Arc {
    pub fn new(center: Point, radius: f64, begin: f64, end: f64, style: Style) -> Self {
        Self { center, radius, begin, end, style }
    }

    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end - self.begin
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext, _progress: f64) {
        self.draw_span(ctx, self.begin, self.end);
    }

    /// Draws the same circle and style over a different angular span.
    ///
    /// Composite meshes use this to reveal part of an arc without touching
    /// the stored geometry.
    pub fn draw_span(&self, ctx: &mut dyn DrawContext, begin: f64, end: f64) {
        let o = ctx.origin();
        ctx.begin_path();
        ctx.arc(self.center.x + o.x, self.center.y + o.y, self.radius, begin, end, false);
        self.style.paint_path(ctx, o);
    }
}

impl Transform for Arc {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.center.translate(dx, dy);
        self
    }

    fn scale(&mut self, s: f64) -> &mut Self {
        self.center.scale(s);
        self.radius *= s.abs();
        self
    }

    fn rotate(&mut self, theta: Angle) -> &mut Self {
        self.center.rotate(theta);
        let r = theta.radians();
        self.begin += r;
        self.end += r;
        self
    }
}
