use crate::coords::Point;
use crate::paint::{Color, Paint};

use super::DrawContext;

/// A drawing context plus the origin shapes are positioned against.
///
/// The origin is applied by shapes when they emit path commands; it is never
/// baked into stored shape coordinates, so moving the surface moves everything
/// drawn through it on the next frame.
#[derive(Debug)]
pub struct Surface<C> {
    ctx: C,
    origin: Point,
}

impl<C: DrawContext> Surface<C> {
    #[inline]
    pub fn new(ctx: C, origin: Point) -> Self {
        Self { ctx, origin }
    }

    #[inline]
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    #[inline]
    pub fn context(&self) -> &C {
        &self.ctx
    }

    #[inline]
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    #[inline]
    pub fn into_inner(self) -> C {
        self.ctx
    }
}

impl<C: DrawContext> DrawContext for Surface<C> {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.ctx.arc(x, y, radius, start, end, anticlockwise);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.ctx.set_stroke_style(paint);
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.ctx.set_fill_style(paint);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.ctx.set_shadow_color(color);
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ctx.set_shadow_blur(blur);
    }

    fn origin(&self) -> Point {
        self.origin
    }
}
