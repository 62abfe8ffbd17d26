use crate::coords::Point;
use crate::paint::{Color, Paint};

/// Shadow state applied to subsequent fills/strokes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f64,
}

impl Shadow {
    /// Black, zero blur: no visible shadow.
    pub const NONE: Shadow = Shadow { color: Color::BLACK, blur: 0.0 };

    #[inline]
    pub const fn new(color: Color, blur: f64) -> Self {
        Self { color, blur }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self.blur > 0.0 && self.color.a > 0.0
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::NONE
    }
}

/// Canvas-style immediate drawing API.
///
/// Angles are radians; positive sweep turns clockwise on screen (+Y down).
/// Style setters persist until changed, so callers that care about a property
/// must set it on every draw.
pub trait DrawContext {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool);
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill(&mut self);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_stroke_style(&mut self, paint: &Paint);
    fn set_fill_style(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f64);
    fn set_shadow_color(&mut self, color: Color);
    fn set_shadow_blur(&mut self, blur: f64);

    /// Offset added to shape coordinates at draw time.
    ///
    /// Raw contexts draw in absolute coordinates; [`super::Surface`] overrides this.
    fn origin(&self) -> Point {
        Point::zero()
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.set_shadow_color(shadow.color);
        self.set_shadow_blur(shadow.blur);
    }
}

impl<C: DrawContext + ?Sized> DrawContext for &mut C {
    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        (**self).arc(x, y, radius, start, end, anticlockwise);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }

    fn stroke(&mut self) {
        (**self).stroke();
    }

    fn fill(&mut self) {
        (**self).fill();
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).clear_rect(x, y, w, h);
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        (**self).set_stroke_style(paint);
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        (**self).set_fill_style(paint);
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }

    fn set_shadow_color(&mut self, color: Color) {
        (**self).set_shadow_color(color);
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        (**self).set_shadow_blur(blur);
    }

    fn origin(&self) -> Point {
        (**self).origin()
    }
}
