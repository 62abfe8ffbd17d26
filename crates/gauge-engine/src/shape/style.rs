use crate::coords::Point;
use crate::paint::{Color, Paint};
use crate::surface::{DrawContext, Shadow};

/// Per-shape paint settings.
///
/// A shape strokes with `stroke`/`line_width` unless `fill` is set, in which
/// case it fills instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: Paint,
    pub line_width: f64,
    pub fill: Option<Paint>,
    pub shadow: Option<Shadow>,
}

impl Style {
    pub fn stroked(paint: impl Into<Paint>, line_width: f64) -> Self {
        Self {
            stroke: paint.into(),
            line_width,
            fill: None,
            shadow: None,
        }
    }

    pub fn filled(paint: impl Into<Paint>) -> Self {
        let paint = paint.into();
        Self {
            stroke: paint.clone(),
            line_width: 1.0,
            fill: Some(paint),
            shadow: None,
        }
    }

    pub fn with_shadow(mut self, color: Color, blur: f64) -> Self {
        self.shadow = Some(Shadow::new(color, blur));
        self
    }

    /// Fills or strokes the path currently built on `ctx`.
    ///
    /// Shadow state is written on every call (falling back to [`Shadow::NONE`]),
    /// so a shadow from an earlier draw never carries over.
    pub(crate) fn paint_path(&self, ctx: &mut dyn DrawContext, origin: Point) {
        ctx.set_shadow(self.shadow.unwrap_or(Shadow::NONE));
        match &self.fill {
            Some(fill) => {
                ctx.set_fill_style(&at_origin(fill, origin));
                ctx.fill();
            }
            None => {
                ctx.set_line_width(self.line_width);
                ctx.set_stroke_style(&at_origin(&self.stroke, origin));
                ctx.stroke();
            }
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::stroked(Color::BLACK, 1.0)
    }
}

/// Gradients live in shape space, so they move with the surface origin.
fn at_origin(paint: &Paint, origin: Point) -> Paint {
    match paint {
        Paint::Solid(_) => paint.clone(),
        Paint::LinearGradient(g) => Paint::LinearGradient(g.translated(origin.x, origin.y)),
    }
}
