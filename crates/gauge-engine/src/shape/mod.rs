//! Drawable primitives and meshes.
//!
//! Every primitive implements [`Transform`] (mutating in place, chainable)
//! and draws itself through a [`DrawContext`], offsetting its stored
//! coordinates by the context origin at draw time.

mod arc;
mod mesh;
mod polygon;
mod rectangle;
mod style;

pub use arc::Arc;
pub use mesh::{Member, Mesh, MeshKind};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use style::Style;

use crate::coords::{Angle, Point, Transform};
use crate::paint::Paint;
use crate::surface::DrawContext;

/// Closed set of primitive shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Arc(Arc),
    Rectangle(Rectangle),
}

impl Shape {
    /// Stored points: polygon vertices, rectangle corners, or the arc center.
    pub fn points(&self) -> &[Point] {
        match self {
            Shape::Polygon(p) => p.points(),
            Shape::Arc(a) => core::slice::from_ref(&a.center),
            Shape::Rectangle(r) => r.points(),
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Shape::Polygon(p) => &p.style,
            Shape::Arc(a) => &a.style,
            Shape::Rectangle(r) => r.style(),
        }
    }

    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Shape::Polygon(p) => &mut p.style,
            Shape::Arc(a) => &mut a.style,
            Shape::Rectangle(r) => r.style_mut(),
        }
    }

    /// Mean of the points; `None` for arcs, which have no vertex set.
    pub fn centroid(&self) -> Option<Point> {
        match self {
            Shape::Polygon(p) => Some(p.centroid()),
            Shape::Rectangle(r) => Some(r.centroid()),
            Shape::Arc(_) => None,
        }
    }

    #[inline]
    pub fn set_stroke(&mut self, paint: impl Into<Paint>) -> &mut Self {
        self.style_mut().stroke = paint.into();
        self
    }

    #[inline]
    pub fn set_fill(&mut self, paint: Option<Paint>) -> &mut Self {
        self.style_mut().fill = paint;
        self
    }

    #[inline]
    pub fn is_arc(&self) -> bool {
        matches!(self, Shape::Arc(_))
    }

    #[inline]
    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }

    /// Draws the shape. Primitives ignore `progress`; it exists so shapes and
    /// meshes share one draw contract.
    pub fn draw(&self, ctx: &mut dyn DrawContext, progress: f64) {
        match self {
            Shape::Polygon(p) => p.draw(ctx, progress),
            Shape::Arc(a) => a.draw(ctx, progress),
            Shape::Rectangle(r) => r.draw(ctx, progress),
        }
    }
}

impl Transform for Shape {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        match self {
            Shape::Polygon(p) => {
                p.translate(dx, dy);
            }
            Shape::Arc(a) => {
                a.translate(dx, dy);
            }
            Shape::Rectangle(r) => {
                r.translate(dx, dy);
            }
        }
        self
    }

    fn scale(&mut self, s: f64) -> &mut Self {
        match self {
            Shape::Polygon(p) => {
                p.scale(s);
            }
            Shape::Arc(a) => {
                a.scale(s);
            }
            Shape::Rectangle(r) => {
                r.scale(s);
            }
        }
        self
    }

    fn rotate(&mut self, theta: Angle) -> &mut Self {
        match self {
            Shape::Polygon(p) => {
                p.rotate(theta);
            }
            Shape::Arc(a) => {
                a.rotate(theta);
            }
            Shape::Rectangle(r) => {
                r.rotate(theta);
            }
        }
        self
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

impl From<Arc> for Shape {
    fn from(a: Arc) -> Self {
        Shape::Arc(a)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}
