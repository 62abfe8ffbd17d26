use crate::coords::{Angle, Point, Transform};
use crate::surface::DrawContext;

use super::Style;

/// Closed polygon. The vertex count and order are fixed at construction;
/// transforms only move the vertices.
///
/// An empty vertex list is a caller precondition violation; drawing it
/// records nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    pub style: Style,
}

impl Polygon {
    pub fn new(points: Vec<Point>, style: Style) -> Self {
        debug_assert!(!points.is_empty(), "polygon needs at least one point");
        Self { points, style }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point {
        let sum = self.points.iter().fold(Point::zero(), |acc, &p| acc + p);
        sum / self.points.len() as f64
    }

    /// Scales about the centroid instead of the coordinate origin.
    pub fn scale_in_place(&mut self, s: f64) -> &mut Self {
        let c = self.centroid();
        self.translate(-c.x, -c.y).scale(s).translate(c.x, c.y)
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext, _progress: f64) {
        let Some((first, rest)) = self.points.split_first() else { return };
        let o = ctx.origin();

        ctx.begin_path();
        ctx.move_to(first.x + o.x, first.y + o.y);
        for p in rest {
            ctx.line_to(p.x + o.x, p.y + o.y);
        }
        ctx.close_path();
        self.style.paint_path(ctx, o);
    }
}

impl Transform for Polygon {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        for p in &mut self.points {
            p.translate(dx, dy);
        }
        self
    }

    fn scale(&mut self, s: f64) -> &mut Self {
        for p in &mut self.points {
            p.scale(s);
        }
        self
    }

    fn rotate(&mut self, theta: Angle) -> &mut Self {
        for p in &mut self.points {
            p.rotate(theta);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::{Color, Paint};
    use crate::scene::{DrawCmd, Recorder};
    use crate::surface::{Shadow, Surface};

    fn square() -> Polygon {
        Polygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            Style::stroked(Color::WHITE, 2.0),
        )
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn centroid_is_mean() {
        assert_eq!(square().centroid(), Point::new(5.0, 5.0));
    }

    #[test]
    fn scale_in_place_keeps_centroid() {
        let mut p = square();
        p.scale_in_place(3.0);
        assert_eq!(p.centroid(), Point::new(5.0, 5.0));
        assert_eq!(p.points()[0], Point::new(-10.0, -10.0));
    }

    #[test]
    fn rotate_about_centroid_keeps_vertex_count_and_order() {
        let mut p = square();
        p.rotate_about_point(5.0, 5.0, Angle::Deg(90.0));
        assert_eq!(p.points().len(), 4);
        let first = p.points()[0];
        assert!(first.distance_to(Point::new(10.0, 0.0)) < 1e-9);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn strokes_by_default() {
        let mut rec = Recorder::new();
        square().draw(&mut rec, 0.0);
        let items = rec.list().items();
        assert_eq!(items.len(), 1);
        let DrawCmd::Stroke(s) = &items[0] else { panic!("expected stroke") };
        assert_eq!(s.line_width, 2.0);
        assert_eq!(s.paint, Paint::Solid(Color::WHITE));
        assert!(s.path.subpaths()[0].closed);
    }

    #[test]
    fn fills_when_fill_set() {
        let mut rec = Recorder::new();
        let mut p = square();
        p.style.fill = Some(Paint::Solid(Color::BLACK));
        p.draw(&mut rec, 0.0);
        assert!(rec.list().items()[0].is_fill());
    }

    #[test]
    fn surface_origin_offsets_at_draw_time_only() {
        let mut rec = Recorder::new();
        let p = square();
        {
            let mut surface = Surface::new(&mut rec, Point::new(100.0, 50.0));
            p.draw(&mut surface, 0.0);
        }
        let bounds = rec.list().items()[0].path().unwrap().bounds().unwrap();
        assert_eq!(bounds, Rect::new(100.0, 50.0, 10.0, 10.0));
        assert_eq!(p.points()[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn shadow_is_reset_every_draw() {
        let mut rec = Recorder::new();
        let mut shadowed = square();
        shadowed.style = shadowed.style.clone().with_shadow(Color::WHITE, 12.0);
        shadowed.draw(&mut rec, 0.0);
        square().draw(&mut rec, 0.0);

        let items = rec.list().items();
        assert_eq!(items[0].shadow(), Some(Shadow::new(Color::WHITE, 12.0)));
        assert_eq!(items[1].shadow(), Some(Shadow::NONE));
    }
}
