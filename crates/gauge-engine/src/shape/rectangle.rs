use crate::coords::{Angle, Point, Transform};
use crate::surface::DrawContext;

use super::{Polygon, Style};

/// Four-corner polygon with width/height setters.
///
/// Corner order is top-left, top-right, bottom-right, bottom-left. The first
/// corner is the anchor: `set_width` moves only the 2nd and 3rd corners' x,
/// `set_height` only the 3rd and 4th corners' y. The setters assume the
/// rectangle is still axis-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    poly: Polygon,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        let poly = Polygon::new(
            vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            style,
        );
        Self { poly }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.poly.points()
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.poly.style
    }

    #[inline]
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.poly.style
    }

    #[inline]
    pub fn width(&self) -> f64 {
        let p = self.poly.points();
        p[1].x - p[0].x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        let p = self.poly.points();
        p[3].y - p[0].y
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        let p = self.poly.points_mut();
        let x = p[0].x + width;
        p[1].x = x;
        p[2].x = x;
        self
    }

    pub fn set_height(&mut self, height: f64) -> &mut Self {
        let p = self.poly.points_mut();
        let y = p[0].y + height;
        p[2].y = y;
        p[3].y = y;
        self
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        self.poly.centroid()
    }

    pub fn scale_in_place(&mut self, s: f64) -> &mut Self {
        self.poly.scale_in_place(s);
        self
    }

    #[inline]
    pub fn draw(&self, ctx: &mut dyn DrawContext, progress: f64) {
        self.poly.draw(ctx, progress);
    }
}

impl Transform for Rectangle {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.poly.translate(dx, dy);
        self
    }

    fn scale(&mut self, s: f64) -> &mut Self {
        self.poly.scale(s);
        self
    }

    fn rotate(&mut self, theta: Angle) -> &mut Self {
        self.poly.rotate(theta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn rect() -> Rectangle {
        Rectangle::new(10.0, 20.0, 30.0, 40.0, Style::filled(Color::WHITE))
    }

    #[test]
    fn corners_in_order() {
        let r = rect();
        assert_eq!(
            r.points(),
            &[
                Point::new(10.0, 20.0),
                Point::new(40.0, 20.0),
                Point::new(40.0, 60.0),
                Point::new(10.0, 60.0),
            ]
        );
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 40.0);
    }

    #[test]
    fn set_width_anchors_first_corner() {
        let mut r = rect();
        r.set_width(5.0);
        assert_eq!(r.points()[0], Point::new(10.0, 20.0));
        assert_eq!(r.points()[1].x, 15.0);
        assert_eq!(r.points()[2].x, 15.0);
        assert_eq!(r.points()[3].x, 10.0);
        assert_eq!(r.points()[2].y, 60.0);
    }

    #[test]
    fn set_height_anchors_first_corner() {
        let mut r = rect();
        r.set_height(100.0);
        assert_eq!(r.points()[0], Point::new(10.0, 20.0));
        assert_eq!(r.points()[1].y, 20.0);
        assert_eq!(r.points()[2].y, 120.0);
        assert_eq!(r.points()[3].y, 120.0);
        assert_eq!(r.width(), 30.0);
    }

    #[test]
    fn centroid_is_center() {
        assert_eq!(rect().centroid(), Point::new(25.0, 40.0));
    }
}
