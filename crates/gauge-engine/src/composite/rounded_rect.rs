use crate::coords::{Point, Transform};
use crate::math::{clamp, slerp_points, Winding};
use crate::paint::Paint;
use crate::shape::{Mesh, MeshKind, Polygon, Rectangle, Shape, Style};
use crate::surface::DrawContext;

/// Capsule-shaped bar filled left to right as progress goes from 0 to 1.
///
/// Members are `[left cap, bar, right cap]`. The caps are half discs of
/// radius `height / 2`; the bar spans the straight middle. `width` below
/// `height` leaves a zero-width bar.
pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, paint: impl Into<Paint>) -> Mesh {
    let paint = paint.into();
    let r = height / 2.0;
    let bar_width = (width - height).max(0.0);

    let top_left = Point::new(x + r, y);
    let bottom_left = Point::new(x + r, y + height);
    let left = Polygon::new(
        slerp_points(top_left, bottom_left, Winding::CounterClockwise),
        Style::filled(paint.clone()),
    );

    let top_right = Point::new(x + r + bar_width, y);
    let bottom_right = Point::new(x + r + bar_width, y + height);
    let right = Polygon::new(
        slerp_points(top_right, bottom_right, Winding::Clockwise),
        Style::filled(paint.clone()),
    );

    let bar = Rectangle::new(x + r, y, bar_width, height, Style::filled(paint));

    Mesh::composite(MeshKind::RoundedRect, vec![left.into(), bar.into(), right.into()])
}

pub(crate) fn draw(mesh: &Mesh, ctx: &mut dyn DrawContext, t: f64) {
    let (Some(Shape::Polygon(left)), Some(Shape::Rectangle(bar)), Some(Shape::Polygon(right))) =
        (mesh.shape_at(0), mesh.shape_at(1), mesh.shape_at(2))
    else {
        log::debug!("rounded rect mesh lost its structure; drawing members as-is");
        mesh.draw_members_from(ctx, t, 0);
        return;
    };

    let full = bar.width();
    let current = full * clamp(t, 0.0, 1.0);

    left.draw(ctx, t);

    let mut partial = bar.clone();
    partial.set_width(current);
    partial.draw(ctx, t);

    let mut cap = right.clone();
    cap.translate(current - full, 0.0);
    cap.draw(ctx, t);

    mesh.draw_members_from(ctx, t, 3);
}
