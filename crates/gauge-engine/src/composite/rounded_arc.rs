use crate::coords::{Angle, Point, Transform};
use crate::math::{clamp, lerp, slerp_points, Winding};
use crate::paint::Paint;
use crate::shape::{Arc, Mesh, MeshKind, Polygon, Shape, Style};
use crate::surface::DrawContext;

/// Thick arc with half-round caps, revealed from `start` towards `end` as
/// progress goes from 0 to 1.
///
/// Members are `[start cap, arc, end cap]`. Caps are filled polygons sampled
/// on the radial segment of width `line_width`; the arc strokes the span
/// between them. The end cap is stored at `start` and rotated into place at
/// draw time.
pub fn rounded_arc(
    center: Point,
    radius: f64,
    start: Angle,
    end: Angle,
    paint: impl Into<Paint>,
    line_width: f64,
) -> Mesh {
    let paint = paint.into();
    let (start, end) = (start.radians(), end.radians());
    let half = line_width / 2.0;
    let delta = half / radius;

    let cap = |angle: f64, winding: Winding| {
        let inner = center.polar(radius - half, angle);
        let outer = center.polar(radius + half, angle);
        Polygon::new(slerp_points(inner, outer, winding), Style::filled(paint.clone()))
    };

    let start_cap = cap(start + delta, Winding::Clockwise);
    let end_cap = cap(start, Winding::CounterClockwise);
    let arc = Arc::new(
        center,
        radius,
        start + delta,
        end - delta,
        Style::stroked(paint.clone(), line_width),
    );

    Mesh::composite(
        MeshKind::RoundedArc { delta },
        vec![start_cap.into(), arc.into(), end_cap.into()],
    )
}

/// Recolors a rounded arc: the arc's stroke and every cap's fill.
pub fn set_rounded_arc_color(mesh: &mut Mesh, paint: impl Into<Paint>) {
    let paint = paint.into();
    mesh.map(|shape, _| match shape {
        Shape::Arc(a) => a.style.stroke = paint.clone(),
        Shape::Polygon(p) => p.style.fill = Some(paint.clone()),
        Shape::Rectangle(_) => {}
    });
}

pub(crate) fn draw(mesh: &Mesh, delta: f64, ctx: &mut dyn DrawContext, t: f64) {
    let (Some(Shape::Polygon(start_cap)), Some(Shape::Arc(arc)), Some(Shape::Polygon(end_cap))) =
        (mesh.shape_at(0), mesh.shape_at(1), mesh.shape_at(2))
    else {
        log::debug!("rounded arc mesh lost its structure; drawing members as-is");
        mesh.draw_members_from(ctx, t, 0);
        return;
    };

    let start = arc.begin - delta;
    let end = arc.end + delta;
    let sweep = lerp(t, start, end);

    if sweep - start < delta {
        end_cap.draw(ctx, t);
    } else {
        let head = clamp(sweep - delta, start, end - delta);

        start_cap.draw(ctx, t);
        if head > arc.begin {
            arc.draw_span(ctx, arc.begin, head);
        }

        let mut cap = end_cap.clone();
        cap.rotate_about_point(arc.center.x, arc.center.y, Angle::Rad(head - start));
        cap.draw(ctx, t);
    }

    mesh.draw_members_from(ctx, t, 3);
}
