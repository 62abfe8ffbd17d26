use crate::coords::Point;
use crate::math::clamp;
use crate::paint::Paint;
use crate::shape::{Mesh, MeshKind};
use crate::surface::DrawContext;

use super::rounded_rect;

/// Progress bar split into `count` equal rounded segments separated by
/// `gap`.
///
/// Progress fills segments left to right: a segment wholly below the
/// progress draws complete, the one containing it draws partially, the rest
/// are not drawn.
pub fn progress_bar_intervals(
    origin: Point,
    width: f64,
    height: f64,
    count: usize,
    gap: f64,
    paint: impl Into<Paint>,
) -> Mesh {
    let paint = paint.into();
    let count = count.max(1);
    let n = count as f64;
    let segment = ((width - gap * (n - 1.0)) / n).max(0.0);

    let members = (0..count)
        .map(|i| {
            let x = origin.x + i as f64 * (segment + gap);
            rounded_rect(x, origin.y, segment, height, paint.clone()).into()
        })
        .collect();

    Mesh::composite(MeshKind::Intervals, members)
}

pub(crate) fn draw(mesh: &Mesh, ctx: &mut dyn DrawContext, t: f64) {
    let n = mesh.len() as f64;
    let filled = clamp(t, 0.0, 1.0) * n;

    for (i, member) in mesh.members().iter().enumerate() {
        let i = i as f64;
        if i + 1.0 <= filled {
            member.draw(ctx, 1.0);
        } else if i < filled {
            member.draw(ctx, filled - i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::Recorder;
    use crate::shape::Shape;

    fn bar() -> Mesh {
        progress_bar_intervals(Point::new(0.0, 0.0), 430.0, 10.0, 4, 10.0, Color::WHITE)
    }

    #[test]
    fn segments_share_width_evenly() {
        let mesh = bar();
        assert_eq!(mesh.len(), 4);
        let xs: Vec<f64> = (0..4)
            .map(|i| {
                let Some(Shape::Rectangle(r)) = mesh.mesh_at(i).and_then(|m| m.shape_at(1)) else {
                    panic!("expected bar")
                };
                r.points()[0].x
            })
            .collect();
        // segment width 100, cap radius 5
        assert_eq!(xs, vec![5.0, 115.0, 225.0, 335.0]);
    }

    #[test]
    fn sixty_percent_fills_two_and_part_of_third() {
        let mesh = bar();
        let mut rec = Recorder::new();
        mesh.draw(&mut rec, 0.6);
        let items = rec.list().items();

        // three commands per drawn segment, none for the fourth
        assert_eq!(items.len(), 9);

        let width = |k: usize| items[k].path().and_then(|p| p.bounds()).unwrap().size.x;
        assert!((width(1) - 90.0).abs() < 1e-9);
        assert!((width(4) - 90.0).abs() < 1e-9);
        assert!((width(7) - 36.0).abs() < 1e-6);
    }

    #[test]
    fn zero_progress_draws_nothing() {
        let mut rec = Recorder::new();
        bar().draw(&mut rec, 0.0);
        assert!(rec.list().is_empty());
    }

    #[test]
    fn full_progress_draws_every_segment_whole() {
        let mut rec = Recorder::new();
        bar().draw(&mut rec, 1.0);
        assert_eq!(rec.list().len(), 12);
    }

    #[test]
    fn zero_count_builds_one_segment() {
        let mesh = progress_bar_intervals(Point::zero(), 100.0, 10.0, 0, 5.0, Color::BLACK);
        assert_eq!(mesh.len(), 1);
    }
}
