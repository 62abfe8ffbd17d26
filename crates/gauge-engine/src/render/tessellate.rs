//! CPU tessellation of a recorded [`DrawList`] into colored triangles.
//!
//! - fills: one triangle fan per subpath (subpaths are expected convex)
//! - strokes: one quad per segment, `line_width` wide, butt ends
//! - clears: one quad of transparent black written without blending
//!
//! Paint is evaluated per vertex, so gradients interpolate across each
//! triangle.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{Point, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, Path};

/// One tessellated vertex: logical position, premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PathVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl PathVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PathVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Consecutive vertices drawn with one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub vertices: Range<u32>,
    /// Overwrite the target instead of alpha blending (clears).
    pub replace: bool,
}

/// Triangle list plus its draw batches, in paint order.
#[derive(Debug, Default, Clone)]
pub struct Tessellation {
    pub vertices: Vec<PathVertex>,
    pub batches: Vec<Batch>,
    /// Commands carrying a visible shadow; shadows are not rasterized.
    pub shadowed: usize,
}

impl Tessellation {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    fn push_tri(&mut self, paint: &Paint, a: Point, b: Point, c: Point) {
        for p in [a, b, c] {
            self.vertices.push(PathVertex {
                pos: [p.x as f32, p.y as f32],
                color: color_at(paint, p),
            });
        }
    }

    fn push_quad(&mut self, paint: &Paint, q: [Point; 4]) {
        self.push_tri(paint, q[0], q[1], q[2]);
        self.push_tri(paint, q[0], q[2], q[3]);
    }

    fn close_batch(&mut self, start: usize, replace: bool) {
        let end = self.vertices.len();
        if end == start {
            return;
        }
        match self.batches.last_mut() {
            Some(last) if last.replace == replace && last.vertices.end as usize == start => {
                last.vertices.end = end as u32;
            }
            _ => self.batches.push(Batch {
                vertices: start as u32..end as u32,
                replace,
            }),
        }
    }
}

/// Tessellates every command of `list` in paint order.
pub fn tessellate(list: &DrawList) -> Tessellation {
    let mut out = Tessellation::default();

    for cmd in list.iter() {
        let start = out.vertices.len();
        match cmd {
            DrawCmd::Fill(f) => {
                fill_path(&mut out, &f.path, &f.paint);
                if f.shadow.is_visible() {
                    out.shadowed += 1;
                }
                out.close_batch(start, false);
            }
            DrawCmd::Stroke(s) => {
                stroke_path(&mut out, &s.path, &s.paint, s.line_width);
                if s.shadow.is_visible() {
                    out.shadowed += 1;
                }
                out.close_batch(start, false);
            }
            DrawCmd::Clear(r) => {
                clear_rect(&mut out, *r);
                out.close_batch(start, true);
            }
        }
    }

    out
}

fn fill_path(out: &mut Tessellation, path: &Path, paint: &Paint) {
    for sub in path.subpaths() {
        let pts = dedup_closing(&sub.points);
        let Some((&first, rest)) = pts.split_first() else { continue };
        for pair in rest.windows(2) {
            out.push_tri(paint, first, pair[0], pair[1]);
        }
    }
}

fn stroke_path(out: &mut Tessellation, path: &Path, paint: &Paint, line_width: f64) {
    let half = line_width / 2.0;
    if half <= 0.0 {
        return;
    }
    for sub in path.subpaths() {
        let pts = &sub.points;
        for pair in pts.windows(2) {
            segment_quad(out, paint, pair[0], pair[1], half);
        }
        if sub.closed && pts.len() > 2 {
            if let (Some(&last), Some(&first)) = (pts.last(), pts.first()) {
                segment_quad(out, paint, last, first, half);
            }
        }
    }
}

fn segment_quad(out: &mut Tessellation, paint: &Paint, a: Point, b: Point, half: f64) {
    let d = b - a;
    let len = d.length();
    if len <= f64::EPSILON {
        return;
    }
    let n = Point::new(-d.y / len * half, d.x / len * half);
    out.push_quad(paint, [a + n, b + n, b - n, a - n]);
}

fn clear_rect(out: &mut Tessellation, r: Rect) {
    let r = r.normalized();
    if r.is_empty() {
        return;
    }
    let (min, max) = (r.min(), r.max());
    let corners = [min, Point::new(max.x, min.y), max, Point::new(min.x, max.y)];
    for tri in [[0, 1, 2], [0, 2, 3]] {
        for i in tri {
            let p = corners[i];
            out.vertices.push(PathVertex {
                pos: [p.x as f32, p.y as f32],
                color: [0.0; 4],
            });
        }
    }
}

/// Drops a trailing point equal to the first, which a fan does not need.
fn dedup_closing(points: &[Point]) -> &[Point] {
    match points {
        [first, .., last] if points.len() > 3 && first == last => &points[..points.len() - 1],
        _ => points,
    }
}

fn color_at(paint: &Paint, p: Point) -> [f32; 4] {
    match paint {
        Paint::Solid(c) => c.to_array(),
        Paint::LinearGradient(g) => g.color_at(p).to_array(),
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;
    use crate::paint::{Color, LinearGradient};
    use crate::scene::Recorder;
    use crate::surface::{DrawContext, Shadow};

    fn square(rec: &mut Recorder) {
        rec.begin_path();
        rec.move_to(0.0, 0.0);
        rec.line_to(10.0, 0.0);
        rec.line_to(10.0, 10.0);
        rec.line_to(0.0, 10.0);
        rec.close_path();
    }

    // ── fills ──

    #[test]
    fn fill_fans_convex_subpath() {
        let mut rec = Recorder::new();
        square(&mut rec);
        rec.set_fill_style(&Paint::Solid(Color::WHITE));
        rec.fill();

        let t = tessellate(rec.list());
        assert_eq!(t.triangle_count(), 2);
        assert_eq!(t.batches, vec![Batch { vertices: 0..6, replace: false }]);
        assert!(t.vertices.iter().all(|v| v.color == Color::WHITE.to_array()));
    }

    #[test]
    fn gradient_is_evaluated_per_vertex() {
        let g = LinearGradient::two_stop(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Color::BLACK, Color::WHITE);
        let mut rec = Recorder::new();
        square(&mut rec);
        rec.set_fill_style(&g.into());
        rec.fill();

        let t = tessellate(rec.list());
        for v in &t.vertices {
            let expected = if v.pos[0] == 0.0 { Color::BLACK } else { Color::WHITE };
            assert_eq!(v.color, expected.to_array());
        }
    }

    // ── strokes ──

    #[test]
    fn stroke_emits_one_quad_per_segment() {
        let mut rec = Recorder::new();
        square(&mut rec);
        rec.set_line_width(2.0);
        rec.stroke();

        let t = tessellate(rec.list());
        // four sides of the closed square, plus nothing for the restarted subpath
        assert_eq!(t.triangle_count(), 8);

        let xs: Vec<f32> = t.vertices.iter().map(|v| v.pos[0]).collect();
        let min = xs.iter().copied().fold(f32::INFINITY, f32::min);
        let max = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!((min, max), (-1.0, 11.0));
    }

    #[test]
    fn arc_stroke_stays_within_band() {
        let mut rec = Recorder::new();
        rec.begin_path();
        rec.arc(0.0, 0.0, 50.0, 0.0, PI, false);
        rec.set_line_width(10.0);
        rec.stroke();

        let t = tessellate(rec.list());
        assert!(t.triangle_count() > 0);
        for v in &t.vertices {
            let r = (v.pos[0] as f64).hypot(v.pos[1] as f64);
            assert!((44.9..=55.1).contains(&r), "radius {r}");
        }
    }

    // ── clears and batching ──

    #[test]
    fn clear_splits_batches() {
        let mut rec = Recorder::new();
        square(&mut rec);
        rec.fill();
        rec.clear_rect(0.0, 0.0, 100.0, 100.0);
        square(&mut rec);
        rec.fill();

        let t = tessellate(rec.list());
        assert_eq!(
            t.batches,
            vec![
                Batch { vertices: 0..6, replace: false },
                Batch { vertices: 6..12, replace: true },
                Batch { vertices: 12..18, replace: false },
            ]
        );
        assert!(t.vertices[6..12].iter().all(|v| v.color == [0.0; 4]));
    }

    #[test]
    fn adjacent_draws_share_a_batch_and_count_shadows() {
        let mut rec = Recorder::new();
        square(&mut rec);
        rec.set_shadow(Shadow::new(Color::BLACK, 4.0));
        rec.fill();
        square(&mut rec);
        rec.set_shadow(Shadow::NONE);
        rec.fill();

        let t = tessellate(rec.list());
        assert_eq!(t.batches.len(), 1);
        assert_eq!(t.shadowed, 1);
    }
}
