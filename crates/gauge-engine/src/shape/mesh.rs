use crate::composite;
use crate::coords::{Angle, Transform};
use crate::surface::DrawContext;

use super::Shape;

/// Mesh member: a primitive or a nested mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Shape(Shape),
    Mesh(Mesh),
}

impl Member {
    pub fn draw(&self, ctx: &mut dyn DrawContext, progress: f64) {
        match self {
            Member::Shape(s) => s.draw(ctx, progress),
            Member::Mesh(m) => m.draw(ctx, progress),
        }
    }

    #[inline]
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Member::Shape(s) => Some(s),
            Member::Mesh(_) => None,
        }
    }

    #[inline]
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Member::Mesh(m) => Some(m),
            Member::Shape(_) => None,
        }
    }
}

impl<S: Into<Shape>> From<S> for Member {
    fn from(s: S) -> Self {
        Member::Shape(s.into())
    }
}

impl From<Mesh> for Member {
    fn from(m: Mesh) -> Self {
        Member::Mesh(m)
    }
}

/// How a mesh turns `progress` into draw calls.
///
/// Composite kinds carry only what cannot be read back from their members;
/// everything positional lives in the member shapes, so mesh transforms keep
/// the composite consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshKind {
    /// Draws every member in order with the same progress.
    Simple,
    /// `[start cap, arc, end cap]`; `delta` is the cap's angular width, radians.
    RoundedArc { delta: f64 },
    /// `[left cap, bar, right cap]`.
    RoundedRect,
    /// Equal rounded-rectangle segments filled left to right.
    Intervals,
}

/// Ordered composite of shapes. Array order is z-order: later members are
/// drawn over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    members: Vec<Member>,
    kind: MeshKind,
}

impl Mesh {
    pub fn new() -> Self {
        Self { members: Vec::new(), kind: MeshKind::Simple }
    }

    pub(crate) fn composite(kind: MeshKind, members: Vec<Member>) -> Self {
        Self { members, kind }
    }

    #[inline]
    pub fn kind(&self) -> MeshKind {
        self.kind
    }

    pub fn add(&mut self, member: impl Into<Member>) -> &mut Self {
        self.members.push(member.into());
        self
    }

    #[inline]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Direct member `i` if it is a primitive.
    #[inline]
    pub fn shape_at(&self, i: usize) -> Option<&Shape> {
        self.members.get(i).and_then(Member::as_shape)
    }

    /// Direct member `i` if it is a nested mesh.
    #[inline]
    pub fn mesh_at(&self, i: usize) -> Option<&Mesh> {
        self.members.get(i).and_then(Member::as_mesh)
    }

    /// Calls `f(shape, index)` on every primitive, descending into nested
    /// meshes depth-first. `index` counts primitives in visit order.
    /// Membership never changes.
    pub fn map(&mut self, mut f: impl FnMut(&mut Shape, usize)) -> &mut Self {
        let mut next = 0;
        self.map_inner(&mut f, &mut next);
        self
    }

    fn map_inner(&mut self, f: &mut dyn FnMut(&mut Shape, usize), next: &mut usize) {
        for m in &mut self.members {
            match m {
                Member::Shape(s) => {
                    f(s, *next);
                    *next += 1;
                }
                Member::Mesh(inner) => inner.map_inner(f, next),
            }
        }
    }

    /// Every primitive, depth-first.
    pub fn shapes(&self) -> Vec<&Shape> {
        let mut out = Vec::new();
        self.collect_shapes(&mut out);
        out
    }

    fn collect_shapes<'a>(&'a self, out: &mut Vec<&'a Shape>) {
        for m in &self.members {
            match m {
                Member::Shape(s) => out.push(s),
                Member::Mesh(inner) => inner.collect_shapes(out),
            }
        }
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext, progress: f64) {
        match self.kind {
            MeshKind::Simple => self.draw_members_from(ctx, progress, 0),
            MeshKind::RoundedArc { delta } => composite::rounded_arc::draw(self, delta, ctx, progress),
            MeshKind::RoundedRect => composite::rounded_rect::draw(self, ctx, progress),
            MeshKind::Intervals => composite::intervals::draw(self, ctx, progress),
        }
    }

    /// Default behavior for members `skip..`: each drawn in order.
    pub(crate) fn draw_members_from(&self, ctx: &mut dyn DrawContext, progress: f64, skip: usize) {
        for m in self.members.iter().skip(skip) {
            m.draw(ctx, progress);
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for Member {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        match self {
            Member::Shape(s) => {
                s.translate(dx, dy);
            }
            Member::Mesh(m) => {
                m.translate(dx, dy);
            }
        }
        self
    }

    fn scale(&mut self, s: f64) -> &mut Self {
        match self {
            Member::Shape(sh) => {
                sh.scale(s);
            }
            Member::Mesh(m) => {
                m.scale(s);
            }
        }
        self
    }

    fn rotate(&mut self, theta: Angle) -> &mut Self {
        match self {
            Member::Shape(s) => {
                s.rotate(theta);
            }
            Member::Mesh(m) => {
                m.rotate(theta);
            }
        }
        self
    }
}

impl Transform for Mesh {
    fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        for m in &mut self.members {
            m.translate(dx, dy);
        }
        self
    }

    fn scale(&mut self, s: f64) -> &mut Self {
        for m in &mut self.members {
            m.scale(s);
        }
        self
    }

    fn rotate(&mut self, theta: Angle) -> &mut Self {
        for m in &mut self.members {
            m.rotate(theta);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::paint::{Color, Paint};
    use crate::scene::Recorder;
    use crate::shape::{Arc, Polygon, Rectangle, Style};

    fn sample() -> Mesh {
        let mut inner = Mesh::new();
        inner.add(Rectangle::new(0.0, 0.0, 4.0, 2.0, Style::filled(Color::BLACK)));

        let mut mesh = Mesh::new();
        mesh.add(Polygon::new(
            vec![Point::new(1.0, 1.0), Point::new(5.0, 1.0), Point::new(3.0, 4.0)],
            Style::stroked(Color::WHITE, 1.0),
        ))
        .add(Arc::new(Point::new(10.0, 10.0), 3.0, 0.0, 1.0, Style::default()))
        .add(inner);
        mesh
    }

    fn all_points(mesh: &Mesh) -> Vec<Point> {
        mesh.shapes().iter().flat_map(|s| s.points().to_vec()).collect()
    }

    #[test]
    fn translate_round_trip_restores_points() {
        let mut mesh = sample();
        let before = all_points(&mesh);
        mesh.translate(12.5, -7.25).translate(-12.5, 7.25);
        let after = all_points(&mesh);
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(&after) {
            assert!(a.distance_to(*b) < 1e-9);
        }
    }

    #[test]
    fn draw_preserves_member_order() {
        let mut rec = Recorder::new();
        sample().draw(&mut rec, 0.5);
        let items = rec.list().items();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_stroke());
        assert!(items[1].is_stroke());
        assert!(items[2].is_fill());
    }

    #[test]
    fn map_visits_nested_shapes_with_running_index() {
        let mut mesh = sample();
        let mut seen = Vec::new();
        mesh.map(|s, i| {
            seen.push(i);
            s.set_stroke(Color::from_rgb_hex(0x00FF00));
        });
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(mesh.len(), 3);
        assert!(mesh
            .shapes()
            .iter()
            .all(|s| s.style().stroke == Paint::Solid(Color::from_rgb_hex(0x00FF00))));
    }

    #[test]
    fn rotate_delegates_to_every_member() {
        let mut mesh = sample();
        mesh.rotate_about_point(10.0, 10.0, Angle::Deg(180.0));
        let Some(Shape::Arc(a)) = mesh.shape_at(1) else { panic!("expected arc") };
        assert!(a.center.distance_to(Point::new(10.0, 10.0)) < 1e-9);
        let Some(Shape::Polygon(p)) = mesh.shape_at(0) else { panic!("expected polygon") };
        assert!(p.points()[0].distance_to(Point::new(19.0, 19.0)) < 1e-9);
    }
}
