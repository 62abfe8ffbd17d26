use core::f64::consts::{PI, TAU};

use crate::coords::{Point, Rect};

/// Maximum angle covered by one flattened arc segment, radians.
pub const ARC_STEP: f64 = PI / 64.0;

/// One connected polyline of a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Flattened path: arcs are already turned into line segments.
///
/// Building follows canvas rules: `line_to` without a current point behaves
/// like `move_to`, and `arc` joins the current point to the arc start with a
/// straight segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    #[inline]
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// True when no point has been recorded.
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    /// Every point of every subpath, in recording order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.subpaths.iter().flat_map(|s| s.points.iter().copied())
    }

    pub fn bounds(&self) -> Option<Rect> {
        let pts: Vec<Point> = self.points().collect();
        Rect::bounding(&pts)
    }

    pub fn move_to(&mut self, p: Point) {
        self.subpaths.push(SubPath { points: vec![p], closed: false });
    }

    pub fn line_to(&mut self, p: Point) {
        match self.open_subpath() {
            Some(sub) => sub.points.push(p),
            None => self.move_to(p),
        }
    }

    /// Appends a circular arc, canvas semantics.
    ///
    /// Clockwise arcs sweep `(end - start) mod 2π`, anticlockwise arcs the
    /// complement; a requested sweep of 2π or more draws the full circle.
    pub fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        let sweep = arc_sweep(start, end, anticlockwise);
        let segments = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);

        self.line_to(center.polar(radius, start));
        if sweep == 0.0 {
            return;
        }
        for i in 1..=segments {
            let a = start + sweep * (i as f64 / segments as f64);
            self.line_to(center.polar(radius, a));
        }
    }

    pub fn close_path(&mut self) {
        let Some(sub) = self.subpaths.last_mut() else { return };
        if sub.closed || sub.points.is_empty() {
            return;
        }
        sub.closed = true;
        let first = sub.points[0];
        // Canvas continues from the start of the closed subpath.
        self.subpaths.push(SubPath { points: vec![first], closed: false });
    }

    fn open_subpath(&mut self) -> Option<&mut SubPath> {
        self.subpaths.last_mut().filter(|s| !s.closed && !s.points.is_empty())
    }
}

fn arc_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if !anticlockwise {
        let d = end - start;
        if d >= TAU { TAU } else { d.rem_euclid(TAU) }
    } else {
        let d = start - end;
        if d >= TAU { -TAU } else { -d.rem_euclid(TAU) }
    }
}
