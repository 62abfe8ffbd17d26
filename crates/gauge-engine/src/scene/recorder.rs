use crate::coords::{Point, Rect};
use crate::paint::{Color, Paint};
use crate::surface::{DrawContext, Shadow};

use super::{DrawCmd, DrawList, FillCmd, Path, StrokeCmd};

/// Current style state, canvas defaults on construction.
#[derive(Debug, Clone, PartialEq)]
struct Style {
    stroke: Paint,
    fill: Paint,
    line_width: f64,
    shadow: Shadow,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Paint::Solid(Color::BLACK),
            fill: Paint::Solid(Color::BLACK),
            line_width: 1.0,
            shadow: Shadow::NONE,
        }
    }
}

/// A [`DrawContext`] that records instead of rasterizing.
///
/// Every `fill`/`stroke` snapshots the current path and style into a
/// [`DrawCmd`], so style leaks between draws show up in the recorded stream.
/// The resulting [`DrawList`] feeds `render::PathRenderer`.
#[derive(Debug, Default)]
pub struct Recorder {
    list: DrawList,
    path: Path,
    style: Style,
}

impl Recorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records into an existing list (appending), reusing its capacity.
    pub fn with_list(list: DrawList) -> Self {
        Self { list, ..Self::default() }
    }

    #[inline]
    pub fn list(&self) -> &DrawList {
        &self.list
    }

    /// Consumes the recorder and returns the recorded list.
    pub fn finish(self) -> DrawList {
        self.list
    }

    /// Clears commands and resets state to canvas defaults.
    pub fn reset(&mut self) {
        self.list.clear();
        self.path.clear();
        self.style = Style::default();
    }

    #[inline]
    pub fn line_width(&self) -> f64 {
        self.style.line_width
    }

    #[inline]
    pub fn shadow(&self) -> Shadow {
        self.style.shadow
    }
}

impl DrawContext for Recorder {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to(Point::new(x, y));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.path.arc(Point::new(x, y), radius, start, end, anticlockwise);
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.list.push(DrawCmd::Stroke(StrokeCmd {
            path: self.path.clone(),
            paint: self.style.stroke.clone(),
            line_width: self.style.line_width,
            shadow: self.style.shadow,
        }));
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.list.push(DrawCmd::Fill(FillCmd {
            path: self.path.clone(),
            paint: self.style.fill.clone(),
            shadow: self.style.shadow,
        }));
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.list.push(DrawCmd::Clear(Rect::new(x, y, w, h)));
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.style.stroke = paint.clone();
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.style.fill = paint.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        // Canvas ignores non-positive and non-finite widths.
        if width > 0.0 && width.is_finite() {
            self.style.line_width = width;
        }
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.style.shadow.color = color;
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        if blur >= 0.0 && blur.is_finite() {
            self.style.shadow.blur = blur;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    fn triangle(ctx: &mut impl DrawContext) {
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(10.0, 0.0);
        ctx.line_to(0.0, 10.0);
        ctx.close_path();
    }

    #[test]
    fn fill_and_stroke_snapshot_style() {
        let mut rec = Recorder::new();
        triangle(&mut rec);
        rec.set_fill_style(&Paint::Solid(Color::WHITE));
        rec.fill();
        rec.set_line_width(4.0);
        rec.stroke();

        let items = rec.list().items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].paint(), Some(&Paint::Solid(Color::WHITE)));
        match &items[1] {
            DrawCmd::Stroke(s) => assert_eq!(s.line_width, 4.0),
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn empty_path_records_nothing() {
        let mut rec = Recorder::new();
        rec.begin_path();
        rec.fill();
        rec.stroke();
        assert!(rec.list().is_empty());
    }

    #[test]
    fn invalid_line_width_is_ignored() {
        let mut rec = Recorder::new();
        rec.set_line_width(3.0);
        rec.set_line_width(0.0);
        rec.set_line_width(f64::NAN);
        assert_eq!(rec.line_width(), 3.0);
    }

    #[test]
    fn shadow_persists_until_changed() {
        let mut rec = Recorder::new();
        rec.set_shadow(Shadow::new(Color::WHITE, 8.0));
        triangle(&mut rec);
        rec.fill();
        rec.fill();
        assert!(rec.list().iter().all(|c| c.shadow() == Some(Shadow::new(Color::WHITE, 8.0))));
    }

    #[test]
    fn clear_rect_is_recorded() {
        let mut rec = Recorder::new();
        rec.clear_rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rec.list().items(), &[DrawCmd::Clear(Rect::new(0.0, 0.0, 100.0, 50.0))]);
    }

    #[test]
    fn surface_forwards_to_recorder() {
        let mut rec = Recorder::new();
        {
            let mut surface = Surface::new(&mut rec, Point::new(5.0, 5.0));
            assert_eq!(surface.origin(), Point::new(5.0, 5.0));
            triangle(&mut surface);
            surface.stroke();
        }
        assert_eq!(rec.list().len(), 1);
    }
}
