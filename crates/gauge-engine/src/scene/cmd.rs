use crate::coords::Rect;
use crate::paint::Paint;
use crate::surface::Shadow;

use super::Path;

/// Filled path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub path: Path,
    pub paint: Paint,
    pub shadow: Shadow,
}

/// Stroked path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub paint: Paint,
    pub line_width: f64,
    pub shadow: Shadow,
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a variant here
/// - record it from the matching `DrawContext` call in `Recorder`
/// - teach `render::tessellate` to emit triangles for it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(FillCmd),
    Stroke(StrokeCmd),
    Clear(Rect),
}

impl DrawCmd {
    /// The path drawn by this command, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DrawCmd::Fill(c) => Some(&c.path),
            DrawCmd::Stroke(c) => Some(&c.path),
            DrawCmd::Clear(_) => None,
        }
    }

    pub fn paint(&self) -> Option<&Paint> {
        match self {
            DrawCmd::Fill(c) => Some(&c.paint),
            DrawCmd::Stroke(c) => Some(&c.paint),
            DrawCmd::Clear(_) => None,
        }
    }

    pub fn shadow(&self) -> Option<Shadow> {
        match self {
            DrawCmd::Fill(c) => Some(c.shadow),
            DrawCmd::Stroke(c) => Some(c.shadow),
            DrawCmd::Clear(_) => None,
        }
    }

    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, DrawCmd::Fill(_))
    }

    #[inline]
    pub fn is_stroke(&self) -> bool {
        matches!(self, DrawCmd::Stroke(_))
    }
}
