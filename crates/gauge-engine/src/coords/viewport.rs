use super::Rect;

/// Drawable area in logical pixels.
///
/// Renderers upload it as a uniform and convert logical positions to NDC in
/// the vertex shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// The whole viewport as a rectangle at the origin.
    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    /// Logical-pixel position to normalized device coordinates (+Y up).
    #[inline]
    pub fn to_ndc(self, x: f64, y: f64) -> [f32; 2] {
        let w = self.width.max(1.0) as f64;
        let h = self.height.max(1.0) as f64;
        [(x / w * 2.0 - 1.0) as f32, (1.0 - y / h * 2.0) as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.to_ndc(0.0, 0.0), [-1.0, 1.0]);
        assert_eq!(vp.to_ndc(200.0, 100.0), [1.0, -1.0]);
        assert_eq!(vp.to_ndc(100.0, 50.0), [0.0, 0.0]);
    }

    #[test]
    fn rect_covers_viewport() {
        let r = Viewport::new(64.0, 32.0).rect();
        assert_eq!(r, Rect::new(0.0, 0.0, 64.0, 32.0));
        assert!(!Viewport::new(0.0, 10.0).is_valid());
    }
}
