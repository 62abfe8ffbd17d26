use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Paint order is insertion order: later commands cover earlier ones, which
/// is how mesh members express z-order.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so a warmed list does not allocate per frame
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Returns commands in paint order (back-to-front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().filter(|c| c.is_fill())
    }

    pub fn strokes(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().filter(|c| c.is_stroke())
    }
}
