use glam::Vec2;

/// Sentinel far outside any container, used while the pointer is away.
pub const OFFSCREEN: Vec2 = Vec2::new(-10_000.0, -10_000.0);

/// Last known pointer position, written by move handlers and read by the
/// frame callback. Coordinates are container-relative with the origin at
/// the container center (matching the simulated glyph's frame).
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub inside: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: OFFSCREEN,
            inside: false,
        }
    }
}

impl PointerState {
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.inside = true;
    }

    /// Pointer left the interactive region (or the touch ended).
    pub fn leave(&mut self) {
        self.pos = OFFSCREEN;
        self.inside = false;
    }
}
