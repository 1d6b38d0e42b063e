use glam::Vec2;

use crate::constants::FOLLOWER_EASE;

/// Eased pursuit of the mouse for the decorative cursor dot. Covers a
/// fixed fraction of the remaining distance each frame, so it trails fast
/// moves and settles without overshoot.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    pos: Vec2,
}

impl CursorFollower {
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn step(&mut self, target: Vec2) {
        self.pos += (target - self.pos) * FOLLOWER_EASE;
    }
}
