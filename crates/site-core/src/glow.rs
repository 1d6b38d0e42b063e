//! Decaying heat-map of recent pointer movement over a tiled grid.
//!
//! Cells brighten when the pointer passes near them and fade a little every
//! rendered frame. The map only ever holds cells whose intensity is still
//! visible; everything below [`GLOW_EPSILON`] is evicted, so the active set
//! stays bounded no matter how long the page idles.

use fnv::FnvHashMap;
use glam::Vec2;

use crate::constants::{GLOW_CELL_PX, GLOW_DECAY, GLOW_EPSILON, GLOW_RADIUS_PX};

/// Active glow cells keyed by (column, row); intensity in `[0, 1]`.
#[derive(Default)]
pub struct GlowGrid {
    cells: FnvHashMap<(i32, i32), f32>,
}

impl GlowGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brighten every cell whose center lies within the glow radius of
    /// `at` (container-relative, top-left origin, CSS px). Brightening is
    /// monotonic: a cell keeps the maximum of its current and new
    /// intensity, so the result is independent of event frequency.
    pub fn touch(&mut self, at: Vec2) {
        let min_col = ((at.x - GLOW_RADIUS_PX) / GLOW_CELL_PX).floor() as i32;
        let max_col = ((at.x + GLOW_RADIUS_PX) / GLOW_CELL_PX).floor() as i32;
        let min_row = ((at.y - GLOW_RADIUS_PX) / GLOW_CELL_PX).floor() as i32;
        let max_row = ((at.y + GLOW_RADIUS_PX) / GLOW_CELL_PX).floor() as i32;

        for col in min_col..=max_col {
            for row in min_row..=max_row {
                let center = Vec2::new(
                    (col as f32 + 0.5) * GLOW_CELL_PX,
                    (row as f32 + 0.5) * GLOW_CELL_PX,
                );
                let dist = center.distance(at);
                if dist < GLOW_RADIUS_PX {
                    let intensity = 1.0 - dist / GLOW_RADIUS_PX;
                    let slot = self.cells.entry((col, row)).or_insert(0.0);
                    *slot = slot.max(intensity);
                }
            }
        }
    }

    /// Fade all cells by one frame and evict the ones that fell below the
    /// visibility threshold.
    pub fn decay(&mut self) {
        self.cells.retain(|_, v| {
            *v *= GLOW_DECAY;
            *v >= GLOW_EPSILON
        });
    }

    /// Read-only snapshot for the painter.
    pub fn cells(&self) -> impl Iterator<Item = ((i32, i32), f32)> + '_ {
        self.cells.iter().map(|(&k, &v)| (k, v))
    }

    pub fn intensity(&self, col: i32, row: i32) -> Option<f32> {
        self.cells.get(&(col, row)).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
