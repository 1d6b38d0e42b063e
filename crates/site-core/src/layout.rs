//! Precomputed placements for the six-card grid.
//!
//! Each layout splits an 18×9 grid into two rows of three cells. The table
//! is data, not generated geometry: the split positions were hand-tuned for
//! visual rhythm. Every entry tiles the grid exactly, which
//! `layout_tests.rs` verifies for the whole table.

use crate::constants::{COMPACT_AREA_MAX, GRID_COLS, GRID_ROWS};

/// One arrangement: where the row splits, and where each row's two column
/// splits fall. All values in grid units.
#[derive(Clone, Copy, Debug)]
pub struct LayoutSpec {
    pub row_split: u32,
    pub top_splits: [u32; 2],
    pub bottom_splits: [u32; 2],
}

pub const LAYOUTS: [LayoutSpec; 12] = [
    LayoutSpec { row_split: 5, top_splits: [6, 12], bottom_splits: [4, 13] },
    LayoutSpec { row_split: 4, top_splits: [9, 13], bottom_splits: [6, 12] },
    LayoutSpec { row_split: 6, top_splits: [3, 9], bottom_splits: [9, 14] },
    LayoutSpec { row_split: 3, top_splits: [5, 11], bottom_splits: [7, 12] },
    LayoutSpec { row_split: 5, top_splits: [4, 9], bottom_splits: [10, 14] },
    LayoutSpec { row_split: 6, top_splits: [8, 13], bottom_splits: [5, 9] },
    LayoutSpec { row_split: 4, top_splits: [6, 10], bottom_splits: [3, 12] },
    LayoutSpec { row_split: 5, top_splits: [11, 14], bottom_splits: [6, 11] },
    LayoutSpec { row_split: 3, top_splits: [4, 12], bottom_splits: [5, 14] },
    LayoutSpec { row_split: 6, top_splits: [5, 12], bottom_splits: [8, 12] },
    LayoutSpec { row_split: 4, top_splits: [7, 14], bottom_splits: [4, 10] },
    LayoutSpec { row_split: 5, top_splits: [3, 8], bottom_splits: [11, 15] },
];

/// One card's placement in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u32,
    pub row: u32,
    pub w: u32,
    pub h: u32,
}

impl CellRect {
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Small placements switch the card to its dense rendering.
    pub fn is_compact(&self) -> bool {
        self.area() <= COMPACT_AREA_MAX
    }
}

/// Expand a layout into its six placements: three cells across the top
/// row, three across the bottom.
pub fn expand(spec: &LayoutSpec) -> [CellRect; 6] {
    let top_h = spec.row_split;
    let bottom_h = GRID_ROWS - spec.row_split;
    let [a, b] = spec.top_splits;
    let [c, d] = spec.bottom_splits;
    [
        CellRect { col: 0, row: 0, w: a, h: top_h },
        CellRect { col: a, row: 0, w: b - a, h: top_h },
        CellRect { col: b, row: 0, w: GRID_COLS - b, h: top_h },
        CellRect { col: 0, row: top_h, w: c, h: bottom_h },
        CellRect { col: c, row: top_h, w: d - c, h: bottom_h },
        CellRect { col: d, row: top_h, w: GRID_COLS - d, h: bottom_h },
    ]
}

/// Index into [`LAYOUTS`], advanced by the page's interval timer. Always
/// moves forward; wraps modulo the table length.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutCycle {
    index: usize,
}

impl LayoutCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> [CellRect; 6] {
        expand(&LAYOUTS[self.index])
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % LAYOUTS.len();
        self.index
    }
}
