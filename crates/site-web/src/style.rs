//! Pure string builders for the styles the frame loop writes. Kept free of
//! `web_sys` so they compile and test on the host.

use site_core::constants::{GRID_COLS, GRID_ROWS};
use site_core::CellRect;

// Accent color of the glow overlay; alpha scales with cell intensity.
const GLOW_MAX_ALPHA: f32 = 0.35;

pub fn translate_transform(x: f32, y: f32) -> String {
    format!("translate3d({x:.1}px, {y:.1}px, 0)")
}

pub fn rotor_transform(x: f32, y: f32, angle_deg: f32) -> String {
    format!("translate3d({x:.1}px, {y:.1}px, 0) rotate({angle_deg:.1}deg)")
}

pub fn glow_fill(intensity: f32) -> String {
    let alpha = intensity.clamp(0.0, 1.0) * GLOW_MAX_ALPHA;
    format!("rgba(255, 107, 53, {alpha:.3})")
}

/// Percentage placement (left, top, width, height) for one card cell.
pub fn card_placement(cell: &CellRect) -> [String; 4] {
    let pct = |n: u32, d: u32| format!("{:.4}%", n as f32 / d as f32 * 100.0);
    [
        pct(cell.col, GRID_COLS),
        pct(cell.row, GRID_ROWS),
        pct(cell.w, GRID_COLS),
        pct(cell.h, GRID_ROWS),
    ]
}
