use web_sys as web;

use site_core::constants::GLOW_CELL_PX;
use site_core::GlowGrid;

use crate::style;

/// Clear and repaint the glow overlay from the current active-cell set.
/// Paints in CSS pixels; `dpr` maps them onto the canvas backing store.
pub fn paint_glow(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    dpr: f64,
    grid: &GlowGrid,
) {
    let width = canvas.width() as f64 / dpr;
    let height = canvas.height() as f64 / dpr;
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, width, height);

    let cell = GLOW_CELL_PX as f64;
    for ((col, row), intensity) in grid.cells() {
        ctx.set_fill_style_str(&style::glow_fill(intensity));
        // One-pixel gutter keeps the underlying grid lines visible.
        ctx.fill_rect(col as f64 * cell, row as f64 * cell, cell - 1.0, cell - 1.0);
    }
}
