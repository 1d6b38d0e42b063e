use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub fn document() -> anyhow::Result<web::Document> {
    window()?.document().ok_or_else(|| anyhow!("no document"))
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("#{id} has an unexpected element type"))
}

/// Keep the canvas backing store at CSS size × devicePixelRatio so the
/// overlay stays sharp on high-dpi screens. Returns the ratio for the
/// painter's transform.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    match web::window() {
        Some(w) => {
            let dpr = w.device_pixel_ratio();
            let rect = canvas.get_bounding_client_rect();
            canvas.set_width(((rect.width() * dpr) as u32).max(1));
            canvas.set_height(((rect.height() * dpr) as u32).max(1));
            dpr
        }
        None => 1.0,
    }
}
