use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Matches the fraction of a section that must scroll into view before it
// fades in.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Scroll-reveal wiring: one IntersectionObserver over every `.reveal`
/// element, adding the `visible` class on first intersection. Disconnects
/// on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_reveals(document: &web::Document) -> anyhow::Result<RevealObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("visible");
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("IntersectionObserver: {e:?}"))?;

    let nodes = document
        .query_selector_all(".reveal")
        .map_err(|e| anyhow!("query .reveal: {e:?}"))?;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<web::Element>() {
                observer.observe(&el);
            }
        }
    }

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}
