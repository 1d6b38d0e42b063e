//! Range-slider bindings for the five physics parameters. Slider moves
//! mutate the shared [`RepelParams`] in place; the simulation keeps its
//! position and velocity.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::RepelParams;

use crate::events::EventBinding;

const SLIDERS: [(&str, fn(&mut RepelParams, f32)); 5] = [
    ("ctl-spring", |p, v| p.spring = v),
    ("ctl-damping", |p, v| p.damping = v),
    ("ctl-strength", |p, v| p.strength = v),
    ("ctl-radius", |p, v| p.radius = v),
    ("ctl-spread", |p, v| p.spread = v),
];

pub fn wire_sliders(
    document: &web::Document,
    params: Rc<RefCell<RepelParams>>,
) -> Vec<EventBinding> {
    SLIDERS
        .iter()
        .filter_map(|&(id, apply)| wire_slider(document, params.clone(), id, apply))
        .collect()
}

fn wire_slider(
    document: &web::Document,
    params: Rc<RefCell<RepelParams>>,
    id: &'static str,
    apply: fn(&mut RepelParams, f32),
) -> Option<EventBinding> {
    let input: web::HtmlInputElement = match document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into().ok())
    {
        Some(input) => input,
        None => {
            log::warn!("slider #{id} not found; parameter stays at its default");
            return None;
        }
    };

    let source = input.clone();
    Some(EventBinding::new(&input, "input", move |_ev| {
        if let Ok(value) = source.value().parse::<f32>() {
            apply(&mut params.borrow_mut(), value);
        }
    }))
}
