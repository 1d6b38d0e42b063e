//! Periodic reflow of the card collection through the precomputed layout
//! table. Cards are absolutely positioned with percentage placements so a
//! CSS transition carries each card smoothly to its next cell.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::constants::LAYOUT_PERIOD_MS;
use site_core::{CellRect, LayoutCycle};

use crate::style;

/// Interval timer that clears itself when dropped.
pub struct LayoutTimer {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Drop for LayoutTimer {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// Collect the card nodes, apply the first layout, then advance the cycle
/// on a fixed period.
pub fn start_layout_cycle(document: &web::Document) -> anyhow::Result<LayoutTimer> {
    let nodes = document
        .query_selector_all(".what-card")
        .map_err(|e| anyhow!("query .what-card: {e:?}"))?;
    let mut cards = Vec::new();
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                cards.push(el);
            }
        }
    }
    if cards.is_empty() {
        return Err(anyhow!("no .what-card elements"));
    }

    let cycle = Rc::new(RefCell::new(LayoutCycle::new()));
    apply_layout(&cards, &cycle.borrow().current());

    let tick = {
        let cards = cards.clone();
        let cycle = cycle.clone();
        Closure::wrap(Box::new(move || {
            cycle.borrow_mut().advance();
            apply_layout(&cards, &cycle.borrow().current());
        }) as Box<dyn FnMut()>)
    };

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            LAYOUT_PERIOD_MS,
        )
        .map_err(|e| anyhow!("set_interval: {e:?}"))?;

    Ok(LayoutTimer { id, _tick: tick })
}

fn apply_layout(cards: &[web::HtmlElement], cells: &[CellRect; 6]) {
    for (card, cell) in cards.iter().zip(cells.iter()) {
        let [left, top, width, height] = style::card_placement(cell);
        let css = card.style();
        let _ = css.set_property("left", &left);
        let _ = css.set_property("top", &top);
        let _ = css.set_property("width", &width);
        let _ = css.set_property("height", &height);

        let classes = card.class_list();
        if cell.is_compact() {
            let _ = classes.add_1("compact");
        } else {
            let _ = classes.remove_1("compact");
        }
    }
}
