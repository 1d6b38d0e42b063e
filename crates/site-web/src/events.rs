//! Event listener wiring for the interactive visual.
//!
//! Every listener the site installs is held in an [`EventBinding`] guard,
//! so dropping the app removes exactly what init added and nothing keeps
//! firing against a detached view.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::{GlowGrid, PointerState};

/// An event listener that deregisters itself when dropped.
pub struct EventBinding {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventBinding {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct PointerWiring {
    pub container: web::HtmlElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub glow: Rc<RefCell<GlowGrid>>,
}

pub fn wire_pointer(w: &PointerWiring) -> Vec<EventBinding> {
    vec![
        wire_pointer_move(w),
        wire_pointer_leave(w, "pointerleave"),
        wire_pointer_leave(w, "pointercancel"),
        wire_touch_move(w),
        wire_pointer_leave(w, "touchend"),
    ]
}

/// Route a container-relative position into the shared state: the glow
/// grid samples it in top-left coordinates, the simulation in
/// center-origin coordinates.
fn track(w: &PointerWiring, client_x: f32, client_y: f32) {
    let rect = w.container.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let local = Vec2::new(
        client_x - rect.left() as f32,
        client_y - rect.top() as f32,
    );
    w.glow.borrow_mut().touch(local);
    let center = Vec2::new(rect.width() as f32, rect.height() as f32) * 0.5;
    w.pointer.borrow_mut().move_to(local - center);
}

fn wire_pointer_move(w: &PointerWiring) -> EventBinding {
    let w = w.clone();
    let target = w.container.clone();
    EventBinding::new(&target, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            track(&w, ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

fn wire_touch_move(w: &PointerWiring) -> EventBinding {
    let w = w.clone();
    let target = w.container.clone();
    EventBinding::new(&target, "touchmove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
            if let Some(touch) = ev.touches().item(0) {
                track(&w, touch.client_x() as f32, touch.client_y() as f32);
            }
        }
    })
}

fn wire_pointer_leave(w: &PointerWiring, event: &'static str) -> EventBinding {
    let pointer = w.pointer.clone();
    EventBinding::new(&w.container, event, move |_ev| {
        pointer.borrow_mut().leave();
    })
}

/// Document-level mouse tracking for the cursor-follower dot (viewport
/// coordinates; the frame loop eases toward this).
pub fn wire_cursor_target(
    document: &web::Document,
    target: Rc<RefCell<Vec2>>,
) -> EventBinding {
    EventBinding::new(document.as_ref(), "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            *target.borrow_mut() = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

pub fn wire_resize(window: &web::Window, mut handler: impl FnMut() + 'static) -> EventBinding {
    EventBinding::new(window.as_ref(), "resize", move |_ev| handler())
}
