use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// requestAnimationFrame loop that reschedules itself until dropped.
/// Dropping the handle cancels the pending frame and stops the loop.
pub struct FrameLoop {
    raf_id: Rc<Cell<i32>>,
    running: Rc<Cell<bool>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(mut frame: impl FnMut() + 'static) -> FrameLoop {
    let raf_id = Rc::new(Cell::new(0));
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    let running_for_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_for_tick.get() {
            return;
        }
        frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_for_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }

    FrameLoop {
        raf_id,
        running,
        _tick: tick,
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }
}
