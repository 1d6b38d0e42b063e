#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use site_core::constants::{FOLLOWER_OFFSET_PX, ROTOR_DEG_PER_FRAME};
use site_core::{CursorFollower, GlowGrid, PointerState, RepelParams, RepelSim};

mod cards;
mod controls;
mod dom;
mod events;
mod frame;
mod paint;
mod reveal;
mod style;

/// Everything init wires up. Dropping it tears the page logic down again:
/// listeners removed, frame loop cancelled, layout timer cleared, reveal
/// observer disconnected.
struct App {
    _bindings: Vec<events::EventBinding>,
    _frame: frame::FrameLoop,
    _layout: cards::LayoutTimer,
    _reveal: reveal::RevealObserver,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {e:?}"),
    }
    Ok(())
}

/// Tear down every listener, timer, and frame callback. Exposed for hosts
/// that remove the view without unloading the page.
#[wasm_bindgen]
pub fn dispose() {
    APP.with(|slot| slot.borrow_mut().take());
    log::info!("site-web disposed");
}

fn init() -> anyhow::Result<App> {
    let document = dom::document()?;

    let container: web::HtmlElement = dom::element_by_id(&document, "space-visual")?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "glow-canvas")?;
    let zero: web::HtmlElement = dom::element_by_id(&document, "big-zero")?;
    let one: web::HtmlElement = dom::element_by_id(&document, "big-one")?;
    let dot: web::HtmlElement = dom::element_by_id(&document, "cursor-dot")?;

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context threw: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;

    // Shared state: written by event handlers, read by the frame callback.
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let glow = Rc::new(RefCell::new(GlowGrid::new()));
    let sim = Rc::new(RefCell::new(RepelSim::new()));
    let params = Rc::new(RefCell::new(RepelParams::default()));
    let cursor_target = Rc::new(RefCell::new(Vec2::ZERO));
    let dpr = Rc::new(Cell::new(1.0_f64));

    dpr.set(dom::sync_canvas_backing_size(&canvas));

    let mut bindings = events::wire_pointer(&events::PointerWiring {
        container: container.clone(),
        pointer: pointer.clone(),
        glow: glow.clone(),
    });
    bindings.push(events::wire_cursor_target(&document, cursor_target.clone()));
    bindings.extend(controls::wire_sliders(&document, params.clone()));
    {
        let canvas = canvas.clone();
        let dpr = dpr.clone();
        bindings.push(events::wire_resize(&dom::window()?, move || {
            dpr.set(dom::sync_canvas_backing_size(&canvas));
        }));
    }

    let reveal = reveal::observe_reveals(&document)?;
    let layout = cards::start_layout_cycle(&document)?;

    let frame = {
        let pointer = pointer.clone();
        let glow = glow.clone();
        let sim = sim.clone();
        let params = params.clone();
        let cursor_target = cursor_target.clone();
        let dpr = dpr.clone();
        let mut follower = CursorFollower::default();
        let mut rotor_deg = 0.0_f32;

        frame::start_loop(move || {
            // Cursor dot eases toward the last mouse position.
            follower.step(*cursor_target.borrow());
            let p = follower.position();
            let css = dot.style();
            let _ = css.set_property("left", &format!("{:.1}px", p.x - FOLLOWER_OFFSET_PX));
            let _ = css.set_property("top", &format!("{:.1}px", p.y - FOLLOWER_OFFSET_PX));

            // Not mounted or collapsed yet: skip this frame, retry next.
            let rect = container.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }

            {
                let mut glow = glow.borrow_mut();
                glow.decay();
                paint::paint_glow(&ctx, &canvas, dpr.get(), &glow);
            }

            let pos = {
                let mut sim = sim.borrow_mut();
                sim.set_bounds(rect.width() as f32, rect.height() as f32);
                sim.step(&pointer.borrow(), &params.borrow());
                sim.position()
            };

            rotor_deg = (rotor_deg + ROTOR_DEG_PER_FRAME) % 360.0;
            let _ = zero
                .style()
                .set_property("transform", &style::translate_transform(pos.x, pos.y));
            let _ = one
                .style()
                .set_property("transform", &style::rotor_transform(pos.x, pos.y, rotor_deg));
        })
    };

    log::info!(
        "site-web wired: {} listeners, glow grid, repulsion sim, layout cycle",
        bindings.len()
    );

    Ok(App {
        _bindings: bindings,
        _frame: frame,
        _layout: layout,
        _reveal: reveal,
    })
}
