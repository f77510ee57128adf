use crate::core::{FrameHandler, RenderLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Start `render_loop` and drive it from `requestAnimationFrame` until it is
/// stopped. Calling this on an already running loop does nothing.
pub fn start_loop<H: FrameHandler + 'static>(render_loop: Rc<RefCell<RenderLoop<H>>>) {
    if !render_loop.borrow_mut().start() {
        return;
    }
    let epoch = render_loop.borrow().epoch();
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let mut rl = render_loop.borrow_mut();
        // a stop/start since this chain began hands the loop to a newer chain
        if rl.epoch() == epoch && rl.tick(now_ms) {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}
