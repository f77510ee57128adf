use crate::constants::{RESIZE_DEBOUNCE_MS, RIPPLE_LIFETIME_MS, SPLASH_ENTER_DELAY_MS};
use crate::core::{cursor_enabled, ripple_box, Debouncer, RenderLoop};
use crate::dom;
use crate::frame;
use crate::overlay;
use crate::particles::ParticleHost;
use crate::player::Controller;
use crate::visualizer::VisualizerHost;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type VisualizerLoop = Rc<RefCell<RenderLoop<VisualizerHost>>>;
pub type ParticleLoop = Rc<RefCell<RenderLoop<ParticleHost>>>;

/// First click on the splash: reveal the page, start the background video,
/// then unmute, build the visualizer and start playback.
pub fn wire_splash(
    document: &web::Document,
    controller: Rc<RefCell<Controller>>,
    visualizer: VisualizerLoop,
) -> anyhow::Result<()> {
    static ENTERED: AtomicBool = AtomicBool::new(false);

    let splash: web::Element = dom::by_id(document, dom::SPLASH_ID)?;
    let video: web::HtmlMediaElement = dom::by_id(document, dom::VIDEO_ID)?;
    let audio_el: web::HtmlMediaElement = dom::by_id(document, dom::AUDIO_ID)?;
    let splash_target = splash.clone();

    dom::add_click_listener(&splash_target, move || {
        if ENTERED.swap(true, Ordering::SeqCst) || overlay::is_hidden(&splash) {
            return;
        }
        log::info!("[splash] entering site");
        overlay::hide(&splash);
        match video.play() {
            Ok(p) => spawn_local(async move {
                if let Err(e) = JsFuture::from(p).await {
                    log::warn!("[splash] video play failed: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[splash] video play failed: {:?}", e),
        }

        let controller = controller.clone();
        let visualizer = visualizer.clone();
        let audio_el = audio_el.clone();
        dom::set_timeout(SPLASH_ENTER_DELAY_MS, move || {
            controller.borrow_mut().unmute();
            let ready = visualizer.borrow_mut().handler_mut().setup(&audio_el);
            if ready {
                frame::start_loop(visualizer.clone());
            }
            controller.borrow_mut().toggle();
        });
    });
    Ok(())
}

pub fn wire_volume_slider(
    document: &web::Document,
    controller: Rc<RefCell<Controller>>,
    initial_volume: f64,
) -> anyhow::Result<()> {
    let slider: web::HtmlInputElement = dom::query_document(document, dom::VOLUME_SELECTOR)?;
    slider.set_value(&initial_volume.to_string());
    let slider_in = slider.clone();
    let closure = Closure::wrap(Box::new(move || {
        match slider_in.value().parse::<f64>() {
            Ok(v) => controller.borrow_mut().set_volume(v),
            Err(e) => log::warn!("[player] bad volume value {:?}: {}", slider_in.value(), e),
        }
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

/// Press ripples on social links; each ripple removes itself after a while.
pub fn wire_ripples(document: &web::Document) -> anyhow::Result<()> {
    let links = document
        .query_selector_all(dom::SOCIAL_LINKS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let btn = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (side, left, top) = ripple_box(
                btn.client_width() as f64,
                btn.client_height() as f64,
                DVec2::new(ev.offset_x() as f64, ev.offset_y() as f64),
            );
            let Ok(ripple) = doc
                .create_element("span")
                .map_err(|e| log::warn!("[ripple] create failed: {:?}", e))
                .and_then(|el| el.dyn_into::<web::HtmlElement>().map_err(|_| ()))
            else {
                return;
            };
            ripple.set_class_name("ripple");
            dom::set_style(&ripple, "width", &format!("{}px", side));
            dom::set_style(&ripple, "height", &format!("{}px", side));
            dom::set_style(&ripple, "left", &format!("{}px", left));
            dom::set_style(&ripple, "top", &format!("{}px", top));
            _ = btn.append_child(&ripple);
            dom::set_timeout(RIPPLE_LIFETIME_MS, move || ripple.remove());
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    Ok(())
}

/// Mirror the pointer into `--mouse-x`/`--mouse-y` on wide viewports.
/// Returns the flag the resize handler uses to re-evaluate the width gate.
pub fn wire_cursor(document: &web::Document) -> anyhow::Result<Rc<Cell<bool>>> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let enabled = Rc::new(Cell::new(cursor_enabled(dom::viewport_size().0)));
    let gate = enabled.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !gate.get() {
            return;
        }
        let style = body.style();
        _ = style.set_property("--mouse-x", &format!("{}px", ev.client_x()));
        _ = style.set_property("--mouse-y", &format!("{}px", ev.client_y()));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(enabled)
}

/// Trailing-edge debounced resize: particle pool, visualizer geometry and
/// cursor gate.
pub fn wire_resize(particles: ParticleLoop, visualizer: VisualizerLoop, cursor: Rc<Cell<bool>>) {
    let debounce = Rc::new(RefCell::new(Debouncer::new(RESIZE_DEBOUNCE_MS)));
    let closure = Closure::wrap(Box::new(move || {
        let ticket = debounce.borrow_mut().poke(instant::now());
        let debounce = debounce.clone();
        let particles = particles.clone();
        let visualizer = visualizer.clone();
        let cursor = cursor.clone();
        dom::set_timeout(RESIZE_DEBOUNCE_MS as i32, move || {
            if !debounce.borrow_mut().settle(ticket) {
                return;
            }
            let (w, _) = dom::viewport_size();
            log::info!("[resize] settled at width {}", w);
            particles.borrow_mut().handler_mut().resize();
            visualizer.borrow_mut().handler_mut().update_geometry();
            cursor.set(cursor_enabled(w));
        });
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
