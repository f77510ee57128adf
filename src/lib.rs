#![cfg(target_arch = "wasm32")]
use crate::core::{LandingConfig, RenderLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod canvas;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod particles;
mod player;
mod visualizer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-landing starting");

    if let Err(e) = init(LandingConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: LandingConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Particles run from page load, independent of audio
    let particles = Rc::new(RefCell::new(RenderLoop::new(particles::ParticleHost::new(
        &document,
        config.particle_color,
    )?)));
    frame::start_loop(particles.clone());

    let context: audio::SharedContext = Rc::new(RefCell::new(None));
    let controller = player::build_controller(&document, &config, context.clone())?;
    player::wire_buttons(&document, &controller)?;
    events::wire_volume_slider(&document, controller.clone(), config.initial_volume)?;

    // Visualizer loop starts once the splash gate has built the pipeline
    let visualizer = Rc::new(RefCell::new(RenderLoop::new(
        visualizer::VisualizerHost::new(&document, config, context)?,
    )));
    visualizer.borrow_mut().handler_mut().update_geometry();
    events::wire_splash(&document, controller, visualizer.clone())?;

    if let Err(e) = events::wire_ripples(&document) {
        log::warn!("[ripple] disabled: {:?}", e);
    }
    let cursor = events::wire_cursor(&document)?;
    events::wire_resize(particles, visualizer, cursor);
    Ok(())
}
