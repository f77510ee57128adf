use crate::canvas::Canvas2d;
use crate::core::{FrameHandler, ParticleField, Rgba, Surface};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Full-viewport snowfall canvas.
pub struct ParticleHost {
    surface: Canvas2d,
    field: ParticleField<StdRng>,
}

impl ParticleHost {
    pub fn new(document: &web::Document, color: Rgba) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::by_id(document, dom::PARTICLE_CANVAS_ID)?;
        let mut surface = Canvas2d::new(canvas)?;
        let (w, h) = dom::viewport_size();
        surface.set_pixel_dimensions(w as u32, h as u32);
        let field = ParticleField::new(w, h, color, StdRng::from_entropy());
        log::info!("[particles] pool={} viewport={}x{}", field.particles().len(), w, h);
        Ok(Self { surface, field })
    }

    /// Match the canvas to the viewport and respawn the pool.
    pub fn resize(&mut self) {
        let (w, h) = dom::viewport_size();
        self.surface.set_pixel_dimensions(w as u32, h as u32);
        self.field.rebuild(w, h);
        log::info!(
            "[particles] rebuilt pool={} viewport={}x{}",
            self.field.particles().len(),
            w,
            h
        );
    }
}

impl FrameHandler for ParticleHost {
    fn frame(&mut self, _now_ms: f64) {
        self.field.render(&mut self.surface);
    }
}
