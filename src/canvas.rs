use crate::core::{Rgba, StrokeStyle, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for Canvas2d {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        let g = &style.gradient;
        match self.ctx.create_radial_gradient(
            g.center.x,
            g.center.y,
            g.inner_radius.max(0.0),
            g.center.x,
            g.center.y,
            g.outer_radius.max(0.0),
        ) {
            Ok(gradient) => {
                for (offset, color) in &g.stops {
                    _ = gradient.add_color_stop(*offset as f32, &color.to_string());
                }
                self.ctx.set_stroke_style_canvas_gradient(&gradient);
            }
            Err(e) => log::error!("[canvas] gradient error: {:?}", e),
        }
        self.ctx.set_line_width(style.line_width);
        self.ctx.set_line_cap(style.line_cap);
        self.ctx.set_shadow_color(&style.glow_color.to_string());
        self.ctx.set_shadow_blur(style.glow_blur);
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn set_pixel_dimensions(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
