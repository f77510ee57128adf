//! Drawing-surface boundary shared by the visualizer and particle renderers.
//!
//! The core never talks to a canvas directly. It describes strokes, fills and
//! gradients in plain data and hands them to a [`Surface`], which the web
//! front-end implements on top of a 2D canvas context and tests implement as
//! an operation recorder.

use crate::core::error::{LandingError, Result};
use glam::DVec2;
use smallvec::SmallVec;
use std::fmt;

/// Straight (non-premultiplied) RGBA colour, channels in 0..=255, alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Ordered colour sequence from innermost (index 0) to outermost.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    colors: SmallVec<[Rgba; 4]>,
}

impl GradientSpec {
    pub fn new(colors: &[Rgba]) -> Result<Self> {
        if colors.len() < 2 {
            return Err(LandingError::GradientTooShort(colors.len()));
        }
        Ok(Self {
            colors: colors.iter().copied().collect(),
        })
    }

    /// Three-stop gradient; always valid.
    pub fn three(inner: Rgba, middle: Rgba, outer: Rgba) -> Self {
        Self {
            colors: smallvec::smallvec![inner, middle, outer],
        }
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Evenly spaced `(offset, colour)` stops, offsets `index / (n - 1)`.
    pub fn stops(&self) -> impl Iterator<Item = (f64, Rgba)> + '_ {
        let last = (self.colors.len() - 1) as f64;
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, c)| (i as f64 / last, *c))
    }
}

/// A concentric radial gradient between two radii around `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: SmallVec<[(f64, Rgba); 4]>,
}

impl RadialGradient {
    pub fn new(center: DVec2, inner_radius: f64, outer_radius: f64, spec: &GradientSpec) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops: spec.stops().collect(),
        }
    }
}

/// Everything a surface needs to stroke subsequent segments.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub gradient: RadialGradient,
    pub line_width: f64,
    /// Canvas `lineCap` keyword.
    pub line_cap: &'static str,
    pub glow_color: Rgba,
    pub glow_blur: f64,
}

/// Pixel surface the renderers draw into.
pub trait Surface {
    /// Current backing size in pixels `(width, height)`.
    fn size(&self) -> (f64, f64);
    /// Clear the whole surface to transparent.
    fn clear(&mut self);
    /// Apply a stroke style for the strokes that follow.
    fn set_stroke_style(&mut self, style: &StrokeStyle);
    /// Stroke one straight segment with the current stroke style.
    fn stroke_segment(&mut self, from: DVec2, to: DVec2);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
    fn set_pixel_dimensions(&mut self, width: u32, height: u32);
}
