use crate::constants::*;
use crate::core::surface::{Rgba, Surface};
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
}

// Uniform sample in [lo, hi); degenerate ranges collapse to `lo`.
#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

impl Particle {
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            position: DVec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
            size: uniform(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            speed: uniform(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
            opacity: uniform(rng, PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
        }
    }

    /// Fall by `speed`; once fully below the bottom edge, re-enter above the
    /// top edge at a fresh column.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) {
        self.position.y += self.speed;
        if self.position.y > height + self.size {
            self.position.y = -self.size;
            self.position.x = uniform(rng, 0.0, width);
        }
    }
}

#[inline]
pub fn pool_size_for(viewport_width: f64) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        PARTICLES_NARROW
    } else {
        PARTICLES_WIDE
    }
}

/// Fixed-size pool of falling dots covering the viewport.
pub struct ParticleField<R> {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    color: Rgba,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f64, height: f64, color: Rgba, rng: R) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            color,
            rng,
        };
        field.rebuild(width, height);
        field
    }

    /// Discard the pool and spawn a fresh one sized for the new viewport.
    pub fn rebuild(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let n = pool_size_for(width);
        let rng = &mut self.rng;
        self.particles = (0..n).map(|_| Particle::spawn(rng, width, height)).collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(&mut self.rng, w, h);
        }
    }

    pub fn draw<T: Surface + ?Sized>(&self, surface: &mut T) {
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, self.color.with_alpha(p.opacity));
        }
    }

    /// One full frame: clear, advance every particle, redraw the pool.
    pub fn render<T: Surface + ?Sized>(&mut self, surface: &mut T) {
        surface.clear();
        self.step();
        self.draw(surface);
    }
}
