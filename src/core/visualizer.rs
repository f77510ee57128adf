//! Audio-reactive ring visualizer.
//!
//! Each frame turns one amplitude snapshot into a ring of radiating strokes
//! around the avatar. Bar lengths are exponentially smoothed per bin and the
//! upper half of the spectrum is folded back onto the lower half so the ring
//! reads symmetric left/right.

use crate::constants::*;
use crate::core::config::VisualizerColors;
use crate::core::error::Result;
use crate::core::signal::{bin_count_for_fft, SignalSource};
use crate::core::surface::{RadialGradient, StrokeStyle, Surface};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Per-frame ring geometry derived from the surface size and avatar width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub center: DVec2,
    pub base_radius: f64,
    pub max_amplitude: f64,
}

impl RingGeometry {
    pub fn new(surface_size: (f64, f64), avatar_width: f64) -> Self {
        Self {
            center: DVec2::new(surface_size.0 / 2.0, surface_size.1 / 2.0),
            base_radius: avatar_width / 2.0 + RING_OFFSET_PX,
            max_amplitude: avatar_width * MAX_AMPLITUDE_RATIO,
        }
    }

    /// Point at `radius` from the centre along `angle`.
    #[inline]
    pub fn polar(&self, angle: f64, radius: f64) -> DVec2 {
        self.center + DVec2::new(angle.cos(), angle.sin()) * radius
    }
}

/// Source bin drawn at ring position `i`; the second half mirrors the first.
#[inline]
pub fn mirror_index(i: usize, bin_count: usize) -> usize {
    if 2 * i < bin_count {
        i
    } else {
        bin_count - i
    }
}

/// One smoothing step, kept inside the hull of `prev` and `target`.
#[inline]
pub fn smooth(prev: f64, target: f64) -> f64 {
    let v = prev * SMOOTHING_KEEP + target * SMOOTHING_GAIN;
    v.clamp(prev.min(target), prev.max(target))
}

/// Angle of ring position `i`: bin 0 at the top, proceeding clockwise.
#[inline]
pub fn bar_angle(i: usize, bin_count: usize) -> f64 {
    (i as f64 / bin_count as f64) * TAU - FRAC_PI_2
}

pub struct Visualizer {
    colors: VisualizerColors,
    snapshot: Vec<u8>,
    smoothed: Vec<f64>,
}

impl Visualizer {
    pub fn new(bin_count: usize, colors: VisualizerColors) -> Self {
        Self {
            colors,
            snapshot: vec![0; bin_count],
            smoothed: vec![0.0; bin_count],
        }
    }

    pub fn from_fft_size(fft_size: u32, colors: VisualizerColors) -> Result<Self> {
        Ok(Self::new(bin_count_for_fft(fft_size)?, colors))
    }

    pub fn bin_count(&self) -> usize {
        self.smoothed.len()
    }

    pub fn smoothed(&self) -> &[f64] {
        &self.smoothed
    }

    pub fn stroke_style(&self, geometry: &RingGeometry) -> StrokeStyle {
        StrokeStyle {
            gradient: RadialGradient::new(
                geometry.center,
                geometry.base_radius * GRADIENT_INNER_RATIO,
                geometry.base_radius + geometry.max_amplitude,
                &self.colors.gradient,
            ),
            line_width: BAR_LINE_WIDTH,
            line_cap: BAR_LINE_CAP,
            glow_color: self.colors.glow,
            glow_blur: GLOW_BLUR,
        }
    }

    /// Pull a snapshot from `source` and draw one frame.
    pub fn render<S, T>(&mut self, source: &mut S, surface: &mut T, avatar_width: f64)
    where
        S: SignalSource + ?Sized,
        T: Surface + ?Sized,
    {
        source.fill_snapshot(&mut self.snapshot);
        self.draw(surface, avatar_width);
    }

    /// Draw one frame from an externally supplied snapshot.
    pub fn render_snapshot<T>(&mut self, snapshot: &[u8], surface: &mut T, avatar_width: f64)
    where
        T: Surface + ?Sized,
    {
        let n = self.snapshot.len().min(snapshot.len());
        self.snapshot[..n].copy_from_slice(&snapshot[..n]);
        self.snapshot[n..].fill(0);
        self.draw(surface, avatar_width);
    }

    fn draw<T: Surface + ?Sized>(&mut self, surface: &mut T, avatar_width: f64) {
        surface.clear();
        let geometry = RingGeometry::new(surface.size(), avatar_width);
        surface.set_stroke_style(&self.stroke_style(&geometry));

        let bins = self.smoothed.len();
        for i in 0..bins {
            let amplitude = self.snapshot[mirror_index(i, bins)] as f64;
            let target = amplitude / AMPLITUDE_MAX * geometry.max_amplitude;
            let length = smooth(self.smoothed[i], target);
            self.smoothed[i] = length;

            if length < BAR_NOISE_FLOOR {
                continue;
            }
            let angle = bar_angle(i, bins);
            surface.stroke_segment(
                geometry.polar(angle, geometry.base_radius),
                geometry.polar(angle, geometry.base_radius + length),
            );
        }
    }
}
