// Host-side tests for the ring visualizer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::*;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Style(StrokeStyle),
    Segment(DVec2, DVec2),
    Circle(DVec2, f64, Rgba),
    Dimensions(u32, u32),
}

struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    fn segments(&self) -> Vec<(DVec2, DVec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Segment(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        self.ops.push(Op::Style(style.clone()));
    }
    fn stroke_segment(&mut self, from: DVec2, to: DVec2) {
        self.ops.push(Op::Segment(from, to));
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.ops.push(Op::Circle(center, radius, color));
    }
    fn set_pixel_dimensions(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
        self.ops.push(Op::Dimensions(width, height));
    }
}

struct FixedSource {
    data: Vec<u8>,
    reads: usize,
}

impl SignalSource for FixedSource {
    fn fill_snapshot(&mut self, out: &mut [u8]) {
        self.reads += 1;
        let n = out.len().min(self.data.len());
        out[..n].copy_from_slice(&self.data[..n]);
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn approx_v(a: DVec2, b: DVec2) -> bool {
    (a - b).length() < 1e-9
}

// 240x240 surface, 100px avatar: base radius 70, max amplitude 40
fn ring() -> (Visualizer, RecordingSurface) {
    let v = Visualizer::from_fft_size(128, VisualizerColors::default()).expect("valid fft");
    (v, RecordingSurface::new(240.0, 240.0))
}

#[test]
fn mirror_folds_upper_half_onto_lower_half() {
    assert_eq!(mirror_index(50, 64), 14);
    assert_eq!(mirror_index(0, 64), 0);
    assert_eq!(mirror_index(31, 64), 31);
    assert_eq!(mirror_index(32, 64), 32);
    assert_eq!(mirror_index(63, 64), 1);
    for i in 0..64 {
        assert!(mirror_index(i, 64) <= 32);
    }
}

#[test]
fn smoothing_is_convex_blend_within_hull() {
    let samples = [0.0, 0.5, 1.0, 7.25, 39.9, 40.0];
    for &prev in &samples {
        for &target in &samples {
            let s = smooth(prev, target);
            let expected = 0.85 * prev + 0.15 * target;
            assert!((s - expected).abs() < 1e-12, "prev={prev} target={target}");
            assert!(s >= prev.min(target) && s <= prev.max(target));
        }
    }
}

#[test]
fn bar_angles_start_at_top_and_run_clockwise() {
    assert!(approx(bar_angle(0, 64), -FRAC_PI_2));
    assert!(approx(bar_angle(16, 64), 0.0));
    assert!(approx(bar_angle(32, 64), FRAC_PI_2));
}

#[test]
fn fft_size_must_be_a_supported_power_of_two() {
    assert_eq!(bin_count_for_fft(128), Ok(64));
    assert_eq!(bin_count_for_fft(32), Ok(16));
    assert_eq!(bin_count_for_fft(100), Err(LandingError::InvalidFftSize(100)));
    assert_eq!(bin_count_for_fft(16), Err(LandingError::InvalidFftSize(16)));
    assert!(Visualizer::from_fft_size(65536, VisualizerColors::default()).is_err());
}

#[test]
fn fresh_visualizer_state_is_zeroed() {
    let (v, _) = ring();
    assert_eq!(v.bin_count(), 64);
    assert!(v.smoothed().iter().all(|&s| s == 0.0));
}

#[test]
fn geometry_follows_surface_and_avatar() {
    let g = RingGeometry::new((240.0, 240.0), 100.0);
    assert!(approx_v(g.center, DVec2::new(120.0, 120.0)));
    assert!(approx(g.base_radius, 70.0));
    assert!(approx(g.max_amplitude, 40.0));
}

#[test]
fn frame_clears_then_styles_then_strokes() {
    let (mut v, mut surface) = ring();
    v.render_snapshot(&[255; 64], &mut surface, 100.0);

    assert_eq!(surface.ops[0], Op::Clear);
    let Op::Style(style) = &surface.ops[1] else {
        panic!("expected stroke style second, got {:?}", surface.ops[1]);
    };
    assert!(approx(style.gradient.inner_radius, 56.0));
    assert!(approx(style.gradient.outer_radius, 110.0));
    assert!(approx_v(style.gradient.center, DVec2::new(120.0, 120.0)));
    let offsets: Vec<f64> = style.gradient.stops.iter().map(|(o, _)| *o).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    assert_eq!(style.gradient.stops[0].1, Rgba::new(5, 5, 5, 1.0));
    assert_eq!(style.line_width, 4.0);
    assert_eq!(style.glow_blur, 12.0);
    assert_eq!(style.line_cap, "round");
    assert_eq!(style.glow_color, Rgba::WHITE);
}

#[test]
fn full_scale_snapshot_draws_every_bar_after_one_frame() {
    let (mut v, mut surface) = ring();
    v.render_snapshot(&[255; 64], &mut surface, 100.0);

    // target 40, first step 0.15 * 40 = 6
    assert!(v.smoothed().iter().all(|&s| approx(s, 6.0)));
    let segs = surface.segments();
    assert_eq!(segs.len(), 64);
    let (from, to) = segs[0];
    assert!(approx_v(from, DVec2::new(120.0, 50.0)));
    assert!(approx_v(to, DVec2::new(120.0, 44.0)));
    // a quarter turn later the bar points right
    let (from, to) = segs[16];
    assert!(approx_v(from, DVec2::new(190.0, 120.0)));
    assert!(approx_v(to, DVec2::new(196.0, 120.0)));
}

#[test]
fn bars_below_noise_floor_are_skipped_but_state_still_updates() {
    let (mut v, mut surface) = ring();
    // target = 10 / 255 * 40 ~ 1.57, first step ~ 0.235
    v.render_snapshot(&[10; 64], &mut surface, 100.0);
    assert!(surface.segments().is_empty());
    assert_eq!(surface.ops.len(), 2);
    let expected = 0.15 * (10.0 / 255.0 * 40.0);
    assert!(v.smoothed().iter().all(|&s| approx(s, expected)));
}

#[test]
fn smoothing_persists_across_frames_and_converges() {
    let (mut v, mut surface) = ring();
    v.render_snapshot(&[255; 64], &mut surface, 100.0);
    v.render_snapshot(&[255; 64], &mut surface, 100.0);
    assert!(approx(v.smoothed()[0], 6.0 * 0.85 + 6.0));
    for _ in 0..200 {
        v.render_snapshot(&[255; 64], &mut surface, 100.0);
    }
    assert!((v.smoothed()[0] - 40.0).abs() < 1e-6);
    // silence decays back towards zero
    for _ in 0..200 {
        v.render_snapshot(&[0; 64], &mut surface, 100.0);
    }
    assert!(v.smoothed().iter().all(|&s| s < 1e-6));
}

#[test]
fn ring_is_left_right_symmetric() {
    let (mut v, mut surface) = ring();
    let snapshot: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
    for _ in 0..5 {
        v.render_snapshot(&snapshot, &mut surface, 100.0);
    }
    let s = v.smoothed();
    for i in 1..32 {
        assert!(approx(s[i], s[64 - i]), "bin {i} vs {}", 64 - i);
    }
}

#[test]
fn render_pulls_one_snapshot_per_frame() {
    let (mut v, mut surface) = ring();
    let mut source = FixedSource {
        data: vec![255; 64],
        reads: 0,
    };
    v.render(&mut source, &mut surface, 100.0);
    v.render(&mut source, &mut surface, 100.0);
    assert_eq!(source.reads, 2);
    assert_eq!(surface.segments().len(), 128);
}

#[test]
fn short_snapshot_is_zero_padded() {
    let (mut v, mut surface) = ring();
    v.render_snapshot(&[255; 8], &mut surface, 100.0);
    assert!(approx(v.smoothed()[0], 6.0));
    assert!(approx(v.smoothed()[20], 0.0));
}

#[test]
fn gradient_requires_two_colors() {
    assert_eq!(
        GradientSpec::new(&[Rgba::WHITE]),
        Err(LandingError::GradientTooShort(1))
    );
    let g = GradientSpec::new(&[Rgba::WHITE, Rgba::new(0, 0, 0, 0.5)]).expect("two colours");
    let stops: Vec<(f64, Rgba)> = g.stops().collect();
    assert_eq!(stops[0].0, 0.0);
    assert_eq!(stops[1].0, 1.0);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new(5, 5, 5, 1.0).to_string(), "rgba(5, 5, 5, 1)");
    assert_eq!(Rgba::WHITE.with_alpha(0.25).to_string(), "rgba(255, 255, 255, 0.25)");
}
