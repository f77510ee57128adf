// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_weights_form_a_convex_combination() {
    assert!(SMOOTHING_KEEP > 0.0 && SMOOTHING_KEEP < 1.0);
    assert!(SMOOTHING_GAIN > 0.0 && SMOOTHING_GAIN < 1.0);
    assert!((SMOOTHING_KEEP + SMOOTHING_GAIN - 1.0).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fft_size_is_a_valid_power_of_two() {
    assert!(FFT_SIZE.is_power_of_two());
    assert!(FFT_SIZE >= FFT_SIZE_MIN && FFT_SIZE <= FFT_SIZE_MAX);
    assert_eq!(FFT_SIZE / 2, 64);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
    assert!(PARTICLE_SPEED_MIN < PARTICLE_SPEED_MAX);
    assert!(PARTICLE_OPACITY_MIN < PARTICLE_OPACITY_MAX);
    assert!(PARTICLE_OPACITY_MIN >= 0.0 && PARTICLE_OPACITY_MAX <= 1.0);
    assert!(PARTICLES_NARROW < PARTICLES_WIDE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_fits_inside_visualizer_canvas() {
    // outermost bar tip relative to avatar width must stay inside half the canvas
    let avatar = 100.0;
    let tip = avatar / 2.0 + RING_OFFSET_PX + avatar * MAX_AMPLITUDE_RATIO;
    assert!(tip < avatar * SURFACE_SCALE / 2.0);
    assert!(GRADIENT_INNER_RATIO > 0.0 && GRADIENT_INNER_RATIO < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(RESIZE_DEBOUNCE_MS > 0.0);
    assert!(SPLASH_ENTER_DELAY_MS > 0);
    assert!(RIPPLE_LIFETIME_MS > 0);
    assert!(INITIAL_VOLUME > 0.0 && INITIAL_VOLUME <= 1.0);
}
