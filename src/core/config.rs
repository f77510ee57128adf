//! Structured page configuration.
//!
//! `LandingConfig::default()` describes the page as shipped; a caller can
//! override individual fields before handing it to the front-end.

use crate::constants::{FFT_SIZE, INITIAL_VOLUME};
use crate::core::playback::Track;
use crate::core::surface::{GradientSpec, Rgba};

/// Colours of the ring visualizer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerColors {
    pub glow: Rgba,
    pub gradient: GradientSpec,
}

impl Default for VisualizerColors {
    fn default() -> Self {
        Self {
            glow: Rgba::WHITE,
            gradient: GradientSpec::three(Rgba::new(5, 5, 5, 1.0), Rgba::WHITE, Rgba::WHITE),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LandingConfig {
    pub fft_size: u32,
    pub colors: VisualizerColors,
    pub particle_color: Rgba,
    pub initial_volume: f64,
    pub tracks: Vec<Track>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            fft_size: FFT_SIZE,
            colors: VisualizerColors::default(),
            particle_color: Rgba::WHITE,
            initial_volume: INITIAL_VOLUME,
            tracks: default_tracks(),
        }
    }
}

pub fn default_tracks() -> Vec<Track> {
    vec![
        Track::new("Headlock", "Imogen Heap", "headlock.mp3", "headlock.png"),
        Track::new("Government Hooker", "Lady Gaga", "government.mp3", "government.jpg"),
        Track::new("CtrlAltDelete", "BONES", "ctrlaltdel.mp3", "ctrlaltdel.jpg"),
    ]
}
