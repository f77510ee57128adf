// Visual, audio and timing tuning constants for the landing page.

// Signal analysis
pub const FFT_SIZE: u32 = 128; // 64 amplitude bins
pub const FFT_SIZE_MIN: u32 = 32;
pub const FFT_SIZE_MAX: u32 = 32768;
pub const AMPLITUDE_MAX: f64 = 255.0;

// Per-bin exponential smoothing: new = KEEP * old + GAIN * target
pub const SMOOTHING_KEEP: f64 = 0.85;
pub const SMOOTHING_GAIN: f64 = 0.15;
pub const BAR_NOISE_FLOOR: f64 = 1.0; // smoothed lengths below this are not drawn

// Ring geometry, relative to the avatar width
pub const RING_OFFSET_PX: f64 = 20.0; // gap between avatar edge and bar roots
pub const MAX_AMPLITUDE_RATIO: f64 = 0.40;
pub const GRADIENT_INNER_RATIO: f64 = 0.8; // gradient starts inside the bar roots
pub const SURFACE_SCALE: f64 = 2.4; // visualizer canvas side / avatar width

// Stroke style
pub const BAR_LINE_WIDTH: f64 = 4.0;
pub const BAR_LINE_CAP: &str = "round";
pub const GLOW_BLUR: f64 = 12.0;

// Particles
pub const NARROW_VIEWPORT_PX: f64 = 900.0;
pub const PARTICLES_NARROW: usize = 100;
pub const PARTICLES_WIDE: usize = 200;
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 3.5;
pub const PARTICLE_SPEED_MIN: f64 = 0.5;
pub const PARTICLE_SPEED_MAX: f64 = 2.0;
pub const PARTICLE_OPACITY_MIN: f64 = 0.2;
pub const PARTICLE_OPACITY_MAX: f64 = 0.8;

// Timing (milliseconds)
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;
pub const SPLASH_ENTER_DELAY_MS: i32 = 800;
pub const RIPPLE_LIFETIME_MS: i32 = 600;

// Player
pub const INITIAL_VOLUME: f64 = 0.1;
pub const MUSIC_DIR: &str = "assets/musics";
pub const ART_DIR: &str = "assets/icons";

// Custom cursor is only tracked on viewports wider than this
pub const CURSOR_MIN_VIEWPORT_PX: f64 = 900.0;
