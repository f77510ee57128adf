use thiserror::Error;

/// Errors raised by the platform-independent core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LandingError {
    #[error("playlist must contain at least one track")]
    EmptyPlaylist,
    #[error("gradient needs at least 2 colors, got {0}")]
    GradientTooShort(usize),
    #[error("fft size {0} must be a power of two in [32, 32768]")]
    InvalidFftSize(u32),
    #[error("audio analysis pipeline unavailable: {0}")]
    AudioPipeline(String),
    #[error("playback blocked: {0}")]
    PlaybackBlocked(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
