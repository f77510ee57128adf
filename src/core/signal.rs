use crate::constants::{FFT_SIZE_MAX, FFT_SIZE_MIN};
use crate::core::error::{LandingError, Result};

/// Live frequency-domain readout of the playing audio.
pub trait SignalSource {
    /// Overwrite `out` with the current byte magnitudes (0..=255).
    fn fill_snapshot(&mut self, out: &mut [u8]);
}

/// Validate a transform size and return the bin count it produces.
pub fn bin_count_for_fft(fft_size: u32) -> Result<usize> {
    if !fft_size.is_power_of_two() || !(FFT_SIZE_MIN..=FFT_SIZE_MAX).contains(&fft_size) {
        return Err(LandingError::InvalidFftSize(fft_size));
    }
    Ok((fft_size / 2) as usize)
}
