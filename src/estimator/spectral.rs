//! Frequency-domain fallback: the loudest in-band bin of a magnitude spectrum.
//!
//! Resolution is one bin, `sample_rate / fft_size` Hz (about 21.5 Hz for a 2048-point fft
//! at 44.1 kHz), so this is only consulted when the autocorrelation finds nothing.
use log::trace;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::float::{cast, Float};
use crate::frame::SpectrumSnapshot;
use crate::utils::peak::strongest_element;

#[derive(Debug, Clone)]
pub struct SpectralPeakEstimator<T>
where
    T: Float,
{
    config: EstimatorConfig,
    threshold: T,
}

impl<T> SpectralPeakEstimator<T>
where
    T: Float,
{
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: EstimatorConfig) -> Self {
        SpectralPeakEstimator {
            threshold: cast(config.spectral_threshold),
            config,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Frequency of the strongest bin in the voice band, if its magnitude exceeds the
    /// spectral threshold. Ties keep the lowest bin.
    pub fn estimate(&self, spectrum: &SpectrumSnapshot<T>) -> Option<T> {
        let bins = self.config.band.bin_bounds(
            spectrum.sample_rate(),
            spectrum.fft_size(),
            spectrum.bin_count(),
        )?;

        let (bin, value) = strongest_element(spectrum.magnitudes(), bins)?;
        if value <= self.threshold {
            trace!(
                "strongest bin {} ({}) is below the spectral threshold",
                bin,
                value
            );
            return None;
        }

        Some(spectrum.bin_frequency(bin))
    }
}

impl<T> Default for SpectralPeakEstimator<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::from_validated(EstimatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: usize = 44100;
    const FFT_SIZE: usize = 2048;

    fn spectrum_with_peak(bin: usize, value: f32) -> Vec<f32> {
        let mut magnitudes = vec![2.0; FFT_SIZE / 2];
        magnitudes[bin] = value;
        magnitudes
    }

    #[test]
    fn finds_the_loudest_bin() {
        let magnitudes = spectrum_with_peak(14, 120.0);
        let spectrum = SpectrumSnapshot::new(&magnitudes, SAMPLE_RATE, FFT_SIZE).unwrap();
        let pitch = SpectralPeakEstimator::default().estimate(&spectrum).unwrap();
        assert!((pitch - 301.46).abs() < 0.01);
    }

    #[test]
    fn quiet_spectrum_has_no_pitch() {
        let magnitudes = spectrum_with_peak(14, 10.0);
        let spectrum = SpectrumSnapshot::new(&magnitudes, SAMPLE_RATE, FFT_SIZE).unwrap();
        assert_eq!(SpectralPeakEstimator::default().estimate(&spectrum), None);
    }

    #[test]
    fn peaks_outside_the_band_are_ignored() {
        // Bin 2 is 43 Hz and bin 60 is 1292 Hz, both outside 50..1000 Hz.
        let mut magnitudes = spectrum_with_peak(2, 250.0);
        magnitudes[60] = 250.0;
        magnitudes[20] = 40.0;
        let spectrum = SpectrumSnapshot::new(&magnitudes, SAMPLE_RATE, FFT_SIZE).unwrap();
        let pitch = SpectralPeakEstimator::default().estimate(&spectrum).unwrap();
        assert!((pitch - 430.66).abs() < 0.01);
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = EstimatorConfig::default();
        config.spectral_threshold = -1.0;
        assert!(SpectralPeakEstimator::<f32>::new(config).is_err());
        assert!(SpectralPeakEstimator::<f32>::new(EstimatorConfig::default()).is_ok());
    }

    #[test]
    fn ties_keep_the_lowest_bin() {
        let mut magnitudes = spectrum_with_peak(10, 80.0);
        magnitudes[30] = 80.0;
        let spectrum = SpectrumSnapshot::new(&magnitudes, SAMPLE_RATE, FFT_SIZE).unwrap();
        let pitch = SpectralPeakEstimator::default().estimate(&spectrum).unwrap();
        assert_eq!(pitch, spectrum.bin_frequency(10));
    }

    #[test]
    fn truncated_spectrum_is_searched_up_to_its_last_bin() {
        let magnitudes = vec![0.0, 0.0, 0.0, 0.0, 50.0f64];
        let spectrum = SpectrumSnapshot::new(&magnitudes, SAMPLE_RATE, FFT_SIZE).unwrap();
        let pitch = SpectralPeakEstimator::default().estimate(&spectrum).unwrap();
        assert_eq!(pitch, 4.0 * 44100.0 / 2048.0);

        let magnitudes = vec![90.0f64; 3];
        let spectrum = SpectrumSnapshot::new(&magnitudes, SAMPLE_RATE, FFT_SIZE).unwrap();
        assert_eq!(SpectralPeakEstimator::default().estimate(&spectrum), None);
    }
}
