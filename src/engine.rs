//! The per-frame fallback chain: autocorrelation first, then the spectrum.
use log::debug;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::estimator::autocorrelation::AutocorrelationEstimator;
use crate::estimator::spectral::SpectralPeakEstimator;
use crate::estimator::PitchEstimator;
use crate::float::Float;
use crate::frame::{AudioFrame, SpectrumSnapshot};

/// Which estimator produced a [Pitch].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Autocorrelation,
    Spectrum,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch<T>
where
    T: Float,
{
    pub frequency: T,
    pub method: Method,
}

/// Runs a time-domain estimator and, when it finds nothing, the spectral fallback.
///
/// The engine keeps no state between frames: the same frame and spectrum always give the
/// same [Pitch].
#[derive(Debug, Clone)]
pub struct PitchEngine<T, P = AutocorrelationEstimator<T>>
where
    T: Float,
{
    primary: P,
    fallback: SpectralPeakEstimator<T>,
}

impl<T> PitchEngine<T>
where
    T: Float,
{
    pub fn from_config(config: EstimatorConfig) -> Result<Self> {
        Ok(PitchEngine {
            primary: AutocorrelationEstimator::new(config.clone())?,
            fallback: SpectralPeakEstimator::new(config)?,
        })
    }
}

impl<T> Default for PitchEngine<T>
where
    T: Float,
{
    fn default() -> Self {
        PitchEngine {
            primary: AutocorrelationEstimator::default(),
            fallback: SpectralPeakEstimator::default(),
        }
    }
}

impl<T, P> PitchEngine<T, P>
where
    T: Float,
    P: PitchEstimator<T>,
{
    pub fn new(primary: P, fallback: SpectralPeakEstimator<T>) -> Self {
        PitchEngine { primary, fallback }
    }

    /// Estimate the pitch of `frame`, falling back to `spectrum` if one is given.
    pub fn estimate(
        &self,
        frame: &AudioFrame<T>,
        spectrum: Option<&SpectrumSnapshot<T>>,
    ) -> Option<Pitch<T>> {
        self.estimate_with(frame, || spectrum.copied())
    }

    /// Like [PitchEngine::estimate], but only asks for the spectrum when the time-domain
    /// estimator found nothing.
    pub fn estimate_with<'a, F>(&self, frame: &AudioFrame<T>, spectrum: F) -> Option<Pitch<T>>
    where
        F: FnOnce() -> Option<SpectrumSnapshot<'a, T>>,
    {
        if let Some(frequency) = self.primary.estimate(frame) {
            return Some(Pitch {
                frequency,
                method: Method::Autocorrelation,
            });
        }

        let frequency = self.fallback.estimate(&spectrum()?)?;
        debug!("falling back to the spectrum peak at {} Hz", frequency);
        Some(Pitch {
            frequency,
            method: Method::Spectrum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<f64>);

    impl PitchEstimator<f64> for Fixed {
        fn estimate(&self, _frame: &AudioFrame<f64>) -> Option<f64> {
            self.0
        }
    }

    fn peak_spectrum() -> Vec<f64> {
        let mut magnitudes = vec![0.0; 1024];
        magnitudes[14] = 200.0;
        magnitudes
    }

    #[test]
    fn primary_estimate_wins() {
        let engine = PitchEngine::new(Fixed(Some(180.0)), SpectralPeakEstimator::default());
        let samples = vec![0.0; 2048];
        let frame = AudioFrame::new(&samples, 44100).unwrap();
        let magnitudes = peak_spectrum();
        let spectrum = SpectrumSnapshot::new(&magnitudes, 44100, 2048).unwrap();

        let pitch = engine.estimate(&frame, Some(&spectrum)).unwrap();
        assert_eq!(pitch.frequency, 180.0);
        assert_eq!(pitch.method, Method::Autocorrelation);
    }

    #[test]
    fn spectrum_is_only_produced_on_demand() {
        let engine = PitchEngine::new(Fixed(Some(180.0)), SpectralPeakEstimator::default());
        let samples = vec![0.0; 2048];
        let frame = AudioFrame::new(&samples, 44100).unwrap();

        let mut asked = false;
        engine.estimate_with(&frame, || {
            asked = true;
            None
        });
        assert!(!asked);
    }

    #[test]
    fn falls_back_to_the_spectrum() {
        let engine = PitchEngine::new(Fixed(None), SpectralPeakEstimator::default());
        let samples = vec![0.0; 2048];
        let frame = AudioFrame::new(&samples, 44100).unwrap();
        let magnitudes = peak_spectrum();
        let spectrum = SpectrumSnapshot::new(&magnitudes, 44100, 2048).unwrap();

        let pitch = engine.estimate(&frame, Some(&spectrum)).unwrap();
        assert_eq!(pitch.method, Method::Spectrum);
        assert!((pitch.frequency - 301.46).abs() < 0.01);

        assert_eq!(engine.estimate(&frame, None), None);
    }

    #[test]
    fn from_config_validates() {
        let mut config = EstimatorConfig::default();
        config.trim_fraction = 2.0;
        assert!(PitchEngine::<f32>::from_config(config).is_err());
        assert!(PitchEngine::<f32>::from_config(EstimatorConfig::default()).is_ok());
    }
}
