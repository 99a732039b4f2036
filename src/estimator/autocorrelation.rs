//! Time-domain estimation by autocorrelation.
//!
//! A frame goes through four gates before it yields a frequency:
//!
//! 1. **Silence.** The RMS amplitude of the whole frame must reach the silence floor.
//! 2. **Edge trimming.** Leading and trailing samples quieter than a fraction of that RMS
//!    are dropped. What remains must be at least `min_valid_length` samples long.
//! 3. **Peak search.** The autocorrelation of the trimmed region is computed for the lags
//!    matching the voice band, and the strongest local maximum is kept. A lag counts as a
//!    local maximum when its value is strictly greater than both neighbours.
//! 4. **Confidence.** The peak must exceed `confidence_fraction * rms * valid_length`,
//!    which discards the largest of many weak peaks in noise.
//!
//! The pitch is then `sample_rate / lag`. Floor rounding of the lag bounds can put the
//! shortest lag just above the band; a peak there means the voice is too high and no pitch
//! is reported.
use log::trace;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::estimator::internals::{lagged_autocorrelation, trim_silence};
use crate::estimator::PitchEstimator;
use crate::float::{cast, Float};
use crate::frame::AudioFrame;
use crate::utils::buffer::{new_real_buffer, rms};
use crate::utils::peak::strongest_local_maximum;

#[derive(Debug, Clone)]
pub struct AutocorrelationEstimator<T>
where
    T: Float,
{
    config: EstimatorConfig,
    silence_rms_floor: T,
    trim_fraction: T,
    confidence_fraction: T,
}

impl<T> AutocorrelationEstimator<T>
where
    T: Float,
{
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: EstimatorConfig) -> Self {
        AutocorrelationEstimator {
            silence_rms_floor: cast(config.silence_rms_floor),
            trim_fraction: cast(config.trim_fraction),
            confidence_fraction: cast(config.confidence_fraction),
            config,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }
}

impl<T> Default for AutocorrelationEstimator<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::from_validated(EstimatorConfig::default())
    }
}

impl<T> PitchEstimator<T> for AutocorrelationEstimator<T>
where
    T: Float,
{
    fn estimate(&self, frame: &AudioFrame<T>) -> Option<T> {
        let signal = frame.samples();
        let sample_rate = frame.sample_rate();

        let rms = rms(signal);
        if rms < self.silence_rms_floor {
            trace!("rms {} is below the silence floor", rms);
            return None;
        }

        let valid = trim_silence(signal, rms * self.trim_fraction);
        if valid.len() < self.config.min_valid_length {
            trace!("only {} samples left after trimming", valid.len());
            return None;
        }

        let band = &self.config.band;
        let lags = match band.lag_bounds(sample_rate, valid.len()) {
            Some(lags) => lags,
            None => {
                trace!("no lag of {} samples maps into the voice band", valid.len());
                return None;
            }
        };

        // Neighbours on both sides of the scanned lags are needed for the peak test.
        let mut autocorr = new_real_buffer(lags.end + 1);
        lagged_autocorrelation(valid, lags.start - 1..lags.end + 1, &mut autocorr);

        let (lag, value) = strongest_local_maximum(&autocorr, lags)?;

        let confidence_threshold =
            self.confidence_fraction * rms * T::from_usize(valid.len()).unwrap();
        if value <= confidence_threshold {
            trace!(
                "peak at lag {} ({}) does not clear the confidence threshold {}",
                lag,
                value,
                confidence_threshold
            );
            return None;
        }

        if !band.contains(sample_rate as f64 / lag as f64) {
            trace!("peak at lag {} is outside the voice band", lag);
            return None;
        }

        Some(T::from_usize(sample_rate).unwrap() / T::from_usize(lag).unwrap())
    }
}
