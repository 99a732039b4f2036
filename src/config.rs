//! Tunable thresholds shared by the estimators.
//!
//! Every constant the estimators rely on lives in [EstimatorConfig]. The defaults are the
//! heuristics the voice-controlled game shipped with; none of them is derived, so expect
//! to retune the confidence and spectral thresholds for other microphones and sample rates.
//!
//! ```
//! use voice_pitch::config::EstimatorConfig;
//!
//! let config = EstimatorConfig::from_toml_str(
//!     r#"
//!     silence_rms_floor = 0.02
//!
//!     [band]
//!     min_frequency = 80.0
//!     max_frequency = 800.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.band.max_frequency, 800.0);
//! assert_eq!(config.min_valid_length, 100);
//! ```
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The frequency range, in Hz, in which both estimators search for a pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceBand {
    pub min_frequency: f64,
    pub max_frequency: f64,
}

impl Default for VoiceBand {
    fn default() -> Self {
        Self {
            min_frequency: 50.0,
            max_frequency: 1000.0,
        }
    }
}

impl VoiceBand {
    pub fn new(min_frequency: f64, max_frequency: f64) -> Result<Self> {
        let band = Self {
            min_frequency,
            max_frequency,
        };
        band.validate()?;
        Ok(band)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_frequency.is_finite() && self.max_frequency.is_finite()) {
            return Err(Error::InvalidConfig(
                "voice band bounds must be finite".into(),
            ));
        }
        if self.min_frequency <= 0.0 || self.max_frequency <= self.min_frequency {
            return Err(Error::InvalidConfig(format!(
                "voice band {}..{} Hz must satisfy 0 < min < max",
                self.min_frequency, self.max_frequency
            )));
        }
        Ok(())
    }

    /// Whether `frequency` lies in the band, bounds included.
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.min_frequency && frequency <= self.max_frequency
    }

    /// Range of autocorrelation lags to scan for a region of `valid_length` samples.
    ///
    /// The lower bound is `floor(sample_rate / max_frequency)` (at least 1) and the upper
    /// bound `floor(sample_rate / min_frequency)`, capped at `valid_length - 1`. Returns `None`
    /// when the range is empty.
    pub fn lag_bounds(&self, sample_rate: usize, valid_length: usize) -> Option<Range<usize>> {
        let sample_rate = sample_rate as f64;
        let min_lag = ((sample_rate / self.max_frequency).floor() as usize).max(1);
        let max_lag =
            ((sample_rate / self.min_frequency).floor() as usize).min(valid_length.checked_sub(1)?);

        if min_lag < max_lag {
            Some(min_lag..max_lag)
        } else {
            None
        }
    }

    /// Range of spectrum bins whose centre frequency lies in the band.
    ///
    /// Bin `i` of an fft of size `fft_size` sits at `i * sample_rate / fft_size` Hz; the
    /// range is capped at `bin_count`. Returns `None` when no bin falls in the band.
    pub fn bin_bounds(
        &self,
        sample_rate: usize,
        fft_size: usize,
        bin_count: usize,
    ) -> Option<Range<usize>> {
        let bins_per_hz = fft_size as f64 / sample_rate as f64;
        let first = (self.min_frequency * bins_per_hz).ceil() as usize;
        let end = ((self.max_frequency * bins_per_hz).floor() as usize + 1).min(bin_count);

        if first < end {
            Some(first..end)
        } else {
            None
        }
    }
}

/// Thresholds for the silence gate, edge trimming, confidence gate and spectral fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Frames whose RMS amplitude is below this floor are treated as silence.
    pub silence_rms_floor: f64,
    /// Edge samples quieter than `trim_fraction * rms` are trimmed.
    pub trim_fraction: f64,
    /// Trimmed regions shorter than this many samples are not analysed.
    pub min_valid_length: usize,
    /// A peak is accepted when it exceeds `confidence_fraction * rms * valid_length`.
    pub confidence_fraction: f64,
    /// Minimum magnitude of the strongest in-band spectrum bin, on the snapshot's scale.
    pub spectral_threshold: f64,
    pub band: VoiceBand,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            silence_rms_floor: 0.01,
            trim_fraction: 0.1,
            min_valid_length: 100,
            confidence_fraction: 0.01,
            spectral_threshold: 10.0,
            band: VoiceBand::default(),
        }
    }
}

impl EstimatorConfig {
    /// Parse a configuration from TOML. Missing keys take their default value.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.band.validate()?;
        non_negative("silence_rms_floor", self.silence_rms_floor)?;
        non_negative("confidence_fraction", self.confidence_fraction)?;
        non_negative("spectral_threshold", self.spectral_threshold)?;
        if !(0.0..1.0).contains(&self.trim_fraction) {
            return Err(Error::InvalidConfig(format!(
                "trim_fraction must be in [0, 1), got {}",
                self.trim_fraction
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{} must be a finite, non-negative number, got {}",
            name, value
        )))
    }
}
