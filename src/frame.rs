//! Validated inputs handed to the estimators by the capture side.
//!
//! Constructing a frame or snapshot is the only place malformed input is rejected. Once
//! built, the estimators treat them as well-formed and never fail.
use crate::error::{Error, Result};
use crate::float::Float;

/// A window of audio samples, normally in `[-1, 1]`, captured at `sample_rate` Hz.
#[derive(Debug, Clone, Copy)]
pub struct AudioFrame<'a, T>
where
    T: Float,
{
    samples: &'a [T],
    sample_rate: usize,
}

impl<'a, T> AudioFrame<'a, T>
where
    T: Float,
{
    pub fn new(samples: &'a [T], sample_rate: usize) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptyFrame);
        }
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }
        Ok(AudioFrame {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &'a [T] {
        self.samples
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; empty frames are rejected by [AudioFrame::new].
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time covered by the frame in seconds. This is the budget for one estimation pass.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Magnitudes of the bins of an fft of size `fft_size` taken at `sample_rate` Hz.
///
/// Usually only the lower half of the bins is kept, so `bin_count` may be less
/// than `fft_size`.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumSnapshot<'a, T>
where
    T: Float,
{
    magnitudes: &'a [T],
    sample_rate: usize,
    fft_size: usize,
}

impl<'a, T> SpectrumSnapshot<'a, T>
where
    T: Float,
{
    pub fn new(magnitudes: &'a [T], sample_rate: usize, fft_size: usize) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }
        if magnitudes.is_empty() || magnitudes.len() > fft_size {
            return Err(Error::SpectrumMismatch {
                bins: magnitudes.len(),
                fft_size,
            });
        }
        Ok(SpectrumSnapshot {
            magnitudes,
            sample_rate,
            fft_size,
        })
    }

    /// For producers that already guarantee the invariants checked by [SpectrumSnapshot::new].
    pub(crate) fn from_parts(magnitudes: &'a [T], sample_rate: usize, fft_size: usize) -> Self {
        debug_assert!(sample_rate > 0 && !magnitudes.is_empty() && magnitudes.len() <= fft_size);
        SpectrumSnapshot {
            magnitudes,
            sample_rate,
            fft_size,
        }
    }

    pub fn magnitudes(&self) -> &'a [T] {
        self.magnitudes
    }

    pub fn bin_count(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Centre frequency of bin `index` in Hz.
    pub fn bin_frequency(&self, index: usize) -> T {
        T::from_usize(index * self.sample_rate).unwrap() / T::from_usize(self.fft_size).unwrap()
    }
}
