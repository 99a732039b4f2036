//! Byte-scaled magnitude spectra, as produced by a browser `AnalyserNode`.
//!
//! The spectral fallback expects magnitudes on that 0–255 scale, which is what its default
//! threshold of 10 is calibrated against. [SpectrumAnalyzer] computes the same thing from
//! raw samples:
//!
//! 1. take the most recent `fft_size` samples and apply a Blackman window,
//! 2. take the fft and keep the first `fft_size / 2` bins,
//! 3. convert `|X[k]| / fft_size` to decibels,
//! 4. map `[min_decibels, max_decibels]` linearly onto `[0, 255]`, clamping and flooring.
//!
//! No smoothing is applied across calls.
use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::{Error, Result};
use crate::float::{cast, Float};
use crate::frame::SpectrumSnapshot;
use crate::utils::buffer::{copy_windowed_to_complex, new_complex_buffer, new_real_buffer};
use crate::utils::filters::blackman_window;

pub const DEFAULT_FFT_SIZE: usize = 2048;
pub const DEFAULT_MIN_DECIBELS: f64 = -100.0;
pub const DEFAULT_MAX_DECIBELS: f64 = -30.0;

/// Buffers and fft plan are allocated once; [SpectrumAnalyzer::analyze] does not allocate.
pub struct SpectrumAnalyzer<T>
where
    T: Float,
{
    fft_size: usize,
    sample_rate: usize,
    min_decibels: T,
    max_decibels: T,
    fft: Arc<dyn Fft<T>>,
    window: Vec<T>,
    signal_complex: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
    magnitudes: Vec<T>,
}

impl<T> SpectrumAnalyzer<T>
where
    T: Float,
{
    pub fn new(fft_size: usize, sample_rate: usize) -> Result<Self> {
        if fft_size < 2 || !fft_size.is_power_of_two() {
            return Err(Error::InvalidFftSize(fft_size));
        }
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);
        let scratch = new_complex_buffer(fft.get_inplace_scratch_len());

        let mut window = new_real_buffer(fft_size);
        blackman_window(&mut window);

        Ok(SpectrumAnalyzer {
            fft_size,
            sample_rate,
            min_decibels: cast(DEFAULT_MIN_DECIBELS),
            max_decibels: cast(DEFAULT_MAX_DECIBELS),
            fft,
            window,
            signal_complex: new_complex_buffer(fft_size),
            scratch,
            magnitudes: new_real_buffer(fft_size / 2),
        })
    }

    /// Set the decibel range mapped onto `[0, 255]`. `min_decibels` must be below `max_decibels`.
    pub fn with_decibel_range(mut self, min_decibels: f64, max_decibels: f64) -> Result<Self> {
        if !(min_decibels.is_finite() && max_decibels.is_finite()) || min_decibels >= max_decibels
        {
            return Err(Error::InvalidConfig(format!(
                "decibel range {}..{} must be finite and increasing",
                min_decibels, max_decibels
            )));
        }
        self.min_decibels = cast(min_decibels);
        self.max_decibels = cast(max_decibels);
        Ok(self)
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Compute the spectrum of the last `fft_size` samples of `signal`. Shorter input is
    /// zero-padded at the end.
    pub fn analyze(&mut self, signal: &[T]) -> SpectrumSnapshot<'_, T> {
        let recent = &signal[signal.len().saturating_sub(self.fft_size)..];
        copy_windowed_to_complex(recent, &self.window, &mut self.signal_complex);
        self.fft
            .process_with_scratch(&mut self.signal_complex, &mut self.scratch);

        let size = T::from_usize(self.fft_size).unwrap();
        let twenty = cast::<T>(20.0);
        let byte_max = cast::<T>(255.0);
        let scale = byte_max / (self.max_decibels - self.min_decibels);
        let min_decibels = self.min_decibels;

        self.magnitudes
            .iter_mut()
            .zip(&self.signal_complex)
            .for_each(|(m, c)| {
                // log10(0) is -inf, which clamps to 0 below.
                let decibels = twenty * (c.norm() / size).log10();
                let byte = scale * (decibels - min_decibels);
                *m = byte.max(T::zero()).min(byte_max).floor();
            });

        SpectrumSnapshot::from_parts(&self.magnitudes, self.sample_rate, self.fft_size)
    }
}
