use std::ops::Range;

use crate::float::{magnitude, Float};

/// Drop the leading and trailing samples of `signal` whose magnitude is below `threshold`.
///
/// The returned slice runs from the first sample reaching `threshold` up to, but not
/// including, the last one. It is empty when fewer than two samples reach it.
pub fn trim_silence<T: Float>(signal: &[T], threshold: T) -> &[T] {
    let loud = |s: &T| magnitude(*s) >= threshold;
    match (signal.iter().position(loud), signal.iter().rposition(loud)) {
        (Some(start), Some(end)) if start < end => &signal[start..end],
        _ => &signal[..0],
    }
}

/// Compute the autocorrelation of `signal` for every lag in `lags` and store it in `result`,
/// indexed by lag. For a signal _x=(x_0,x_1,...,x_{n-1})_ this is
///
/// > r(t) = sum_{i=0}^{n-1-t} x_i*x_{i+t}
///
/// Entries of `result` for lags outside `lags` are set to zero. The cost is
/// O(`signal.len()` × `lags.len()`), which for voice-range lags stays well below an fft
/// round trip on short frames and needs no scratch buffers.
pub fn lagged_autocorrelation<T: Float>(signal: &[T], lags: Range<usize>, result: &mut [T]) {
    assert!(
        lags.end <= result.len(),
        "`result` must have room for every lag in the range"
    );

    result.iter_mut().for_each(|r| *r = T::zero());
    for lag in lags.start..lags.end.min(signal.len()) {
        result[lag] = signal
            .iter()
            .zip(&signal[lag..])
            .map(|(&a, &b)| a * b)
            .sum();
    }
}
