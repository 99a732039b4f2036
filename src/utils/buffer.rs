use rustfft::num_complex::Complex;
use rustfft::num_traits::Zero;

use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

pub fn new_complex_buffer<T: Float>(size: usize) -> Vec<Complex<T>> {
    vec![Complex::zero(); size]
}

/// Multiply `input` by `window` sample by sample and store the result in the real part of
/// `output`. Whatever part of `output` is not covered by `input` is zeroed.
pub fn copy_windowed_to_complex<T: Float>(input: &[T], window: &[T], output: &mut [Complex<T>]) {
    assert!(input.len() <= output.len());
    assert!(input.len() <= window.len());
    input
        .iter()
        .zip(window)
        .zip(output.iter_mut())
        .for_each(|((i, w), o)| {
            o.re = *i * *w;
            o.im = T::zero();
        });
    output[input.len()..]
        .iter_mut()
        .for_each(|o| *o = Complex::zero())
}

/// Compute the sum of the square of each element of `arr`.
pub fn square_sum<T: Float>(arr: &[T]) -> T {
    arr.iter().map(|&s| s * s).sum::<T>()
}

/// Root-mean-square amplitude of `arr`. Zero for an empty slice.
pub fn rms<T: Float>(arr: &[T]) -> T {
    if arr.is_empty() {
        return T::zero();
    }
    (square_sum(arr) / T::from_usize(arr.len()).unwrap()).sqrt()
}
