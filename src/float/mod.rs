//! Generic [Float] type which acts as a stand-in for `f32` or `f64`.
use rustfft::num_traits::Float as NumFloat;
use rustfft::FftNum;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Frames are processed as arrays of [Float]s. A [Float] is normally `f32` or `f64`.
pub trait Float: Display + Debug + NumFloat + FftNum + Sum {}

impl Float for f64 {}
impl Float for f32 {}

/// Convert a configuration constant into the sample type.
pub(crate) fn cast<T: Float>(value: f64) -> T {
    // Every f64 is representable (possibly rounded) as f32 or f64.
    T::from_f64(value).unwrap()
}

/// Absolute value, spelled out to avoid the `Signed`/`Float` method clash.
pub(crate) fn magnitude<T: Float>(value: T) -> T {
    NumFloat::abs(value)
}
