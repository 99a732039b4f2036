use crate::float::Float;
use crate::frame::AudioFrame;

pub mod autocorrelation;
pub mod internals;
pub mod spectral;

/// A time-domain pitch estimator.
///
/// Estimators hold nothing but their configuration, so an estimate depends on the frame
/// alone. `None` means the frame carries no reliable pitch; it is the expected outcome on
/// silent or noisy frames.
pub trait PitchEstimator<T>
where
    T: Float,
{
    fn estimate(&self, frame: &AudioFrame<T>) -> Option<T>;
}
