use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller contract violations, reported at the boundary.
///
/// A frame without a usable pitch is not an error; estimators report it as `None`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("audio frame is empty")]
    EmptyFrame,
    #[error("sample rate must be positive")]
    InvalidSampleRate,
    #[error("spectrum has {bins} bins but was produced by an fft of size {fft_size}")]
    SpectrumMismatch { bins: usize, fft_size: usize },
    #[error("fft size {0} is not a positive power of two")]
    InvalidFftSize(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid smoothing parameter: {0}")]
    InvalidSmoothing(String),
}
