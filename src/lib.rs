//! # Voice Pitch
//! *voice_pitch* estimates the fundamental frequency of a voice from a live audio stream,
//! one frame at a time, fast enough to run inside the capture callback. It was written to
//! steer a game character with the player's voice.
//!
//! # Estimators
//! Two estimators are chained by [PitchEngine][engine::PitchEngine]:
//!
//!   * [AutocorrelationEstimator][estimator::autocorrelation] works on the raw samples and
//!     is tried first.
//!   * [SpectralPeakEstimator][estimator::spectral] picks the loudest bin of a magnitude
//!     spectrum and is only consulted when the first one finds nothing.
//!
//! Neither keeps any state between frames. "No pitch" is an ordinary outcome and is
//! reported as `None`; combine the engine with a [Smoother][smoothing::Smoother] if the
//! consumer needs steadier values.
//!
//! # Examples
//! ```
//! use voice_pitch::engine::{Method, PitchEngine};
//! use voice_pitch::frame::AudioFrame;
//! use voice_pitch::spectrum::SpectrumAnalyzer;
//!
//! fn main() {
//!     const SAMPLE_RATE: usize = 44100;
//!     const SIZE: usize = 2048;
//!
//!     // Signal coming from some source (microphone, generated, etc...)
//!     let dt = 1.0 / SAMPLE_RATE as f32;
//!     let freq = 220.0;
//!     let signal: Vec<f32> = (0..SIZE)
//!         .map(|x| 0.5 * (2.0 * std::f32::consts::PI * x as f32 * dt * freq).sin())
//!         .collect();
//!
//!     let engine: PitchEngine<f32> = PitchEngine::default();
//!     let mut analyzer = SpectrumAnalyzer::new(SIZE, SAMPLE_RATE).unwrap();
//!
//!     let frame = AudioFrame::new(&signal, SAMPLE_RATE).unwrap();
//!     let pitch = engine
//!         .estimate_with(&frame, || Some(analyzer.analyze(&signal)))
//!         .unwrap();
//!
//!     assert_eq!(pitch.method, Method::Autocorrelation);
//!     println!("Frequency: {}", pitch.frequency);
//! }
//! ```

pub use engine::{Method, Pitch, PitchEngine};
pub use error::{Error, Result};

pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod float;
pub mod frame;
pub mod smoothing;
pub mod spectrum;
pub mod utils;
