//! Turning an estimate into a control value for the game.
//!
//! This is the consumer side of the engine: the bird's vertical target follows the
//! singer's pitch between `base_frequency` (bottom) and `max_frequency` (top). Physics,
//! rendering and collisions stay with the game.
use crate::error::{Error, Result};
use crate::float::{cast, Float};

/// Manual frequency injected by the consumer, typically from a debug input field.
///
/// The estimators never see it; it is applied to their result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FrequencyOverride<T> {
    #[default]
    Disabled,
    /// Used only for frames without an estimate.
    Fallback(T),
    /// Replaces every estimate.
    Force(T),
}

impl<T> FrequencyOverride<T>
where
    T: Float,
{
    pub fn apply(&self, estimate: Option<T>) -> Option<T> {
        match *self {
            FrequencyOverride::Disabled => estimate,
            FrequencyOverride::Fallback(frequency) => estimate.or(Some(frequency)),
            FrequencyOverride::Force(frequency) => Some(frequency),
        }
    }
}

/// Linear map from a frequency range onto a control range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlMapper {
    base_frequency: f64,
    max_frequency: f64,
}

impl Default for ControlMapper {
    fn default() -> Self {
        ControlMapper {
            base_frequency: 100.0,
            max_frequency: 500.0,
        }
    }
}

impl ControlMapper {
    pub fn new(base_frequency: f64, max_frequency: f64) -> Result<Self> {
        if !(base_frequency.is_finite() && max_frequency.is_finite())
            || base_frequency >= max_frequency
        {
            return Err(Error::InvalidConfig(format!(
                "control range {}..{} Hz must be finite and increasing",
                base_frequency, max_frequency
            )));
        }
        Ok(ControlMapper {
            base_frequency,
            max_frequency,
        })
    }

    /// Position of `frequency` in the control range: 0 at or below `base_frequency`, 1 at or
    /// above `max_frequency`.
    pub fn relative_position<T: Float>(&self, frequency: T) -> T {
        let base = cast::<T>(self.base_frequency);
        let max = cast::<T>(self.max_frequency);
        let clamped = frequency.max(base).min(max);
        (clamped - base) / (max - base)
    }

    /// Screen coordinate for `frequency` with y growing downwards: low pitches map to
    /// `bottom`, high pitches to `top`.
    pub fn target_position<T: Float>(&self, frequency: T, top: T, bottom: T) -> T {
        bottom - self.relative_position(frequency) * (bottom - top)
    }

    /// Tilt in degrees, from -30 at the bottom of the range to 30 at the top.
    pub fn tilt_degrees<T: Float>(&self, frequency: T) -> T {
        (self.relative_position(frequency) - cast(0.5)) * cast(60.0)
    }
}
