//! Optional smoothing of successive estimates.
//!
//! The estimators are stateless, so consecutive frames can jump between octaves or drop out
//! for a frame. A [Smoother] sits after the engine and is the only stateful stage; a
//! consumer that wants raw estimates simply does not use one.
use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::float::{cast, Float};

pub trait Smoother<T>
where
    T: Float,
{
    /// Feed the estimate of the next frame and get the smoothed value. A frame without an
    /// estimate yields `None` and leaves the history untouched.
    fn update(&mut self, estimate: Option<T>) -> Option<T>;

    /// Forget every estimate seen so far.
    fn reset(&mut self);
}

/// First-order low pass: `s = s + alpha * (x - s)`.
#[derive(Debug, Clone)]
pub struct ExponentialSmoother<T>
where
    T: Float,
{
    alpha: T,
    state: Option<T>,
}

impl<T> ExponentialSmoother<T>
where
    T: Float,
{
    /// `alpha` must be in `(0, 1]`; 1 disables smoothing.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::InvalidSmoothing(format!(
                "alpha must be in (0, 1], got {}",
                alpha
            )));
        }
        Ok(ExponentialSmoother {
            alpha: cast(alpha),
            state: None,
        })
    }
}

impl<T> Smoother<T> for ExponentialSmoother<T>
where
    T: Float,
{
    fn update(&mut self, estimate: Option<T>) -> Option<T> {
        let x = estimate?;
        let next = match self.state {
            Some(s) => s + self.alpha * (x - s),
            None => x,
        };
        self.state = Some(next);
        self.state
    }

    fn reset(&mut self) {
        self.state = None;
    }
}

/// Median of the last `window` estimates. Until the window fills up, the lower median of
/// what has been seen is returned.
#[derive(Debug, Clone)]
pub struct MedianSmoother<T>
where
    T: Float,
{
    window: usize,
    history: VecDeque<T>,
    sorted: Vec<T>,
}

impl<T> MedianSmoother<T>
where
    T: Float,
{
    /// `window` must be odd.
    pub fn new(window: usize) -> Result<Self> {
        if window % 2 == 0 {
            return Err(Error::InvalidSmoothing(format!(
                "median window must be odd, got {}",
                window
            )));
        }
        Ok(MedianSmoother {
            window,
            history: VecDeque::with_capacity(window),
            sorted: Vec::with_capacity(window),
        })
    }
}

impl<T> Smoother<T> for MedianSmoother<T>
where
    T: Float,
{
    fn update(&mut self, estimate: Option<T>) -> Option<T> {
        let x = estimate?;
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(x);

        self.sorted.clear();
        self.sorted.extend(self.history.iter().copied());
        self.sorted
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Some(self.sorted[(self.sorted.len() - 1) / 2])
    }

    fn reset(&mut self) {
        self.history.clear();
    }
}
