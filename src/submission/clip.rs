//! Probability clipping.
//!
//! Bounding predictions away from 0 and 1 caps the log-loss penalty of a
//! confident wrong answer.

use crate::errors::{Result, SubmissionError};
use serde::Deserialize;

pub const DEFAULT_LOWER: f64 = 0.02;
pub const DEFAULT_UPPER: f64 = 0.98;

/// Closed interval probabilities are clipped into.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ClipBounds {
    #[serde(default = "default_lower")]
    pub lower: f64,
    #[serde(default = "default_upper")]
    pub upper: f64,
}

fn default_lower() -> f64 {
    DEFAULT_LOWER
}

fn default_upper() -> f64 {
    DEFAULT_UPPER
}

impl Default for ClipBounds {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
        }
    }
}

impl ClipBounds {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Bounds must satisfy `0 <= lower <= upper <= 1`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.lower) || !(0.0..=1.0).contains(&self.upper) {
            return Err(SubmissionError::config(format!(
                "clip bounds must lie in [0, 1], got [{}, {}]",
                self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(SubmissionError::config(format!(
                "clip lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }

    pub fn apply(&self, probability: f64) -> f64 {
        clip_probability(probability, *self)
    }
}

/// `min(max(p, lower), upper)`. Infinite inputs land on a bound.
pub fn clip_probability(probability: f64, bounds: ClipBounds) -> f64 {
    probability.max(bounds.lower).min(bounds.upper)
}
