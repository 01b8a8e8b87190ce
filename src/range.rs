//!
//! Bounds and step math for the spinbox.
//!

use crate::number;

/// Value bounds for a spinbox.
///
/// min/max, the step width and the decimal digits kept when stepping
/// and formatting. Static configuration, set once per widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Increment/decrement width.
    pub step: f64,
    /// Decimal places kept in the value and the display.
    pub digits: u8,
}

impl Default for SpinRange {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 1.0,
            digits: 0,
        }
    }
}

impl SpinRange {
    /// New range.
    ///
    /// The decimal digits are derived from the step width,
    /// use [digits](SpinRange::digits) to override.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            digits: number::decimal_digits(step),
        }
    }

    /// Decimal digits.
    pub fn digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Value lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into the bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Round to the configured digits.
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.digits as i32);
        (value * scale).round() / scale
    }

    /// One step up from the given value. An unset value steps from 0.
    /// Rounded, then clamped into the bounds.
    pub fn step_up(&self, value: Option<f64>) -> f64 {
        self.clamp(self.round(value.unwrap_or(0.0) + self.step))
    }

    /// One step down from the given value. An unset value steps from 0.
    /// Rounded, then clamped into the bounds.
    pub fn step_down(&self, value: Option<f64>) -> f64 {
        self.clamp(self.round(value.unwrap_or(0.0) - self.step))
    }
}
