use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared `(low, high)` bounds of one radar axis.
///
/// `low > high` is a valid encoding: the axis is inverted and smaller raw
/// values are plotted farther from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }

    pub fn min(&self) -> f64 {
        self.low.min(self.high)
    }

    pub fn max(&self) -> f64 {
        self.low.max(self.high)
    }

    pub fn width(&self) -> f64 {
        self.max() - self.min()
    }

    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    /// Inclusive, independent of the declared order. Non-finite values and
    /// ranges with a non-finite bound contain nothing.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && self.is_finite() && self.min() <= value && value <= self.max()
    }

    /// Ascending copy of the range.
    pub fn normalized(&self) -> Self {
        Self {
            low: self.min(),
            high: self.max(),
        }
    }

    /// Reflects `value` within the range: `high - (value - low)`.
    pub fn invert(&self, value: f64) -> f64 {
        self.high - (value - self.low)
    }

    /// Value after inversion (if the axis is inverted) and the ascending range it lives in.
    fn oriented(&self, value: f64) -> (f64, AxisRange) {
        if self.is_inverted() {
            (self.invert(value), self.normalized())
        } else {
            (value, *self)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("no axes to scale")]
    Empty,
    #[error("got {values} values for {ranges} axis ranges")]
    LengthMismatch { values: usize, ranges: usize },
    #[error("axis {axis}: value {value} is outside range ({low}, {high})")]
    RangeViolation {
        axis: usize,
        value: f64,
        low: f64,
        high: f64,
    },
    #[error("axis {axis}: zero-width range cannot be mapped onto the target frame")]
    DegenerateRange { axis: usize },
}

/// Values of all axes expressed in the target frame of axis 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledVector {
    pub values: Vec<f64>,
    /// Ascending range of axis 0.
    pub frame: AxisRange,
}

/// Rescales `values` onto the frame defined by `ranges[0]`.
///
/// Inverted axes are reflected before mapping. Axis 0 is not mapped, only
/// (possibly) inverted: it defines the frame.
pub fn scale(values: &[f64], ranges: &[AxisRange]) -> Result<ScaledVector, ScaleError> {
    if values.len() != ranges.len() {
        return Err(ScaleError::LengthMismatch {
            values: values.len(),
            ranges: ranges.len(),
        });
    }
    if values.is_empty() {
        return Err(ScaleError::Empty);
    }
    for (axis, (&value, range)) in values.iter().zip(ranges).enumerate() {
        if !range.contains(value) {
            return Err(ScaleError::RangeViolation {
                axis,
                value,
                low: range.low,
                high: range.high,
            });
        }
    }

    let (first, frame) = ranges[0].oriented(values[0]);
    let mut out = Vec::with_capacity(values.len());
    out.push(first);

    for (offset, (&value, range)) in values[1..].iter().zip(&ranges[1..]).enumerate() {
        let (v, r) = range.oriented(value);
        let span = r.high - r.low;
        if span == 0.0 {
            return Err(ScaleError::DegenerateRange { axis: offset + 1 });
        }
        out.push((v - r.low) / span * (frame.high - frame.low) + frame.low);
    }

    Ok(ScaledVector { values: out, frame })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/axes.rs"]
mod tests;
