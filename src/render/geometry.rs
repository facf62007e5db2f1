use thiserror::Error;

use crate::model::axes::{AxisRange, ScaledVector};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("target frame ({low}, {high}) has zero width")]
    DegenerateFrame { low: f64, high: f64 },
    #[error("{labels} axis labels for {ranges} ranges and {values} values")]
    AxisCountMismatch {
        labels: usize,
        ranges: usize,
        values: usize,
    },
    #[error("plotting error: {0}")]
    Draw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLevel {
    /// Distance from the centre as a fraction of the outer radius.
    pub fraction: f64,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct ChartAxis {
    pub label: String,
    pub angle_deg: f64,
    pub grid: Vec<GridLevel>,
}

/// Maps target-frame values to pixel radii.
#[derive(Debug, Clone, Copy)]
pub struct RadialFrame {
    frame: AxisRange,
    radius: f64,
}

impl RadialFrame {
    pub fn new(frame: AxisRange, radius: f64) -> Result<Self, RenderError> {
        let frame = frame.normalized();
        if frame.width() <= 0.0 {
            return Err(RenderError::DegenerateFrame {
                low: frame.low,
                high: frame.high,
            });
        }
        Ok(Self { frame, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_of(&self, value: f64) -> f64 {
        (value - self.frame.low) / self.frame.width() * self.radius
    }

    /// Offset from the centre in SVG coordinates (y grows downwards).
    pub fn offset(&self, angle_deg: f64, value: f64) -> (f64, f64) {
        polar_offset(angle_deg, self.radius_of(value))
    }
}

#[derive(Debug, Clone)]
pub struct RadarChart {
    pub axes: Vec<ChartAxis>,
    pub radial: RadialFrame,
    pub scaled: Vec<f64>,
    pub size: u32,
}

impl RadarChart {
    pub fn center(&self) -> (f64, f64) {
        let c = self.size as f64 / 2.0;
        (c, c)
    }

    /// Closed data outline; the first point is repeated at the end.
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let (cx, cy) = self.center();
        let mut points: Vec<(f64, f64)> = self
            .axes
            .iter()
            .zip(&self.scaled)
            .map(|(axis, &v)| {
                let (dx, dy) = self.radial.offset(axis.angle_deg, v);
                (cx + dx, cy + dy)
            })
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

pub fn polar_offset(angle_deg: f64, r: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (r * rad.cos(), -r * rad.sin())
}

pub fn axis_angles(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = 360.0 / n as f64;
    (0..n).map(|i| i as f64 * step).collect()
}

/// Evenly spaced levels from `range.low` to `range.high` in declared order, so
/// an inverted axis carries its largest value at the centre. The origin label is blank.
pub fn grid_levels(range: &AxisRange, n_levels: usize) -> Vec<GridLevel> {
    let n = n_levels.max(2);
    let last = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let fraction = i as f64 / last;
            let value = range.low + fraction * (range.high - range.low);
            let label = if i == 0 {
                String::new()
            } else {
                format_level(value)
            };
            GridLevel { fraction, label }
        })
        .collect()
}

pub fn format_level(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{rounded}")
}

pub fn build_chart(
    labels: &[&str],
    ranges: &[AxisRange],
    scaled: &ScaledVector,
    n_levels: usize,
    size: u32,
) -> Result<RadarChart, RenderError> {
    if labels.len() != ranges.len() || ranges.len() != scaled.values.len() {
        return Err(RenderError::AxisCountMismatch {
            labels: labels.len(),
            ranges: ranges.len(),
            values: scaled.values.len(),
        });
    }
    let radial = RadialFrame::new(scaled.frame, size as f64 * 0.36)?;
    let angles = axis_angles(labels.len());
    let axes = labels
        .iter()
        .zip(ranges)
        .zip(angles)
        .map(|((label, range), angle_deg)| ChartAxis {
            label: label.to_string(),
            angle_deg,
            grid: grid_levels(range, n_levels),
        })
        .collect();
    Ok(RadarChart {
        axes,
        radial,
        scaled: scaled.values.clone(),
        size,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/geometry.rs"]
mod tests;
