use crate::input::{InputError, NetworkReport};
use crate::model::axes::AxisRange;
use crate::model::profile::{MetricKey, RadarProfile};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub labels: Vec<String>,
    pub metrics: Vec<MetricKey>,
    pub values: Vec<f64>,
    pub ranges: Vec<AxisRange>,
}

impl Stage1Output {
    pub fn label_refs(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }
}

pub fn run_stage1(
    report: &NetworkReport,
    profile: &RadarProfile,
) -> Result<Stage1Output, InputError> {
    let n = profile.axes.len();
    let mut out = Stage1Output {
        labels: Vec::with_capacity(n),
        metrics: Vec::with_capacity(n),
        values: Vec::with_capacity(n),
        ranges: Vec::with_capacity(n),
    };
    for axis in &profile.axes {
        let value = report.metric(axis.metric)?;
        let range = axis.range.resolve(value);
        tracing::debug!(
            "axis {}: metric={} value={} range=({}, {})",
            axis.label,
            axis.metric.as_str(),
            value,
            range.low,
            range.high
        );
        out.labels.push(axis.label.clone());
        out.metrics.push(axis.metric);
        out.values.push(value);
        out.ranges.push(range);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_metrics.rs"]
mod tests;
