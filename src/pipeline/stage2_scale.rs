use crate::model::axes::{ScaleError, ScaledVector, scale};
use crate::pipeline::stage1_metrics::Stage1Output;

pub fn run_stage2(metrics: &Stage1Output) -> Result<ScaledVector, ScaleError> {
    let scaled = scale(&metrics.values, &metrics.ranges).inspect_err(|err| {
        if let ScaleError::RangeViolation { axis, .. } = err
            && let Some(label) = metrics.labels.get(*axis)
        {
            tracing::error!("axis {label} is out of range");
        }
    })?;
    let inverted = metrics.ranges.iter().filter(|r| r.is_inverted()).count();
    tracing::info!(
        "scaled {} axes onto frame [{}, {}] ({} inverted)",
        scaled.values.len(),
        scaled.frame.low,
        scaled.frame.high,
        inverted
    );
    Ok(scaled)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scale.rs"]
mod tests;
