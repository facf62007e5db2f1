use serde::Serialize;

use crate::model::axes::AxisRange;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct AxisSummary {
    pub label: String,
    pub metric: &'static str,
    pub low: f64,
    pub high: f64,
    pub inverted: bool,
    pub raw: f64,
    pub scaled: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarSummary {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub profile: String,
    pub frame: AxisRange,
    pub axes: Vec<AxisSummary>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
