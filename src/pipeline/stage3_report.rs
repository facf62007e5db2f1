use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::axes::ScaledVector;
use crate::model::profile::RadarProfile;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_metrics::Stage1Output;
use crate::render::geometry::build_chart;
use crate::render::svg::render_radar_svg;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{AxisSummary, RadarSummary};

pub const CHART_FILE: &str = "radar-chart.svg";
pub const SUMMARY_FILE: &str = "radar.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub input_path: &'a Path,
    pub profile: &'a RadarProfile,
    pub metrics: &'a Stage1Output,
    pub scaled: &'a ScaledVector,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub chart_path: PathBuf,
    pub summary_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn write_reports(input: &Stage3Input<'_>, out_dir: &Path) -> Result<Stage3Output, PipelineError> {
    fs::create_dir_all(out_dir)?;

    let labels = input.metrics.label_refs();
    let chart = build_chart(
        &labels,
        &input.metrics.ranges,
        input.scaled,
        input.profile.n_ordinate_levels,
        input.profile.size,
    )?;
    let chart_path = out_dir.join(CHART_FILE);
    write_text(&chart_path, &render_radar_svg(&chart)?)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join(SUMMARY_FILE);
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_text(&report_path, &render_report_text(&summary))?;

    Ok(Stage3Output {
        chart_path,
        summary_path,
        report_path,
    })
}

pub fn build_summary(input: &Stage3Input<'_>) -> RadarSummary {
    let metrics = input.metrics;
    let axes = metrics
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| AxisSummary {
            label: label.clone(),
            metric: metrics.metrics[i].as_str(),
            low: metrics.ranges[i].low,
            high: metrics.ranges[i].high,
            inverted: metrics.ranges[i].is_inverted(),
            raw: metrics.values[i],
            scaled: input.scaled.values[i],
        })
        .collect();
    RadarSummary {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        input: input.input_path.display().to_string(),
        profile: input.profile.name.clone(),
        frame: input.scaled.frame,
        axes,
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
