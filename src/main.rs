mod input;
mod logging;
mod model;
mod pipeline;
mod render;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::load_report;
use crate::model::profile::{ProfileError, RadarProfile};
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_metrics::run_stage1;
use crate::pipeline::stage2_scale::run_stage2;
use crate::pipeline::stage3_report::{Stage3Input, write_reports};

#[derive(Debug, Parser)]
#[command(name = "kira-netradar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the radar chart and summaries for one report.
    Run(RunConfig),
}

#[derive(Debug, Clone, Args)]
struct RunConfig {
    /// Network-scan report (JSON, optionally gzipped).
    #[arg(long)]
    input: PathBuf,
    /// Output directory.
    #[arg(long)]
    out: PathBuf,
    /// JSON axis profile replacing the built-in one.
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Number of grid levels per axis.
    #[arg(long)]
    levels: Option<usize>,
    /// Chart width and height in pixels.
    #[arg(long)]
    size: Option<u32>,
    /// Log at debug level, ignoring RUST_LOG.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let Command::Run(config) = Cli::parse().command;
    logging::init(config.verbose);
    if let Err(err) = run(&config) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), PipelineError> {
    let profile = resolve_profile(config)?;
    tracing::info!(
        "profile {}: {} axes, {} levels",
        profile.name,
        profile.axes.len(),
        profile.n_ordinate_levels
    );

    let report = load_report(&config.input)?;
    let stage1 = run_stage1(&report, &profile)?;
    let stage2 = run_stage2(&stage1)?;

    let input = Stage3Input {
        input_path: &config.input,
        profile: &profile,
        metrics: &stage1,
        scaled: &stage2,
        tool_name: "kira-netradar".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let outputs = write_reports(&input, &config.out)?;
    tracing::info!(
        "wrote {}, {} and {}",
        outputs.chart_path.display(),
        outputs.summary_path.display(),
        outputs.report_path.display()
    );

    Ok(())
}

fn resolve_profile(config: &RunConfig) -> Result<RadarProfile, ProfileError> {
    let mut profile = match &config.profile {
        Some(path) => RadarProfile::load(path)?,
        None => RadarProfile::network_v1(),
    };
    if let Some(levels) = config.levels {
        profile.n_ordinate_levels = levels;
    }
    if let Some(size) = config.size {
        profile.size = size;
    }
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    let argv = std::iter::once("kira-netradar".to_string()).chain(args.iter().cloned());
    let cli = Cli::try_parse_from(argv).map_err(|e| e.to_string())?;
    let Command::Run(config) = cli.command;
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
