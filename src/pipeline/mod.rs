use thiserror::Error;

use crate::input::InputError;
use crate::model::axes::ScaleError;
use crate::model::profile::ProfileError;
use crate::render::geometry::RenderError;

pub mod stage1_metrics;
pub mod stage2_scale;
pub mod stage3_report;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("scaling failed: {0}")]
    Scale(#[from] ScaleError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
