use std::path::Path;

use thiserror::Error;

pub mod report;
pub mod source;

pub use report::NetworkReport;
use source::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self {
        InputError::Parse(value.to_string())
    }
}

pub fn load_report(path: &Path) -> Result<NetworkReport, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "report not found: {}",
            path.display()
        )));
    }
    tracing::info!("loading report: {}", path.display());
    let reader = open_maybe_gz(path)?;
    let report: NetworkReport = serde_json::from_reader(reader)?;
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
