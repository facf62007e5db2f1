use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::axes::AxisRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKey {
    #[serde(rename = "ips")]
    Ips,
    #[serde(rename = "response_avg")]
    ResponseAvg,
    #[serde(rename = "ports")]
    Ports,
    #[serde(rename = "ip_life.1st_quartile")]
    IpLifeFirstQuartile,
    #[serde(rename = "ip_life.variance")]
    IpLifeVariance,
}

impl MetricKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Ips => "ips",
            MetricKey::ResponseAvg => "response_avg",
            MetricKey::Ports => "ports",
            MetricKey::IpLifeFirstQuartile => "ip_life.1st_quartile",
            MetricKey::IpLifeVariance => "ip_life.variance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeSpec {
    Fixed { low: f64, high: f64 },
    /// Upper bound is `factor` times the axis' own value.
    Relative { low: f64, factor: f64 },
}

impl RangeSpec {
    pub fn resolve(&self, value: f64) -> AxisRange {
        match *self {
            RangeSpec::Fixed { low, high } => AxisRange::new(low, high),
            RangeSpec::Relative { low, factor } => AxisRange::new(low, factor * value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
    pub metric: MetricKey,
    pub range: RangeSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub name: String,
    pub axes: Vec<AxisSpec>,
    #[serde(default = "default_levels")]
    pub n_ordinate_levels: usize,
    #[serde(default = "default_size")]
    pub size: u32,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid profile: {0}")]
    Invalid(String),
}

pub const MIN_AXES: usize = 3;

fn default_levels() -> usize {
    6
}

fn default_size() -> u32 {
    600
}

fn axis(label: &str, metric: MetricKey, range: RangeSpec) -> AxisSpec {
    AxisSpec {
        label: label.to_string(),
        metric,
        range,
    }
}

impl RadarProfile {
    /// Scale sized for multi-gigabyte captures.
    pub fn network_v1() -> Self {
        Self {
            name: "network_v1".to_string(),
            axes: vec![
                axis(
                    "ips",
                    MetricKey::Ips,
                    RangeSpec::Fixed {
                        low: 0.0,
                        high: 2000.0,
                    },
                ),
                axis(
                    "response_avg",
                    MetricKey::ResponseAvg,
                    RangeSpec::Fixed {
                        low: 0.0,
                        high: 4.0,
                    },
                ),
                axis(
                    "ports",
                    MetricKey::Ports,
                    RangeSpec::Fixed {
                        low: 0.0,
                        high: 1000.0,
                    },
                ),
                axis(
                    "1st_quartile",
                    MetricKey::IpLifeFirstQuartile,
                    RangeSpec::Fixed { low: 0.0, high: 3.0 },
                ),
                axis(
                    "variance en s",
                    MetricKey::IpLifeVariance,
                    RangeSpec::Relative {
                        low: 0.0,
                        factor: 2.0,
                    },
                ),
            ],
            n_ordinate_levels: default_levels(),
            size: default_size(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path)?;
        let profile: RadarProfile = serde_json::from_str(&text)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.axes.len() < MIN_AXES {
            return Err(ProfileError::Invalid(format!(
                "need at least {MIN_AXES} axes, got {}",
                self.axes.len()
            )));
        }
        if self.n_ordinate_levels < 2 {
            return Err(ProfileError::Invalid(
                "n_ordinate_levels must be at least 2".to_string(),
            ));
        }
        if self.size == 0 {
            return Err(ProfileError::Invalid("size must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
