use serde::Deserialize;
use serde_json::Value;

use crate::input::InputError;
use crate::model::profile::MetricKey;

/// Network-scan summary as produced by the capture analyzer. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkReport {
    pub ips: f64,
    pub response_avg: f64,
    pub ports: Value,
    pub ip_life: IpLife,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IpLife {
    #[serde(rename = "1st_quartile")]
    pub first_quartile: f64,
    pub variance: Numeric,
}

/// Some analyzers serialize large floats as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub fn as_f64(&self) -> Result<f64, InputError> {
        let value = match self {
            Numeric::Number(v) => *v,
            Numeric::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                InputError::InvalidInput(format!("not a number: {s:?}"))
            })?,
        };
        if !value.is_finite() {
            return Err(InputError::InvalidInput(format!(
                "not a finite number: {value}"
            )));
        }
        Ok(value)
    }
}

impl NetworkReport {
    pub fn metric(&self, key: MetricKey) -> Result<f64, InputError> {
        match key {
            MetricKey::Ips => Ok(self.ips),
            MetricKey::ResponseAvg => Ok(self.response_avg),
            MetricKey::Ports => port_count(&self.ports),
            MetricKey::IpLifeFirstQuartile => Ok(self.ip_life.first_quartile),
            MetricKey::IpLifeVariance => self.ip_life.variance.as_f64(),
        }
    }
}

fn port_count(ports: &Value) -> Result<f64, InputError> {
    match ports {
        Value::Array(items) => Ok(items.len() as f64),
        Value::Object(map) => Ok(map.len() as f64),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| InputError::InvalidInput("ports count out of range".to_string())),
        other => Err(InputError::InvalidInput(format!(
            "ports must be a list, map or count, got {other}"
        ))),
    }
}
