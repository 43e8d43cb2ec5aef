//! Resource types served by the API gateway.
//!
//! These are read-only projections of server state. Decimal columns arrive
//! either as JSON numbers or as decimal strings depending on the service, so
//! numeric fields accept both.

use serde::{Deserialize, Deserializer, Serialize};

/// A tradable asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub asset_type: String,
    #[serde(default)]
    pub source: Option<String>,
    pub created_at: String,
}

/// A single generated forecast for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub id: String,
    pub asset_id: String,
    #[serde(default)]
    pub model_version_id: Option<String>,
    pub timestamp_forecasted: String,
    pub horizon: i64,
    #[serde(deserialize_with = "decimal")]
    pub point_forecast: f64,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub low_bound: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub high_bound: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A registered forecasting model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub model_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

/// Accuracy metrics for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub mae: f64,
    pub rmse: f64,
    pub mape: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
}

/// Body of `GET /api/admin/monitoring/metrics/{asset_id}/summary`.
///
/// The monitoring service answers `"metrics": {}` when no forecast for the
/// asset has an actual value yet, so every metric is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSummaryResponse {
    pub metrics: RawMetrics,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetrics {
    #[serde(default, deserialize_with = "optional_decimal")]
    pub mae: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub rmse: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub mape: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub coverage: Option<f64>,
}

impl RawMetrics {
    /// Returns the summary when the three core metrics are present.
    pub fn into_summary(self) -> Option<MetricsSummary> {
        Some(MetricsSummary {
            mae: self.mae?,
            rmse: self.rmse?,
            mape: self.mape?,
            coverage: self.coverage,
        })
    }
}

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

impl Decimal {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Decimal::Number(value) => Ok(value),
            Decimal::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal '{}'", text))),
        }
    }
}

fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Decimal::deserialize(deserializer)?.into_f64()
}

fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer)?
        .map(Decimal::into_f64)
        .transpose()
}
