//! Forecasts view
//!
//! Forecasts are scoped to the asset id typed by the operator. Every change
//! to that input issues one fetch, unless the input is blank.

use super::fetch_state::{Completion, FetchState};
use super::format::local_date;
use super::{Fetch, FetchRequest, InputEdit};
use crate::api::error::ApiError;
use crate::models::Forecast;

/// One point of the forecast chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub forecast: f64,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Default)]
pub struct ForecastsView {
    asset_id: String,
    state: FetchState<Vec<Forecast>>,
}

impl ForecastsView {
    /// Creates the view. Nothing is fetched until an asset id is entered.
    pub fn mount() -> Self {
        Self::default()
    }

    /// Applies an edit to the asset-id input, returning the fetch it triggers.
    pub fn edit(&mut self, edit: InputEdit) -> Option<Fetch> {
        let before = self.asset_id.clone();
        edit.apply(&mut self.asset_id);
        if self.asset_id == before {
            return None;
        }

        let asset_id = self.asset_id.trim();
        if asset_id.is_empty() {
            return None;
        }
        let request = FetchRequest::Forecasts {
            asset_id: asset_id.to_string(),
        };
        let seq = self.state.begin();
        Some(Fetch { seq, request })
    }

    pub fn complete(&mut self, seq: u64, result: Result<Vec<Forecast>, ApiError>) -> Completion {
        self.state.complete(seq, result)
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn forecasts(&self) -> &[Forecast] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        chart_points(self.forecasts())
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[cfg(test)]
    pub fn requests_issued(&self) -> u64 {
        self.state.issued()
    }
}

/// Projects forecasts into chart points, preserving order.
pub fn chart_points(forecasts: &[Forecast]) -> Vec<ChartPoint> {
    forecasts
        .iter()
        .map(|f| ChartPoint {
            date: local_date(&f.timestamp_forecasted),
            forecast: f.point_forecast,
            low: f.low_bound,
            high: f.high_bound,
        })
        .collect()
}
