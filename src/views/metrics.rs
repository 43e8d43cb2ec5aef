//! Metrics view: accuracy summary for one asset, loaded on explicit request.

use super::fetch_state::{Completion, FetchState};
use super::format::two_decimals;
use super::{Fetch, FetchRequest, InputEdit};
use crate::api::error::ApiError;
use crate::models::MetricsSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Default)]
pub struct MetricsView {
    asset_id: String,
    state: FetchState<MetricsSummary>,
}

impl MetricsView {
    pub fn mount() -> Self {
        Self::default()
    }

    /// Edits the asset-id input. Editing never fetches.
    pub fn edit(&mut self, edit: InputEdit) {
        edit.apply(&mut self.asset_id);
    }

    /// The explicit load action. Issues one fetch if an asset id is present.
    pub fn load(&mut self) -> Option<Fetch> {
        let asset_id = self.asset_id.trim();
        if asset_id.is_empty() {
            return None;
        }
        let request = FetchRequest::Metrics {
            asset_id: asset_id.to_string(),
        };
        let seq = self.state.begin();
        Some(Fetch { seq, request })
    }

    pub fn complete(&mut self, seq: u64, result: Result<MetricsSummary, ApiError>) -> Completion {
        self.state.complete(seq, result)
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn summary(&self) -> Option<&MetricsSummary> {
        self.state.data()
    }

    pub fn tiles(&self) -> Vec<MetricTile> {
        self.summary().map(tiles).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[cfg(test)]
    pub fn requests_issued(&self) -> u64 {
        self.state.issued()
    }
}

/// Summary tiles. Coverage only appears when the service reported it.
pub fn tiles(summary: &MetricsSummary) -> Vec<MetricTile> {
    let mut tiles = vec![
        MetricTile {
            label: "MAE",
            value: two_decimals(summary.mae),
        },
        MetricTile {
            label: "RMSE",
            value: two_decimals(summary.rmse),
        },
        MetricTile {
            label: "MAPE",
            value: format!("{}%", two_decimals(summary.mape)),
        },
    ];
    if let Some(coverage) = summary.coverage {
        tiles.push(MetricTile {
            label: "Coverage",
            value: format!("{}%", two_decimals(coverage)),
        });
    }
    tiles
}
