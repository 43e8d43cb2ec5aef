//! Assets view: fetches the asset list on mount and shows it as a table.

use super::fetch_state::{Completion, FetchState};
use super::{Fetch, FetchRequest};
use crate::api::error::ApiError;
use crate::models::Asset;

/// Table header, in display order.
pub const COLUMNS: [&str; 4] = ["Ticker", "Name", "Type", "Source"];

#[derive(Debug, Default)]
pub struct AssetsView {
    state: FetchState<Vec<Asset>>,
}

impl AssetsView {
    /// Creates the view together with its initial fetch.
    pub fn mount() -> (Self, Fetch) {
        let mut view = Self::default();
        let seq = view.state.begin();
        (
            view,
            Fetch {
                seq,
                request: FetchRequest::Assets,
            },
        )
    }

    pub fn complete(&mut self, seq: u64, result: Result<Vec<Asset>, ApiError>) -> Completion {
        self.state.complete(seq, result)
    }

    pub fn assets(&self) -> &[Asset] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[cfg(test)]
    pub fn requests_issued(&self) -> u64 {
        self.state.issued()
    }
}

/// Projects assets into table rows, one per asset, in API order.
pub fn table_rows(assets: &[Asset]) -> Vec<[String; 4]> {
    assets
        .iter()
        .map(|asset| {
            [
                asset.ticker.clone(),
                asset.name.clone(),
                asset.asset_type.clone(),
                asset
                    .source
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Asset {
        Asset {
            id: "1".into(),
            ticker: "AAPL".into(),
            name: "Apple".into(),
            asset_type: "equity".into(),
            source: Some("nasdaq".into()),
            created_at: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_mount_issues_one_fetch() {
        let (view, fetch) = AssetsView::mount();
        assert_eq!(fetch.request, FetchRequest::Assets);
        assert_eq!(fetch.seq, 1);
        assert!(view.is_loading());
        assert_eq!(view.requests_issued(), 1);
    }

    #[test]
    fn test_single_asset_gives_single_row() {
        let (mut view, fetch) = AssetsView::mount();
        view.complete(fetch.seq, Ok(vec![apple()]));

        let rows = table_rows(view.assets());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ["AAPL", "Apple", "equity", "nasdaq"]);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_missing_source_renders_dash() {
        let mut asset = apple();
        asset.source = None;
        assert_eq!(table_rows(&[asset])[0][3], "-");
    }

    #[test]
    fn test_rows_keep_api_order() {
        let mut second = apple();
        second.ticker = "MSFT".into();
        let rows = table_rows(&[second, apple()]);
        assert_eq!(rows[0][0], "MSFT");
        assert_eq!(rows[1][0], "AAPL");
    }
}
