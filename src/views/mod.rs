//! Resource views
//!
//! Each tab of the dashboard is backed by one view object holding that tab's
//! fetched data, loading flag and input. A view object lives exactly as long
//! as its tab is active. Views never perform I/O: an action that needs the
//! network returns a [`Fetch`] for the runtime to execute.

pub mod assets;
pub mod fetch_state;
pub mod forecasts;
pub mod format;
pub mod login;
pub mod metrics;
pub mod models;

use crate::api::error::ApiError;
use crate::models::{Asset, Forecast, MetricsSummary, Model};
use crate::session::Credential;
use assets::AssetsView;
use fetch_state::Completion;
use forecasts::ForecastsView;
use metrics::MetricsView;
use models::ModelsView;

/// The mutually exclusive dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum Tab {
    #[default]
    Assets,
    Forecasts,
    Models,
    Metrics,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Assets, Tab::Forecasts, Tab::Models, Tab::Metrics];

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// An edit applied to a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Clear,
}

impl InputEdit {
    pub fn apply(self, text: &mut String) {
        match self {
            InputEdit::Insert(c) => text.push(c),
            InputEdit::Backspace => {
                text.pop();
            }
            InputEdit::Clear => text.clear(),
        }
    }
}

/// What a view wants fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Assets,
    Models,
    Forecasts { asset_id: String },
    Metrics { asset_id: String },
}

impl FetchRequest {
    pub fn tab(&self) -> Tab {
        match self {
            FetchRequest::Assets => Tab::Assets,
            FetchRequest::Models => Tab::Models,
            FetchRequest::Forecasts { .. } => Tab::Forecasts,
            FetchRequest::Metrics { .. } => Tab::Metrics,
        }
    }
}

/// A fetch issued by a view, tagged with the view's sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetch {
    pub seq: u64,
    pub request: FetchRequest,
}

/// A fetch ready for execution: which mount issued it and with what credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    pub mount: u64,
    pub seq: u64,
    pub credential: Credential,
    pub request: FetchRequest,
}

/// Parsed payload of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Assets(Vec<Asset>),
    Models(Vec<Model>),
    Forecasts(Vec<Forecast>),
    Metrics(MetricsSummary),
}

impl FetchOutcome {
    /// Number of records, for activity log messages.
    pub fn len(&self) -> usize {
        match self {
            FetchOutcome::Assets(items) => items.len(),
            FetchOutcome::Models(items) => items.len(),
            FetchOutcome::Forecasts(items) => items.len(),
            FetchOutcome::Metrics(_) => 1,
        }
    }
}

/// A finished fetch as it comes back to the UI loop.
#[derive(Debug)]
pub struct FetchResult {
    pub mount: u64,
    pub seq: u64,
    pub tab: Tab,
    pub result: Result<FetchOutcome, ApiError>,
}

/// The view object of the active tab.
#[derive(Debug)]
pub enum ActiveView {
    Assets(AssetsView),
    Forecasts(ForecastsView),
    Models(ModelsView),
    Metrics(MetricsView),
}

impl ActiveView {
    /// Creates the view object for `tab`, with the fetch it issues on mount.
    pub fn mount(tab: Tab) -> (Self, Option<Fetch>) {
        match tab {
            Tab::Assets => {
                let (view, fetch) = AssetsView::mount();
                (ActiveView::Assets(view), Some(fetch))
            }
            Tab::Models => {
                let (view, fetch) = ModelsView::mount();
                (ActiveView::Models(view), Some(fetch))
            }
            Tab::Forecasts => (ActiveView::Forecasts(ForecastsView::mount()), None),
            Tab::Metrics => (ActiveView::Metrics(MetricsView::mount()), None),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ActiveView::Assets(_) => Tab::Assets,
            ActiveView::Forecasts(_) => Tab::Forecasts,
            ActiveView::Models(_) => Tab::Models,
            ActiveView::Metrics(_) => Tab::Metrics,
        }
    }

    /// Routes an edit to the view's input, if it has one.
    pub fn edit(&mut self, edit: InputEdit) -> Option<Fetch> {
        match self {
            ActiveView::Forecasts(view) => view.edit(edit),
            ActiveView::Metrics(view) => {
                view.edit(edit);
                None
            }
            ActiveView::Assets(_) | ActiveView::Models(_) => None,
        }
    }

    /// The explicit load action. Only the metrics view has one.
    pub fn load(&mut self) -> Option<Fetch> {
        match self {
            ActiveView::Metrics(view) => view.load(),
            _ => None,
        }
    }

    /// Whether the view takes text input.
    pub fn has_input(&self) -> bool {
        matches!(self, ActiveView::Forecasts(_) | ActiveView::Metrics(_))
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ActiveView::Assets(view) => view.is_loading(),
            ActiveView::Forecasts(view) => view.is_loading(),
            ActiveView::Models(view) => view.is_loading(),
            ActiveView::Metrics(view) => view.is_loading(),
        }
    }

    /// Hands a response to the view. A payload of the wrong kind is treated as stale.
    pub fn complete(&mut self, seq: u64, result: Result<FetchOutcome, ApiError>) -> Completion {
        match (self, result) {
            (ActiveView::Assets(view), Ok(FetchOutcome::Assets(items))) => {
                view.complete(seq, Ok(items))
            }
            (ActiveView::Assets(view), Err(e)) => view.complete(seq, Err(e)),
            (ActiveView::Models(view), Ok(FetchOutcome::Models(items))) => {
                view.complete(seq, Ok(items))
            }
            (ActiveView::Models(view), Err(e)) => view.complete(seq, Err(e)),
            (ActiveView::Forecasts(view), Ok(FetchOutcome::Forecasts(items))) => {
                view.complete(seq, Ok(items))
            }
            (ActiveView::Forecasts(view), Err(e)) => view.complete(seq, Err(e)),
            (ActiveView::Metrics(view), Ok(FetchOutcome::Metrics(summary))) => {
                view.complete(seq, Ok(summary))
            }
            (ActiveView::Metrics(view), Err(e)) => view.complete(seq, Err(e)),
            _ => Completion::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::default(), Tab::Assets);
        assert_eq!(Tab::Assets.next(), Tab::Forecasts);
        assert_eq!(Tab::Metrics.next(), Tab::Assets);
        assert_eq!(Tab::Assets.previous(), Tab::Metrics);
        assert_eq!(Tab::Models.to_string(), "Models");
    }

    #[test]
    fn test_mount_fetches_only_for_list_views() {
        assert!(ActiveView::mount(Tab::Assets).1.is_some());
        assert!(ActiveView::mount(Tab::Models).1.is_some());
        assert!(ActiveView::mount(Tab::Forecasts).1.is_none());
        assert!(ActiveView::mount(Tab::Metrics).1.is_none());
    }

    #[test]
    fn test_mismatched_payload_is_ignored() {
        let (mut view, fetch) = ActiveView::mount(Tab::Assets);
        let seq = fetch.unwrap().seq;
        let outcome = view.complete(seq, Ok(FetchOutcome::Models(vec![])));
        assert!(matches!(outcome, Completion::Stale));
        assert!(view.is_loading());
    }

    #[test]
    fn test_input_edit() {
        let mut text = String::from("ab");
        InputEdit::Backspace.apply(&mut text);
        InputEdit::Insert('z').apply(&mut text);
        assert_eq!(text, "az");
        InputEdit::Clear.apply(&mut text);
        assert!(text.is_empty());
    }
}
