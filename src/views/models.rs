//! Models view: fetches the model registry on mount and shows one card per model.

use super::fetch_state::{Completion, FetchState};
use super::format::local_date;
use super::{Fetch, FetchRequest};
use crate::api::error::ApiError;
use crate::models::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCard {
    pub name: String,
    pub model_type: String,
    pub description: Option<String>,
    pub created: String,
}

#[derive(Debug, Default)]
pub struct ModelsView {
    state: FetchState<Vec<Model>>,
}

impl ModelsView {
    /// Creates the view together with its initial fetch.
    pub fn mount() -> (Self, Fetch) {
        let mut view = Self::default();
        let seq = view.state.begin();
        (
            view,
            Fetch {
                seq,
                request: FetchRequest::Models,
            },
        )
    }

    pub fn complete(&mut self, seq: u64, result: Result<Vec<Model>, ApiError>) -> Completion {
        self.state.complete(seq, result)
    }

    pub fn models(&self) -> &[Model] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[cfg(test)]
    pub fn has_data(&self) -> bool {
        self.state.data().is_some()
    }

    #[cfg(test)]
    pub fn requests_issued(&self) -> u64 {
        self.state.issued()
    }
}

pub fn cards(models: &[Model]) -> Vec<ModelCard> {
    models
        .iter()
        .map(|model| ModelCard {
            name: model.name.clone(),
            model_type: model.model_type.clone(),
            description: model.description.clone().filter(|d| !d.is_empty()),
            created: local_date(&model.created_at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_skip_empty_description() {
        let models = vec![
            Model {
                id: "m1".into(),
                name: "lgbm-daily".into(),
                model_type: "lightgbm".into(),
                description: Some(String::new()),
                created_at: "2024-01-01".into(),
            },
            Model {
                id: "m2".into(),
                name: "lstm".into(),
                model_type: "neural".into(),
                description: Some("Sequence model".into()),
                created_at: "2024-02-01".into(),
            },
        ];

        let cards = cards(&models);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].description, None);
        assert_eq!(cards[0].created, "2024-01-01");
        assert_eq!(cards[1].description.as_deref(), Some("Sequence model"));
    }

    #[test]
    fn test_mount_fetches_models() {
        let (view, fetch) = ModelsView::mount();
        assert_eq!(fetch.request, FetchRequest::Models);
        assert!(view.is_loading());
        assert!(!view.has_data());
    }
}
