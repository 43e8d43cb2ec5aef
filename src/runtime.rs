//! Runtime for executing view fetches off the UI loop

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::events::AppEvent;
use crate::views::login::LoginRequest;
use crate::views::{FetchCommand, FetchOutcome, FetchRequest, FetchResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Performs one fetch against the gateway.
pub async fn perform_fetch(
    api: &dyn AdminApi,
    command: &FetchCommand,
) -> Result<FetchOutcome, ApiError> {
    let credential = &command.credential;
    match &command.request {
        FetchRequest::Assets => api.list_assets(credential).await.map(FetchOutcome::Assets),
        FetchRequest::Models => api.list_models(credential).await.map(FetchOutcome::Models),
        FetchRequest::Forecasts { asset_id } => api
            .forecast_history(credential, asset_id)
            .await
            .map(FetchOutcome::Forecasts),
        FetchRequest::Metrics { asset_id } => api
            .metrics_summary(credential, asset_id)
            .await
            .map(FetchOutcome::Metrics),
    }
}

/// Runs a fetch on its own task and reports the result to the UI loop.
///
/// Nothing is reported if `cancel` fires first.
pub fn spawn_fetch(
    api: Arc<dyn AdminApi>,
    command: FetchCommand,
    cancel: CancellationToken,
    sender: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Fetch {:?} cancelled", command.request);
                return;
            }
            result = perform_fetch(api.as_ref(), &command) => result,
        };
        let fetched = FetchResult {
            mount: command.mount,
            seq: command.seq,
            tab: command.request.tab(),
            result,
        };
        let _ = sender.send(AppEvent::Fetched(fetched)).await;
    })
}

/// Runs the authentication exchange on its own task.
pub fn spawn_login(
    api: Arc<dyn AdminApi>,
    request: LoginRequest,
    sender: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = api.login(&request.username, &request.password).await;
        let _ = sender.send(AppEvent::LoginFinished(result)).await;
    })
}
