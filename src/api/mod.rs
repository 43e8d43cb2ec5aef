use crate::api::error::ApiError;
use crate::models::{Asset, Forecast, MetricsSummary, Model, TokenResponse};
use crate::session::Credential;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// Exchanges a username and password for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// Lists all assets known to the asset service.
    async fn list_assets(&self, credential: &Credential) -> Result<Vec<Asset>, ApiError>;

    /// Lists all registered models.
    async fn list_models(&self, credential: &Credential) -> Result<Vec<Model>, ApiError>;

    /// Returns the most recent forecasts for one asset.
    async fn forecast_history(
        &self,
        credential: &Credential,
        asset_id: &str,
    ) -> Result<Vec<Forecast>, ApiError>;

    /// Returns the accuracy summary for one asset.
    async fn metrics_summary(
        &self,
        credential: &Credential,
        asset_id: &str,
    ) -> Result<MetricsSummary, ApiError>;
}
