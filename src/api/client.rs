//! Forecast API Gateway Client
//!
//! A JSON-over-HTTP client for the gateway endpoints the console reads from.

use crate::api::AdminApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{CONNECT_TIMEOUT, FORECAST_HISTORY_LIMIT};
use crate::environment::Environment;
use crate::models::{Asset, Forecast, MetricsSummary, MetricsSummaryResponse, Model, TokenResponse};
use crate::session::Credential;
use reqwest::{Client, ClientBuilder, Request, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("forecast-admin/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(CONNECT_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn login_request(&self, username: &str, password: &str) -> Result<Request, ApiError> {
        let request = self
            .client
            .post(self.build_url("auth/login"))
            .form(&[("username", username), ("password", password)])
            .build()?;
        Ok(request)
    }

    fn authorized_get(
        &self,
        endpoint: &str,
        credential: &Credential,
        query: &[(&str, &str)],
    ) -> Result<Request, ApiError> {
        let mut builder = self
            .client
            .get(self.build_url(endpoint))
            .bearer_auth(credential.as_str());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        Ok(builder.build()?)
    }

    fn forecast_history_request(
        &self,
        credential: &Credential,
        asset_id: &str,
    ) -> Result<Request, ApiError> {
        let limit = FORECAST_HISTORY_LIMIT.to_string();
        self.authorized_get(
            "api/forecasts/history",
            credential,
            &[("asset_id", asset_id), ("limit", limit.as_str())],
        )
    }

    fn metrics_summary_request(
        &self,
        credential: &Credential,
        asset_id: &str,
    ) -> Result<Request, ApiError> {
        let endpoint = format!(
            "api/admin/monitoring/metrics/{}/summary",
            urlencoding::encode(asset_id)
        );
        self.authorized_get(&endpoint, credential, &[])
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        log::debug!("{} {}", request.method(), request.url().path());
        let response = self.client.execute(request).await?;
        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl AdminApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request = self.login_request(username, password)?;
        self.send_json(request).await
    }

    async fn list_assets(&self, credential: &Credential) -> Result<Vec<Asset>, ApiError> {
        let request = self.authorized_get("api/assets", credential, &[])?;
        self.send_json(request).await
    }

    async fn list_models(&self, credential: &Credential) -> Result<Vec<Model>, ApiError> {
        let request = self.authorized_get("api/models", credential, &[])?;
        self.send_json(request).await
    }

    async fn forecast_history(
        &self,
        credential: &Credential,
        asset_id: &str,
    ) -> Result<Vec<Forecast>, ApiError> {
        let request = self.forecast_history_request(credential, asset_id)?;
        self.send_json(request).await
    }

    async fn metrics_summary(
        &self,
        credential: &Credential,
        asset_id: &str,
    ) -> Result<MetricsSummary, ApiError> {
        let request = self.metrics_summary_request(credential, asset_id)?;
        let response: MetricsSummaryResponse = self.send_json(request).await?;
        response
            .metrics
            .into_summary()
            .ok_or_else(|| ApiError::EmptyMetrics(asset_id.to_string()))
    }
}
