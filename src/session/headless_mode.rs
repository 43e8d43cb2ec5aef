//! Headless mode execution
//!
//! One-shot subcommands: log in, or fetch one resource and print it.

use super::{Credential, SessionStore};
use crate::api::AdminApi;
use crate::runtime::perform_fetch;
use crate::views::assets::{COLUMNS, table_rows};
use crate::views::forecasts::chart_points;
use crate::views::format::two_decimals;
use crate::views::login::LoginForm;
use crate::views::metrics::tiles;
use crate::views::models::cards;
use crate::views::{FetchCommand, FetchOutcome, FetchRequest};
use crate::{print_cmd_success, print_cmd_warn};
use std::error::Error;

pub const NOT_LOGGED_IN: &str = "Not logged in. Run `forecast-admin login` first.";

/// Exchanges the given credentials for a token and persists it.
pub async fn run_headless_login(
    api: &dyn AdminApi,
    store: &mut dyn SessionStore,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn Error>> {
    let mut form = LoginForm::with_credentials(username, password);
    let request = form.submit()?;

    let token = api.login(&request.username, &request.password).await?;
    let credential = Credential::parse(token.access_token)
        .ok_or("Login response carried an empty access token")?;
    store
        .save(&credential)
        .map_err(|e| format!("Failed to save credential: {}", e))?;

    print_cmd_success!("Logged in", "as {}", request.username);
    Ok(())
}

/// Fetches one resource with the stored credential and prints it.
pub async fn run_headless_fetch(
    api: &dyn AdminApi,
    store: &dyn SessionStore,
    request: FetchRequest,
) -> Result<(), Box<dyn Error>> {
    let credential = store.load().ok_or(NOT_LOGGED_IN)?;
    let request = match request {
        FetchRequest::Forecasts { asset_id } => FetchRequest::Forecasts {
            asset_id: required_asset_id(&asset_id)?,
        },
        FetchRequest::Metrics { asset_id } => FetchRequest::Metrics {
            asset_id: required_asset_id(&asset_id)?,
        },
        other => other,
    };

    let command = FetchCommand {
        mount: 0,
        seq: 0,
        credential,
        request,
    };
    let outcome = match perform_fetch(api, &command).await {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_unauthorized() {
                print_cmd_warn!("Credential rejected", "run `forecast-admin login` again");
            }
            return Err(format!("{} fetch failed: {}", command.request.tab(), e).into());
        }
    };

    for line in format_outcome(&outcome) {
        println!("{}", line);
    }
    Ok(())
}

fn required_asset_id(asset_id: &str) -> Result<String, &'static str> {
    let asset_id = asset_id.trim();
    if asset_id.is_empty() {
        Err("Asset ID is required")
    } else {
        Ok(asset_id.to_string())
    }
}

/// Plain-text rendering of a fetched resource.
pub fn format_outcome(outcome: &FetchOutcome) -> Vec<String> {
    match outcome {
        FetchOutcome::Assets(assets) if assets.is_empty() => vec!["No assets found".to_string()],
        FetchOutcome::Assets(assets) => {
            let row = |c: [&str; 4]| format!("{:<10} {:<30} {:<14} {}", c[0], c[1], c[2], c[3]);
            let mut lines = vec![row(COLUMNS)];
            lines.extend(table_rows(assets).iter().map(|r| {
                row([r[0].as_str(), r[1].as_str(), r[2].as_str(), r[3].as_str()])
            }));
            lines
        }
        FetchOutcome::Forecasts(forecasts) if forecasts.is_empty() => {
            vec!["No forecasts for this asset".to_string()]
        }
        FetchOutcome::Forecasts(forecasts) => {
            let bound = |v: Option<f64>| v.map(two_decimals).unwrap_or_else(|| "-".to_string());
            let mut lines = vec![format!(
                "{:<12} {:>12} {:>12} {:>12}",
                "Date", "Forecast", "Low", "High"
            )];
            lines.extend(chart_points(forecasts).into_iter().map(|p| {
                format!(
                    "{:<12} {:>12} {:>12} {:>12}",
                    p.date,
                    two_decimals(p.forecast),
                    bound(p.low),
                    bound(p.high)
                )
            }));
            lines
        }
        FetchOutcome::Models(models) if models.is_empty() => {
            vec!["No models registered".to_string()]
        }
        FetchOutcome::Models(models) => cards(models)
            .into_iter()
            .flat_map(|card| {
                let mut lines = vec![format!("{} [{}]", card.name, card.model_type)];
                if let Some(description) = card.description {
                    lines.push(format!("  {}", description));
                }
                lines.push(format!("  Created {}", card.created));
                lines
            })
            .collect(),
        FetchOutcome::Metrics(summary) => tiles(summary)
            .into_iter()
            .map(|tile| format!("{:<10} {}", tile.label, tile.value))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAdminApi;
    use crate::api::error::ApiError;
    use crate::models::{Asset, MetricsSummary, TokenResponse};
    use crate::session::MemorySessionStore;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_login_persists_token() {
        let mut api = MockAdminApi::new();
        api.expect_login()
            .with(eq("admin"), eq("secret"))
            .times(1)
            .returning(|_, _| {
                Ok(TokenResponse {
                    access_token: "tok123".into(),
                    token_type: Some("bearer".into()),
                })
            });
        let mut store = MemorySessionStore::default();

        run_headless_login(&api, &mut store, "admin", "secret")
            .await
            .unwrap();

        assert_eq!(store.load().unwrap().as_str(), "tok123");
    }

    #[tokio::test]
    async fn test_login_validates_before_network() {
        let api = MockAdminApi::new();
        let mut store = MemorySessionStore::default();

        let err = run_headless_login(&api, &mut store, "", "secret")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Username is required");
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_store_empty() {
        let mut api = MockAdminApi::new();
        api.expect_login().returning(|_, _| {
            Err(ApiError::Http {
                status: 401,
                message: "Invalid credentials".into(),
            })
        });
        let mut store = MemorySessionStore::default();

        assert!(
            run_headless_login(&api, &mut store, "admin", "wrong")
                .await
                .is_err()
        );
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_fetch_requires_credential() {
        let api = MockAdminApi::new();
        let store = MemorySessionStore::default();

        let err = run_headless_fetch(&api, &store, FetchRequest::Assets)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), NOT_LOGGED_IN);
    }

    #[tokio::test]
    async fn test_fetch_trims_asset_id() {
        let mut api = MockAdminApi::new();
        api.expect_metrics_summary()
            .withf(|_, asset_id| asset_id == "7")
            .times(1)
            .returning(|_, _| {
                Ok(MetricsSummary {
                    mae: 1.0,
                    rmse: 1.0,
                    mape: 1.0,
                    coverage: None,
                })
            });
        let store = MemorySessionStore::with_credential(Credential::parse("tok123").unwrap());

        run_headless_fetch(
            &api,
            &store,
            FetchRequest::Metrics {
                asset_id: " 7 ".into(),
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_blank_asset_id_is_rejected() {
        let api = MockAdminApi::new();
        let store = MemorySessionStore::with_credential(Credential::parse("tok123").unwrap());

        let err = run_headless_fetch(
            &api,
            &store,
            FetchRequest::Forecasts {
                asset_id: "  ".into(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Asset ID is required");
    }

    #[tokio::test]
    async fn test_failed_fetch_names_the_resource() {
        let mut api = MockAdminApi::new();
        api.expect_list_models().returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".into(),
            })
        });
        let store = MemorySessionStore::with_credential(Credential::parse("tok123").unwrap());

        let err = run_headless_fetch(&api, &store, FetchRequest::Models)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Models fetch failed: HTTP error with status 500: boom"
        );
    }

    #[test]
    fn test_format_assets() {
        let lines = format_outcome(&FetchOutcome::Assets(vec![Asset {
            id: "1".into(),
            ticker: "AAPL".into(),
            name: "Apple Inc.".into(),
            asset_type: "equity".into(),
            source: None,
            created_at: "2024-01-01".into(),
        }]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Ticker"));
        assert!(lines[1].starts_with("AAPL"));
        assert!(lines[1].ends_with('-'));
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(
            format_outcome(&FetchOutcome::Models(vec![])),
            vec!["No models registered".to_string()]
        );
    }
}
