mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod runtime;
mod session;
mod shell;
mod ui;
mod views;

use crate::api::{AdminApi, ApiClient};
use crate::config::get_config_path;
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::environment::Environment;
use crate::session::{FileSessionStore, run_headless_fetch, run_headless_login, run_tui_mode};
use crate::views::FetchRequest;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Forecast admin console
struct Args {
    /// Base URL of the API gateway. Overrides FORECAST_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute. Defaults to the interactive dashboard.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Disable background colors
        #[arg(long, default_value = "false")]
        no_background_color: bool,
    },
    /// Log in and save the access token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Print the asset list
    Assets,
    /// Print the model registry
    Models,
    /// Print the forecast history of one asset
    Forecasts {
        #[arg(long, value_name = "ASSET_ID")]
        asset_id: String,
    },
    /// Print the accuracy metrics of one asset
    Metrics {
        #[arg(long, value_name = "ASSET_ID")]
        asset_id: String,
    },
}

fn resolve_environment(flag: Option<&str>) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = flag {
        return url
            .parse::<Environment>()
            .map_err(|_| format!("Invalid API URL: {}", url).into());
    }
    let env_var = std::env::var(API_URL_ENV_VAR).ok();
    Ok(Environment::resolve(None, env_var.as_deref()))
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let environment = resolve_environment(args.api_url.as_deref())?;
    let mut store = FileSessionStore::new(get_config_path()?);
    let client = ApiClient::new(environment.clone())?;

    let request = match args.command.unwrap_or(Command::Start {
        no_background_color: false,
    }) {
        Command::Start {
            no_background_color,
        } => {
            let api: Arc<dyn AdminApi> = Arc::new(client);
            return run_tui_mode(Box::new(store), api, environment, !no_background_color).await;
        }
        Command::Login { username, password } => {
            return run_headless_login(&client, &mut store, &username, &password).await;
        }
        Command::Assets => FetchRequest::Assets,
        Command::Models => FetchRequest::Models,
        Command::Forecasts { asset_id } => FetchRequest::Forecasts { asset_id },
        Command::Metrics { asset_id } => FetchRequest::Metrics { asset_id },
    };
    run_headless_fetch(&client, &store, request).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if !matches!(args.command, None | Some(Command::Start { .. })) {
        logging::init_stderr_logger();
    }
    if let Err(e) = run(args).await {
        print_cmd_error!("Command failed", e.to_string().as_str());
        std::process::exit(1);
    }
}
