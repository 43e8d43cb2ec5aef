pub mod cli_consts {
    //! Console configuration constants

    use std::time::Duration;

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Gateway used when neither `--api-url` nor `FORECAST_API_URL` is set.
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";

    /// Environment variable overriding the gateway base URL.
    pub const API_URL_ENV_VAR: &str = "FORECAST_API_URL";

    /// Number of forecast records requested per history fetch.
    pub const FORECAST_HISTORY_LIMIT: u32 = 100;

    /// Time allowed to establish a connection. No whole-request timeout is
    /// applied, so a hung response leaves the view loading.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    // =============================================================================
    // PERSISTENCE
    // =============================================================================

    /// Directory under `$HOME` holding the console's files.
    pub const CONFIG_DIR: &str = ".forecast-admin";

    /// Name of the file holding the persisted credential.
    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying network results back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How long the UI loop waits for a key press before redrawing.
    pub const UI_TICK: Duration = Duration::from_millis(100);
}
