//! Dashboard shell
//!
//! Two states: Unauthenticated (login form) and Authenticated (tab bar plus
//! the active view). The shell moves to Authenticated once, either because
//! the session store already holds a credential or after a successful login,
//! and never moves back.

use crate::api::error::ApiError;
use crate::models::TokenResponse;
use crate::session::{Credential, SessionStore};
use crate::views::fetch_state::Completion;
use crate::views::login::{LoginForm, LoginRequest, SubmitError};
use crate::views::{ActiveView, Fetch, FetchCommand, FetchResult, InputEdit, Tab};

/// The authenticated half of the shell.
#[derive(Debug)]
pub struct Dashboard {
    credential: Credential,
    view: ActiveView,
    mount: u64,
}

impl Dashboard {
    fn open(credential: Credential, tab: Tab, mount: u64) -> (Self, Option<FetchCommand>) {
        let (view, fetch) = ActiveView::mount(tab);
        let dashboard = Self {
            credential,
            view,
            mount,
        };
        let command = fetch.map(|f| dashboard.command(f));
        (dashboard, command)
    }

    fn command(&self, fetch: Fetch) -> FetchCommand {
        FetchCommand {
            mount: self.mount,
            seq: fetch.seq,
            credential: self.credential.clone(),
            request: fetch.request,
        }
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.view.tab()
    }

    /// Identifies the current lifetime of the active view.
    pub fn mount_id(&self) -> u64 {
        self.mount
    }
}

#[derive(Debug)]
pub enum Phase {
    Unauthenticated(LoginForm),
    Authenticated(Dashboard),
}

/// What became of a finished login exchange.
#[derive(Debug)]
pub enum LoginOutcome {
    /// The token was accepted. `persisted` reports whether it reached the store.
    Authenticated {
        fetch: Option<FetchCommand>,
        persisted: Result<(), std::io::Error>,
    },
    /// The exchange failed; the form is back in its editable state.
    Rejected(String),
    /// The shell was not waiting for a login.
    Ignored,
}

/// What became of a finished fetch.
#[derive(Debug)]
pub enum Applied {
    Stored { tab: Tab, records: usize },
    Failed { tab: Tab, error: ApiError },
    /// The response belonged to an unmounted view or an outdated request.
    Discarded { tab: Tab },
}

pub struct Shell {
    store: Box<dyn SessionStore>,
    phase: Phase,
    mounts: u64,
}

impl Shell {
    /// Reads the store once and opens the dashboard if it holds a credential.
    pub fn start(store: Box<dyn SessionStore>) -> (Self, Option<FetchCommand>) {
        let mut shell = Self {
            store,
            phase: Phase::Unauthenticated(LoginForm::default()),
            mounts: 0,
        };
        let fetch = match shell.store.load() {
            Some(credential) => shell.authenticate(credential),
            None => None,
        };
        (shell, fetch)
    }

    fn authenticate(&mut self, credential: Credential) -> Option<FetchCommand> {
        self.mounts += 1;
        let (dashboard, fetch) = Dashboard::open(credential, Tab::default(), self.mounts);
        self.phase = Phase::Authenticated(dashboard);
        fetch
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, Phase::Authenticated(_))
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.phase {
            Phase::Authenticated(dashboard) => Some(dashboard),
            Phase::Unauthenticated(_) => None,
        }
    }

    pub fn login_form(&self) -> Option<&LoginForm> {
        match &self.phase {
            Phase::Unauthenticated(form) => Some(form),
            Phase::Authenticated(_) => None,
        }
    }

    pub fn login_form_mut(&mut self) -> Option<&mut LoginForm> {
        match &mut self.phase {
            Phase::Unauthenticated(form) => Some(form),
            Phase::Authenticated(_) => None,
        }
    }

    pub fn submit_login(&mut self) -> Result<LoginRequest, SubmitError> {
        self.login_form_mut()
            .ok_or(SubmitError::AlreadyAuthenticated)?
            .submit()
    }

    /// Feeds the result of the authentication exchange into the store.
    pub fn complete_login(&mut self, result: Result<TokenResponse, ApiError>) -> LoginOutcome {
        let Phase::Unauthenticated(form) = &mut self.phase else {
            return LoginOutcome::Ignored;
        };
        if !form.is_submitting() {
            return LoginOutcome::Ignored;
        }

        let credential = match result {
            Ok(token) => match Credential::parse(token.access_token) {
                Some(credential) => credential,
                None => {
                    let message = "Login response carried an empty access token".to_string();
                    form.fail(message.clone());
                    return LoginOutcome::Rejected(message);
                }
            },
            Err(e) => {
                let message = e.to_string();
                form.fail(message.clone());
                return LoginOutcome::Rejected(message);
            }
        };

        let persisted = self.store.save(&credential);
        let fetch = self.authenticate(credential);
        LoginOutcome::Authenticated { fetch, persisted }
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.dashboard().map(Dashboard::active_tab)
    }

    /// Switches tabs. The previous view object and its data are dropped and
    /// the new one is mounted from scratch. Selecting the active tab is a no-op.
    pub fn select_tab(&mut self, tab: Tab) -> Option<FetchCommand> {
        let Phase::Authenticated(dashboard) = &mut self.phase else {
            return None;
        };
        if dashboard.active_tab() == tab {
            return None;
        }
        self.mounts += 1;
        let (view, fetch) = ActiveView::mount(tab);
        dashboard.view = view;
        dashboard.mount = self.mounts;
        fetch.map(|f| dashboard.command(f))
    }

    /// Routes an input edit to the active view.
    pub fn edit_input(&mut self, edit: InputEdit) -> Option<FetchCommand> {
        match &mut self.phase {
            Phase::Unauthenticated(form) => {
                form.edit(edit);
                None
            }
            Phase::Authenticated(dashboard) => {
                let fetch = dashboard.view.edit(edit)?;
                Some(dashboard.command(fetch))
            }
        }
    }

    /// Triggers the active view's explicit load action.
    pub fn load(&mut self) -> Option<FetchCommand> {
        let Phase::Authenticated(dashboard) = &mut self.phase else {
            return None;
        };
        let fetch = dashboard.view.load()?;
        Some(dashboard.command(fetch))
    }

    /// Applies a finished fetch if it belongs to the mounted view.
    pub fn apply_fetch(&mut self, fetched: FetchResult) -> Applied {
        let tab = fetched.tab;
        let Phase::Authenticated(dashboard) = &mut self.phase else {
            return Applied::Discarded { tab };
        };
        if fetched.mount != dashboard.mount {
            return Applied::Discarded { tab };
        }
        let records = fetched.result.as_ref().map(|o| o.len()).unwrap_or(0);
        match dashboard.view.complete(fetched.seq, fetched.result) {
            Completion::Stored => Applied::Stored { tab, records },
            Completion::Failed(error) => Applied::Failed { tab, error },
            Completion::Stale => Applied::Discarded { tab },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Asset;
    use crate::session::MemorySessionStore;
    use crate::views::{FetchOutcome, FetchRequest};

    fn token(value: &str) -> TokenResponse {
        TokenResponse {
            access_token: value.to_string(),
            token_type: Some("bearer".to_string()),
        }
    }

    fn logged_out() -> Shell {
        let (shell, fetch) = Shell::start(Box::new(MemorySessionStore::default()));
        assert!(fetch.is_none());
        shell
    }

    fn logged_in() -> (Shell, FetchCommand) {
        let store = MemorySessionStore::with_credential(Credential::parse("tok123").unwrap());
        let (shell, fetch) = Shell::start(Box::new(store));
        (shell, fetch.unwrap())
    }

    fn submit(shell: &mut Shell, username: &str, password: &str) -> LoginRequest {
        let form = shell.login_form_mut().unwrap();
        for c in username.chars() {
            form.edit(InputEdit::Insert(c));
        }
        form.toggle_focus();
        for c in password.chars() {
            form.edit(InputEdit::Insert(c));
        }
        shell.submit_login().unwrap()
    }

    fn asset(ticker: &str) -> Asset {
        Asset {
            id: ticker.to_lowercase(),
            ticker: ticker.into(),
            name: ticker.into(),
            asset_type: "equity".into(),
            source: None,
            created_at: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_starts_unauthenticated_without_stored_token() {
        let shell = logged_out();
        assert!(!shell.is_authenticated());
        assert!(shell.login_form().is_some());
        assert_eq!(shell.active_tab(), None);
    }

    #[test]
    /// A stored token opens the dashboard on the assets tab and fetches assets.
    fn test_stored_token_opens_dashboard() {
        let (shell, fetch) = logged_in();
        assert!(shell.is_authenticated());
        assert_eq!(shell.active_tab(), Some(Tab::Assets));
        assert_eq!(fetch.request, FetchRequest::Assets);
        assert_eq!(fetch.credential.as_str(), "tok123");
    }

    #[test]
    fn test_successful_login_saves_token_and_authenticates() {
        let mut shell = logged_out();
        let request = submit(&mut shell, "admin", "secret");
        assert_eq!(request.username, "admin");

        let outcome = shell.complete_login(Ok(token("tok123")));

        let LoginOutcome::Authenticated { fetch, persisted } = outcome else {
            panic!("expected authentication");
        };
        assert!(persisted.is_ok());
        assert_eq!(fetch.unwrap().request, FetchRequest::Assets);
        assert_eq!(shell.store().load().unwrap().as_str(), "tok123");
        assert_eq!(shell.active_tab(), Some(Tab::Assets));
    }

    #[test]
    fn test_rejected_login_leaves_store_and_phase_unchanged() {
        let mut shell = logged_out();
        submit(&mut shell, "admin", "wrong");

        let outcome = shell.complete_login(Err(ApiError::Http {
            status: 401,
            message: "Invalid credentials".into(),
        }));

        assert!(matches!(outcome, LoginOutcome::Rejected(_)));
        assert!(!shell.is_authenticated());
        assert!(shell.store().load().is_none());
        let form = shell.login_form().unwrap();
        assert_eq!(form.username(), "admin");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_empty_access_token_is_rejected() {
        let mut shell = logged_out();
        submit(&mut shell, "admin", "secret");
        let outcome = shell.complete_login(Ok(token("")));
        assert!(matches!(outcome, LoginOutcome::Rejected(_)));
        assert!(shell.store().load().is_none());
    }

    #[test]
    fn test_login_result_without_submit_is_ignored() {
        let mut shell = logged_out();
        let outcome = shell.complete_login(Ok(token("tok123")));
        assert!(matches!(outcome, LoginOutcome::Ignored));
        assert!(!shell.is_authenticated());
    }

    #[test]
    fn test_no_transition_back_after_authentication() {
        let (mut shell, _) = logged_in();
        assert_eq!(shell.submit_login(), Err(SubmitError::AlreadyAuthenticated));
        assert!(matches!(
            shell.complete_login(Err(ApiError::EmptyMetrics("x".into()))),
            LoginOutcome::Ignored
        ));
        assert!(shell.is_authenticated());
    }

    #[test]
    /// Re-entering a tab re-fetches instead of reusing earlier data.
    fn test_reselecting_tab_refetches() {
        let (mut shell, first) = logged_in();
        shell.apply_fetch(FetchResult {
            mount: first.mount,
            seq: first.seq,
            tab: Tab::Assets,
            result: Ok(FetchOutcome::Assets(vec![asset("AAPL")])),
        });

        assert!(shell.select_tab(Tab::Models).is_some());
        let again = shell.select_tab(Tab::Assets).unwrap();

        assert_eq!(again.request, FetchRequest::Assets);
        assert_ne!(again.mount, first.mount);
        let Some(ActiveView::Assets(view)) = shell.dashboard().map(Dashboard::view) else {
            panic!("assets view expected");
        };
        assert!(view.assets().is_empty());
        assert!(view.is_loading());
    }

    #[test]
    fn test_selecting_active_tab_is_noop() {
        let (mut shell, first) = logged_in();
        assert!(shell.select_tab(Tab::Assets).is_none());
        assert_eq!(shell.dashboard().unwrap().mount_id(), first.mount);
    }

    #[test]
    /// A response arriving after its tab was left is discarded.
    fn test_response_for_unmounted_view_is_discarded() {
        let (mut shell, first) = logged_in();
        shell.select_tab(Tab::Models);
        shell.select_tab(Tab::Assets);

        let applied = shell.apply_fetch(FetchResult {
            mount: first.mount,
            seq: first.seq,
            tab: Tab::Assets,
            result: Ok(FetchOutcome::Assets(vec![asset("OLD")])),
        });

        assert!(matches!(applied, Applied::Discarded { .. }));
    }

    #[test]
    fn test_failed_fetch_clears_loading() {
        let (mut shell, first) = logged_in();
        let applied = shell.apply_fetch(FetchResult {
            mount: first.mount,
            seq: first.seq,
            tab: Tab::Assets,
            result: Err(ApiError::Http {
                status: 500,
                message: String::new(),
            }),
        });

        assert!(matches!(applied, Applied::Failed { tab: Tab::Assets, .. }));
        assert!(!shell.dashboard().unwrap().view().is_loading());
    }

    #[test]
    fn test_forecast_input_issues_commands_with_credential() {
        let (mut shell, _) = logged_in();
        assert!(shell.select_tab(Tab::Forecasts).is_none());

        let command = shell.edit_input(InputEdit::Insert('1')).unwrap();
        assert_eq!(
            command.request,
            FetchRequest::Forecasts {
                asset_id: "1".into()
            }
        );
        assert_eq!(command.credential.as_str(), "tok123");
        assert!(shell.edit_input(InputEdit::Backspace).is_none());
    }

    #[test]
    fn test_metrics_load_requires_explicit_action() {
        let (mut shell, _) = logged_in();
        shell.select_tab(Tab::Metrics);

        assert!(shell.edit_input(InputEdit::Insert('7')).is_none());
        let command = shell.load().unwrap();
        assert_eq!(
            command.request,
            FetchRequest::Metrics {
                asset_id: "7".into()
            }
        );
    }
}
