//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::AdminApi;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, MAX_ACTIVITY_LOGS, UI_TICK};
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::events::{AppEvent, Event as ActivityEvent, EventType};
use crate::logging::LogLevel;
use crate::runtime::{spawn_fetch, spawn_login};
use crate::session::SessionStore;
use crate::shell::{Applied, LoginOutcome, Shell};
use crate::ui::dashboard::{DashboardContext, render_dashboard};
use crate::ui::login::render_login;
use crate::views::{FetchCommand, InputEdit, Tab};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Application state
pub struct App {
    /// Login form or dashboard.
    shell: Shell,

    /// Gateway client shared with background tasks.
    api: Arc<dyn AdminApi>,

    /// The gateway the console talks to.
    environment: Environment,

    /// Handed to background tasks so they can report back.
    event_sender: mpsc::Sender<AppEvent>,

    /// Receives login and fetch results from background tasks.
    event_receiver: mpsc::Receiver<AppEvent>,

    /// Cancelled whenever the mounted view is replaced.
    mount_token: CancellationToken,

    /// Mount id `mount_token` belongs to.
    token_mount: Option<u64>,

    /// Activity logs for display.
    activity_logs: VecDeque<ActivityEvent>,

    classifier: ErrorClassifier,

    /// Whether to paint a background color.
    with_background_color: bool,

    should_quit: bool,
}

impl App {
    /// Creates the application and issues the dashboard's first fetch when a
    /// credential is already stored. Must be called inside a tokio runtime.
    pub fn new(
        store: Box<dyn SessionStore>,
        api: Arc<dyn AdminApi>,
        environment: Environment,
        ui_config: UIConfig,
    ) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (shell, fetch) = Shell::start(store);
        let mut app = Self {
            shell,
            api,
            environment,
            event_sender,
            event_receiver,
            mount_token: CancellationToken::new(),
            token_mount: None,
            activity_logs: VecDeque::new(),
            classifier: ErrorClassifier::new(),
            with_background_color: ui_config.with_background_color,
            should_quit: false,
        };
        if app.shell.is_authenticated() {
            app.add_event(ActivityEvent::session_with_level(
                "Using stored credential".to_string(),
                EventType::Success,
                LogLevel::Info,
            ));
        }
        app.after_transition(fetch);
        app
    }

    #[cfg(test)]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    #[cfg(test)]
    pub fn activity_logs(&self) -> &VecDeque<ActivityEvent> {
        &self.activity_logs
    }

    #[cfg(test)]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn add_event(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Cancels work belonging to a replaced view, then dispatches `fetch`.
    fn after_transition(&mut self, fetch: Option<FetchCommand>) {
        let mounted = self.shell.dashboard().map(|d| d.mount_id());
        if mounted != self.token_mount {
            self.mount_token.cancel();
            self.mount_token = CancellationToken::new();
            self.token_mount = mounted;
        }
        if let Some(command) = fetch {
            log::debug!("Dispatching {:?}", command.request);
            spawn_fetch(
                self.api.clone(),
                command,
                self.mount_token.clone(),
                self.event_sender.clone(),
            );
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit();
            return;
        }

        if self.shell.is_authenticated() {
            self.handle_dashboard_key(key);
        } else {
            self.handle_login_key(key);
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                if let Some(form) = self.shell.login_form_mut() {
                    form.toggle_focus();
                }
            }
            KeyCode::Enter => match self.shell.submit_login() {
                Ok(request) => {
                    self.add_event(ActivityEvent::session_with_level(
                        format!("Signing in as {}", request.username),
                        EventType::Refresh,
                        LogLevel::Info,
                    ));
                    spawn_login(self.api.clone(), request, self.event_sender.clone());
                }
                Err(e) => self.add_event(ActivityEvent::session_with_level(
                    e.to_string(),
                    EventType::Error,
                    LogLevel::Warn,
                )),
            },
            _ => {
                if let Some(edit) = text_edit(&key) {
                    self.shell.edit_input(edit);
                }
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let Some(active) = self.shell.active_tab() else {
            return;
        };
        let has_input = self
            .shell
            .dashboard()
            .is_some_and(|d| d.view().has_input());

        let fetch = match key.code {
            KeyCode::Right | KeyCode::Tab => self.shell.select_tab(active.next()),
            KeyCode::Left | KeyCode::BackTab => self.shell.select_tab(active.previous()),
            KeyCode::F(n @ 1..=4) => self.shell.select_tab(Tab::ALL[usize::from(n) - 1]),
            KeyCode::Enter => self.shell.load(),
            KeyCode::Char('q') if !has_input => {
                self.quit();
                return;
            }
            _ => text_edit(&key).and_then(|edit| self.shell.edit_input(edit)),
        };
        self.after_transition(fetch);
    }

    fn quit(&mut self) {
        self.mount_token.cancel();
        self.should_quit = true;
    }

    /// Applies every result background tasks have reported so far.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.handle_app_event(event);
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginFinished(result) => match self.shell.complete_login(result) {
                LoginOutcome::Authenticated { fetch, persisted } => {
                    self.add_event(ActivityEvent::session_with_level(
                        "Logged in".to_string(),
                        EventType::Success,
                        LogLevel::Info,
                    ));
                    if let Err(e) = persisted {
                        self.add_event(ActivityEvent::session_with_level(
                            format!("Could not save credential: {}", e),
                            EventType::Error,
                            LogLevel::Warn,
                        ));
                    }
                    self.after_transition(fetch);
                }
                LoginOutcome::Rejected(message) => {
                    self.add_event(ActivityEvent::session_with_level(
                        format!("Login failed: {}", message),
                        EventType::Error,
                        LogLevel::Error,
                    ));
                }
                LoginOutcome::Ignored => {}
            },
            AppEvent::Fetched(fetched) => match self.shell.apply_fetch(fetched) {
                Applied::Stored { tab, records } => {
                    let msg = match tab {
                        Tab::Metrics => "Loaded metrics summary".to_string(),
                        _ => format!("Loaded {} {}", records, tab.to_string().to_lowercase()),
                    };
                    self.add_event(ActivityEvent::fetch_with_level(
                        tab,
                        msg,
                        EventType::Refresh,
                        LogLevel::Info,
                    ));
                }
                Applied::Failed { tab, error } => {
                    let level = self.classifier.classify_api_error(&error);
                    self.add_event(ActivityEvent::fetch_with_level(
                        tab,
                        error.to_string(),
                        EventType::Error,
                        level,
                    ));
                }
                Applied::Discarded { tab } => {
                    self.add_event(ActivityEvent::fetch_with_level(
                        tab,
                        "Discarded outdated response".to_string(),
                        EventType::Skipped,
                        LogLevel::Debug,
                    ));
                }
            },
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.drain_events();
        terminal.draw(|f| render(f, &app))?;

        if event::poll(UI_TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    if let Some(form) = app.shell.login_form() {
        render_login(f, form, &app.environment, app.with_background_color);
    } else if let Some(dashboard) = app.shell.dashboard() {
        let context = DashboardContext {
            dashboard,
            activity_logs: &app.activity_logs,
            environment: &app.environment,
            with_background_color: app.with_background_color,
        };
        render_dashboard(f, &context);
    }
}

/// Maps a key to an edit of the focused input. Ctrl+U clears it; other
/// Ctrl or Alt chords are not text.
fn text_edit(key: &KeyEvent) -> Option<InputEdit> {
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEdit::Clear)
        }
        KeyCode::Char(c) if !chord => Some(InputEdit::Insert(c)),
        KeyCode::Backspace => Some(InputEdit::Backspace),
        _ => None,
    }
}
