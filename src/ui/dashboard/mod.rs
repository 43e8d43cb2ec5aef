//! Modular dashboard implementation
//!
//! One component per screen region, plus one per resource tab.

pub mod components;
pub mod renderer;
pub mod utils;

use crate::environment::Environment;
use crate::events::Event;
use crate::shell::Dashboard;
use std::collections::VecDeque;

pub use renderer::render_dashboard;

/// Everything a dashboard frame is drawn from.
pub struct DashboardContext<'a> {
    pub dashboard: &'a Dashboard,
    pub activity_logs: &'a VecDeque<Event>,
    pub environment: &'a Environment,
    pub with_background_color: bool,
}
