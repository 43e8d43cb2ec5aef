//! Dashboard main renderer

use super::DashboardContext;
use super::components::{assets, footer, forecasts, header, logs, metrics, models};
use crate::views::ActiveView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, context: &DashboardContext) {
    if context.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], context);

    let content = main_chunks[1];
    match context.dashboard.view() {
        ActiveView::Assets(view) => assets::render_assets(f, content, view),
        ActiveView::Forecasts(view) => forecasts::render_forecasts(f, content, view),
        ActiveView::Models(view) => models::render_models(f, content, view),
        ActiveView::Metrics(view) => metrics::render_metrics(f, content, view),
    }

    logs::render_logs_panel(f, main_chunks[2], context);
    footer::render_footer(f, main_chunks[3], context.dashboard.view());
}
