//! Dashboard header component
//!
//! Renders the title and the tab bar

use super::super::DashboardContext;
use crate::views::Tab;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

/// Render header with title and tab bar.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, context: &DashboardContext) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "FORECAST ADMIN v{} | {}",
        version,
        context.environment.api_url()
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab)))
        .collect();

    let active = context.dashboard.active_tab();
    let loading = context.dashboard.view().is_loading();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(
            Block::default()
                .title(if loading { " loading " } else { "" })
                .title_alignment(Alignment::Right)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    f.render_widget(tabs, header_chunks[1]);
}
