//! Accuracy metrics component
//!
//! Asset-id input above one tile per metric.

use super::forecasts::render_asset_input;
use super::super::utils::placeholder;
use crate::views::metrics::MetricsView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_metrics(f: &mut Frame, area: ratatui::layout::Rect, view: &MetricsView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .split(area);

    render_asset_input(f, chunks[0], view.asset_id());

    let tiles = view.tiles();
    if tiles.is_empty() {
        let empty = placeholder(
            view.is_loading(),
            "Loading metrics...",
            "Enter an asset ID and press Enter to load metrics",
        );
        f.render_widget(empty, chunks[1]);
        return;
    }

    let constraints = vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()];
    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);

    for (tile, tile_area) in tiles.iter().zip(tile_areas.iter()) {
        let widget = Paragraph::new(tile.value.clone())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(tile.label)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            );
        f.render_widget(widget, *tile_area);
    }
}
