//! Model registry component
//!
//! One card per model: name, type badge, optional description and creation date.

use super::super::utils::placeholder;
use crate::views::models::{ModelsView, cards};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

pub fn render_models(f: &mut Frame, area: ratatui::layout::Rect, view: &ModelsView) {
    let block = Block::default()
        .title(format!("MODELS ({})", view.models().len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightMagenta))
        .padding(Padding::horizontal(1));

    if view.models().is_empty() {
        let empty = placeholder(view.is_loading(), "Loading models...", "No models registered");
        f.render_widget(empty.block(block), area);
        return;
    }

    let items: Vec<ListItem> = cards(view.models())
        .into_iter()
        .map(|card| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    card.name,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", card.model_type),
                    Style::default().fg(Color::LightMagenta),
                ),
            ])];
            if let Some(description) = card.description {
                lines.push(Line::from(Span::styled(
                    description,
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("Created {}", card.created),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
