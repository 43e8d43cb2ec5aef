//! Assets table component

use super::super::utils::placeholder;
use crate::views::assets::{AssetsView, COLUMNS, table_rows};
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

pub fn render_assets(f: &mut Frame, area: ratatui::layout::Rect, view: &AssetsView) {
    let block = Block::default()
        .title(format!("ASSETS ({})", view.assets().len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightGreen))
        .padding(Padding::horizontal(1));

    if view.assets().is_empty() {
        let empty = placeholder(view.is_loading(), "Loading assets...", "No assets found");
        f.render_widget(empty.block(block), area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows = table_rows(view.assets())
        .into_iter()
        .map(|[ticker, name, kind, source]| {
            Row::new(vec![
                Cell::from(ticker).style(Style::default().fg(Color::LightYellow)),
                Cell::from(name),
                Cell::from(kind),
                Cell::from(source).style(Style::default().fg(Color::DarkGray)),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Fill(2),
            Constraint::Length(14),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    f.render_widget(table, area);
}
