//! Dashboard footer component
//!
//! Renders the key help for the active tab

use crate::views::ActiveView;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn footer_text(view: &ActiveView) -> &'static str {
    match view {
        ActiveView::Forecasts(_) => "[F1-F4/←→] Tabs | Type asset ID | [Ctrl+U] Clear | [Esc] Quit",
        ActiveView::Metrics(_) => "[F1-F4/←→] Tabs | Type asset ID | [Ctrl+U] Clear | [Enter] Load | [Esc] Quit",
        ActiveView::Assets(_) | ActiveView::Models(_) => "[F1-F4/←→] Tabs | [Q] Quit",
    }
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, view: &ActiveView) {
    let footer = Paragraph::new(footer_text(view))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
