//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;
use ratatui::widgets::Paragraph;

/// Get a ratatui color for an activity log source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Session => Color::Cyan,
        Source::Assets => Color::LightGreen,
        Source::Forecasts => Color::Yellow,
        Source::Models => Color::LightMagenta,
        Source::Metrics => Color::LightBlue,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return "Gateway unreachable".to_string();
    }
    if msg.contains("operation timed out") {
        return "Connection timed out".to_string();
    }
    msg.to_string()
}

/// Placeholder shown in place of a resource while it is loading or absent.
pub fn placeholder(loading: bool, loading_text: &str, empty_text: &str) -> Paragraph<'static> {
    let text = if loading { loading_text } else { empty_text };
    Paragraph::new(text.to_string()).style(ratatui::prelude::Style::default().fg(Color::DarkGray))
}
