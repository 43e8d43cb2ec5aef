//! Forecasts component
//!
//! Asset-id input above a line chart of point forecasts with their bounds.

use super::super::utils::placeholder;
use crate::views::forecasts::{ChartPoint, ForecastsView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

pub fn render_forecasts(f: &mut Frame, area: ratatui::layout::Rect, view: &ForecastsView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_asset_input(f, chunks[0], view.asset_id());

    let block = Block::default()
        .title("FORECAST HISTORY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    let points = view.chart_points();
    if points.is_empty() {
        let empty_text = if view.asset_id().trim().is_empty() {
            "Enter an asset ID to load forecasts"
        } else {
            "No forecasts for this asset"
        };
        let empty = placeholder(view.is_loading(), "Loading forecasts...", empty_text);
        f.render_widget(empty.block(block), chunks[1]);
        return;
    }

    let series = Series::from_points(&points);
    let mut datasets = vec![
        Dataset::default()
            .name("Forecast")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::LightYellow))
            .data(&series.forecast),
    ];
    if !series.low.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Lower")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&series.low),
        );
    }
    if !series.high.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Upper")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(&series.high),
        );
    }

    let last = points.len().saturating_sub(1);
    let x_labels = vec![points[0].date.clone(), points[last].date.clone()];
    let y_labels = vec![
        format!("{:.2}", series.min),
        format!("{:.2}", series.max),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([series.min, series.max])
                .labels(y_labels),
        );
    f.render_widget(chart, chunks[1]);
}

pub(super) fn render_asset_input(f: &mut Frame, area: ratatui::layout::Rect, asset_id: &str) {
    let input = Paragraph::new(format!("{}_", asset_id)).block(
        Block::default()
            .title("Asset ID")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightYellow)),
    );
    f.render_widget(input, area);
}

/// Chart coordinates. X is the record's position in the response.
struct Series {
    forecast: Vec<(f64, f64)>,
    low: Vec<(f64, f64)>,
    high: Vec<(f64, f64)>,
    min: f64,
    max: f64,
}

impl Series {
    fn from_points(points: &[ChartPoint]) -> Self {
        let at = |i: usize, y: f64| (i as f64, y);
        let forecast: Vec<_> = points
            .iter()
            .enumerate()
            .map(|(i, p)| at(i, p.forecast))
            .collect();
        let low: Vec<_> = points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.low.map(|y| at(i, y)))
            .collect();
        let high: Vec<_> = points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.high.map(|y| at(i, y)))
            .collect();

        let (mut min, mut max) = forecast
            .iter()
            .chain(&low)
            .chain(&high)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        if (max - min).abs() < f64::EPSILON {
            min -= 1.0;
            max += 1.0;
        }

        Self {
            forecast,
            low,
            high,
            min,
            max,
        }
    }
}
