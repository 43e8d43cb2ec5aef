//! Login screen module

use crate::environment::Environment;
use crate::views::login::{LoginField, LoginForm};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Renders the login form. The password is shown as one `*` per character.
pub fn render_login(
    f: &mut Frame,
    form: &LoginForm,
    environment: &Environment,
    with_background_color: bool,
) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let [area] = Layout::horizontal([Constraint::Length(56)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::vertical([Constraint::Length(13)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::default()
        .title(" FORECAST ADMIN LOGIN ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(environment.api_url())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[0],
    );

    let masked = "*".repeat(form.password_len());
    render_field(
        f,
        rows[1],
        "Username",
        form.username(),
        form.focus() == LoginField::Username,
    );
    render_field(
        f,
        rows[2],
        "Password",
        &masked,
        form.focus() == LoginField::Password,
    );

    let status = if form.is_submitting() {
        Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::LightBlue),
        ))
    } else if let Some(error) = form.error() {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::LightRed),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(status), rows[3]);

    f.render_widget(
        Paragraph::new("[Tab] Switch field | [Enter] Sign in | [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan)),
        rows[4],
    );
}

fn render_field(f: &mut Frame, area: ratatui::layout::Rect, title: &str, value: &str, focused: bool) {
    let border_color = if focused { Color::LightYellow } else { Color::Gray };
    let mut text = value.to_string();
    if focused {
        text.push('_');
    }
    let field = Paragraph::new(text)
        .style(Style::default().add_modifier(if focused {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(field, area);
}
