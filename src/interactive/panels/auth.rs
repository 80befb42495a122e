use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::{Position, Title}, Block, Borders, Paragraph},
    Frame,
};

use super::input_line;
use crate::constants::{BRAND, TAGLINE};
use crate::interactive::layout::centered_column;
use crate::interactive::ui::{ACCENT, ACCENT_GREEN};
use crate::pages::{AuthMode, AuthPage};

pub fn draw(frame: &mut Frame, area: Rect, page: &AuthPage) {
    let column = centered_column(60, area);
    let mode = page.mode();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(BRAND, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Center),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))).alignment(Alignment::Center),
        Line::default(),
    ];

    // Tabs
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };
    lines.push(
        Line::from(vec![
            tab("Login", mode == AuthMode::Login),
            Span::raw("  "),
            tab("Sign Up", mode == AuthMode::Signup),
        ])
        .alignment(Alignment::Center),
    );
    lines.push(Line::default());

    // Fields
    for &field in mode.fields() {
        let focused = page.focus() == field;
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, field.label()), label_style)));

        let secret = field.is_secret() && !page.show_password();
        let mut input = input_line(page.form.field(field), focused, secret, field.placeholder());
        input.spans.insert(0, Span::raw("  "));
        lines.push(input);

        if let Some(error) = page.error(field) {
            lines.push(Line::from(Span::styled(
                format!("  ⚠ {}", error),
                Style::default().fg(Color::Red),
            )));
        }
    }
    lines.push(Line::default());

    if let Some(message) = page.message() {
        let (icon, color) = if message.success {
            ("✓", Color::Green)
        } else {
            ("⚠", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", icon, message.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    let button_style = if page.is_loading() {
        Style::default().fg(Color::Black).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(ACCENT_GREEN).add_modifier(Modifier::BOLD)
    };
    lines.push(
        Line::from(Span::styled(format!("  {}  ", mode.submit_label(page.is_loading())), button_style))
            .alignment(Alignment::Center),
    );
    lines.push(Line::default());

    let (prompt, switch) = match mode {
        AuthMode::Login => ("Don't have an account? ", "Sign Up"),
        AuthMode::Signup => ("Already have an account? ", "Sign In"),
    };
    lines.push(
        Line::from(vec![
            Span::styled(prompt, Style::default().fg(Color::Gray)),
            Span::styled(format!("{} (Ctrl+T)", switch), Style::default().fg(ACCENT)),
        ])
        .alignment(Alignment::Center),
    );

    let password_hint = if page.show_password() { "hide" } else { "show" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", match mode {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }))
        .title(Title::from(format!(" Ctrl+P: {} password ", password_hint)).position(Position::Bottom))
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), column);
}
