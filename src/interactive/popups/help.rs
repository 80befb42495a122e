use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::App;
use crate::interactive::layout::centered_popup;
use crate::router::ROUTE_TABLE;

const SHORTCUTS: &[(&str, &str, &str, &str)] = &[
    ("l / s", "Login or sign up", "c", "Create team"),
    ("t", "My team", "j", "Join team"),
    (":", "Go to path", "i", "Invite members"),
    ("m", "Toggle menu", "s / e", "Team settings"),
    ("j/k", "Scroll / select", "r", "Toggle role"),
    ("Ctrl+T", "Login/Sign Up", "d", "Remove member"),
    ("Ctrl+P", "Show password", "Ctrl+Y", "Copy invite link"),
    ("Esc", "Back / home", "x", "Dismiss message"),
    ("q", "Quit", "", ""),
];

/// Draw the keyboard shortcuts overlay along with the known routes.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width: u16 = 64;
    let height: u16 = 20;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled(format!("{:<28}", "Navigation"), header_style),
        Span::styled("Team", header_style),
    ])];

    for (nav_key, nav_desc, team_key, team_desc) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", nav_key), key_style),
            Span::styled(format!("{:<20}", nav_desc), desc_style),
            Span::styled(format!("{:<8}", team_key), key_style),
            Span::styled(*team_desc, desc_style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Routes", header_style)));
    for (pattern, description) in ROUTE_TABLE.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<28}", pattern), key_style),
            Span::styled(*description, desc_style),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<28}", "My team"), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("/hackathon/{}/team", app.config().default_hackathon),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines), content_area);

    let footer_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, footer_area);
}
