use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::keys::hints;
use super::layout::app_layout;
use super::{notifications, panels, popups};
use crate::constants::BRAND;

pub const ACCENT: Color = Color::Rgb(59, 130, 246);
pub const ACCENT_GREEN: Color = Color::Rgb(34, 197, 94);
pub const HEADER_BG: Color = Color::Rgb(20, 22, 30);

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let has_notification = match &app.screen {
        Screen::Team(page) => page.notification.current().is_some(),
        _ => false,
    };
    let layout = app_layout(area, has_notification);

    draw_header(frame, layout.header, app);

    match &app.screen {
        Screen::Landing(page) => panels::landing::draw(frame, layout.main, page),
        Screen::Auth(page) => panels::auth::draw(frame, layout.main, page),
        Screen::Team(page) => panels::team::draw(frame, layout.main, page),
        Screen::NotFound(path) => panels::not_found::draw(frame, layout.main, path),
    }

    if let Screen::Team(page) = &app.screen {
        notifications::draw(frame, layout.notifications, &page.notification);
    }

    draw_footer(frame, layout.footer, app);

    // Overlays go on top of everything
    if let Screen::Team(page) = &app.screen {
        popups::draw_team_overlays(frame, area, page);
    }
    popups::draw_popup(frame, area, app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(2) as usize;

    let left = vec![
        Span::styled(
            format!(" {} ", BRAND),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.route.path(), Style::default().fg(Color::DarkGray)),
    ];

    let user = format!("{} ", app.current_user().name);
    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + user.chars().count());

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(user, Style::default().fg(Color::Gray)));

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(Color::DarkGray)))
        .style(Style::default().bg(HEADER_BG));
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints(app.key_context())),
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(footer, area);
}
