use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;

pub fn draw(frame: &mut Frame, area: Rect, path: &str) {
    let card = centered_popup(50, 7, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 404 ")
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(Span::styled(
            "Page not found",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("Nothing lives at {}", path), Style::default().fg(Color::Gray))),
        Line::default(),
        Line::from(Span::styled("Press Enter to go home", Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, card);
}
