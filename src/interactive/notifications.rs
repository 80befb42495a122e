use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pages::{NotificationKind, NotificationSlot};

pub fn draw(frame: &mut Frame, area: Rect, slot: &NotificationSlot) {
    let Some(notification) = slot.current() else { return };
    if area.height == 0 {
        return;
    }

    let (icon, color) = match notification.kind {
        NotificationKind::Success => ("✓", Color::Green),
        NotificationKind::Error => ("✗", Color::Red),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(notification.message.clone(), Style::default().fg(color)),
        Span::styled(
            format!("  [{}s]", slot.remaining_secs(Instant::now())),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}
