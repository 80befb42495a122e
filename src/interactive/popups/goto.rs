use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::App;
use crate::interactive::layout::centered_popup;
use crate::interactive::panels::input_line;

/// Path prompt; submitting routes to whatever the path resolves to,
/// including the not-found page.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width: u16 = 60;
    let height: u16 = 5;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Go to ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let input_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    frame.render_widget(
        Paragraph::new(input_line(&app.goto_input, true, false, "/")),
        input_area,
    );

    let hints_area = Rect::new(
        inner.x + 1,
        inner.y + inner.height.saturating_sub(1),
        inner.width.saturating_sub(2),
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter: Go  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        hints_area,
    );
}
