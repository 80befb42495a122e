use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;
use crate::interactive::panels::{input_line, truncate};
use crate::interactive::ui::ACCENT;
use crate::pages::TeamPage;

pub fn draw(frame: &mut Frame, area: Rect, page: &TeamPage) {
    let width: u16 = 64;
    let height: u16 = 13;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ✉ Invite Team Members ")
        .border_style(Style::default().fg(ACCENT));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let label = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
    let link_width = inner.width.saturating_sub(14) as usize;

    let mut email = input_line(&page.invite_email, true, false, "Enter email address");
    email.spans.insert(0, Span::raw("  "));

    let lines = vec![
        Line::from(Span::styled("Invite Link", label)),
        Line::from(vec![
            Span::styled(
                format!(" {} ", truncate(&page.invite_link(), link_width)),
                Style::default().fg(Color::White).bg(Color::Rgb(40, 44, 56)),
            ),
            Span::raw(" "),
            Span::styled(" Copy ", Style::default().fg(Color::Black).bg(ACCENT)),
        ]),
        Line::from(Span::styled(
            "Share this link with people you want to invite to your team.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(Span::styled("Invite by Email", label)),
        email,
        Line::default(),
        Line::from(vec![
            Span::styled(
                " Send Invite (Enter) ",
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" Copy Link (Ctrl+Y) ", Style::default().fg(Color::White).bg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(" Done (Esc) ", Style::default().fg(Color::White).bg(Color::DarkGray)),
        ]),
    ];

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    frame.render_widget(Paragraph::new(lines), content_area);
}
