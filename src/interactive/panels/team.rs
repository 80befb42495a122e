use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{input_line, truncate};
use crate::constants::TEAM_SIZE_OPTIONS;
use crate::interactive::layout::{centered_column, centered_popup, two_columns};
use crate::interactive::ui::{ACCENT, ACCENT_GREEN};
use crate::models::{Role, Team};
use crate::pages::{TeamForm, TeamFormField, TeamPage, TeamView};

pub fn draw(frame: &mut Frame, area: Rect, page: &TeamPage) {
    match page.view() {
        TeamView::Loading => draw_loading(frame, area),
        TeamView::NoTeam => draw_no_team(frame, area),
        TeamView::CreatingTeam => {
            let column = centered_column(64, area);
            let card = Rect::new(column.x, column.y, column.width, column.height.min(14));
            draw_team_form(frame, card, &page.form, " + Create Your Team ", "Create Team", ACCENT);
        }
        TeamView::JoiningTeam => draw_join(frame, area, page),
        TeamView::HasTeam => {
            if let Some(team) = page.team() {
                draw_team(frame, area, page, team);
            }
        }
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let card = centered_popup(30, 3, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "⟳ Loading team...",
        Style::default().fg(Color::Yellow),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, card);
}

fn draw_no_team(frame: &mut Frame, area: Rect) {
    let column = centered_column(72, area);
    let card = Rect::new(column.x, column.y, column.width, column.height.min(14));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(inner);

    let intro = vec![
        Line::from(Span::styled("👥", Style::default().fg(ACCENT))),
        Line::from(Span::styled(
            "Join the Adventure",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Great ideas come from great teams. Create your own team or join an existing one to start building something amazing.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(intro).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let (left, right) = two_columns(chunks[1]);
    draw_choice(frame, left, "+", "Create New Team", "Start fresh with your own team", "c", ACCENT);
    draw_choice(frame, right, "⊕", "Join Existing Team", "Have an invite code? Join now", "j", ACCENT_GREEN);
}

fn draw_choice(frame: &mut Frame, area: Rect, icon: &str, title: &str, text: &str, key: &str, color: Color) {
    let lines = vec![
        Line::from(Span::styled(icon.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            format!("{} ({})", title, key),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    frame.render_widget(paragraph, area);
}

/// The create form and the settings overlay share this layout
pub fn draw_team_form(
    frame: &mut Frame,
    area: Rect,
    form: &TeamForm,
    title: &str,
    submit_label: &str,
    color: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(color));

    let label = |text: &str, field: TeamFormField| {
        let focused = form.focus == field;
        let style = if focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "▶ " } else { "  " };
        Line::from(Span::styled(format!("{}{}", marker, text), style))
    };

    let indent = |mut line: Line<'static>| {
        line.spans.insert(0, Span::raw("  "));
        line
    };

    let sizes: Vec<Span> = TEAM_SIZE_OPTIONS
        .iter()
        .map(|&n| {
            if n == form.max_members {
                Span::styled(
                    format!(" {} Members ", n),
                    Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {} ", n), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    let mut size_line = Line::from(sizes);
    size_line.spans.insert(0, Span::raw("  "));

    let lines = vec![
        label("Team Name *", TeamFormField::Name),
        indent(input_line(
            &form.name,
            form.focus == TeamFormField::Name,
            false,
            "Enter your team name",
        )),
        Line::default(),
        label("Team Description", TeamFormField::Description),
        indent(input_line(
            &form.description,
            form.focus == TeamFormField::Description,
            false,
            "Describe your team's vision and goals...",
        )),
        Line::default(),
        label("Maximum Members", TeamFormField::MaxMembers),
        size_line,
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!(" {} (Enter) ", submit_label),
                Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" Cancel (Esc) ", Style::default().fg(Color::White).bg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_join(frame: &mut Frame, area: Rect, page: &TeamPage) {
    let column = centered_column(64, area);
    let card = Rect::new(column.x, column.y, column.width, column.height.min(9));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ⊕ Join a Team ")
        .border_style(Style::default().fg(ACCENT_GREEN));

    let mut code = input_line(&page.join_code, true, false, "ENTER INVITE CODE");
    code.spans.insert(0, Span::raw("  "));

    let lines = vec![
        Line::from(Span::styled(
            "▶ Team Invite Code *",
            Style::default().fg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
        )),
        code,
        Line::from(Span::styled(
            "  Ask your team leader for the invite code.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " Join Team (Enter) ",
                Style::default().fg(Color::Black).bg(ACCENT_GREEN).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(" Cancel (Esc) ", Style::default().fg(Color::White).bg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), card);
}

fn draw_team(frame: &mut Frame, area: Rect, page: &TeamPage, team: &Team) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    draw_team_header(frame, chunks[0], page, team);
    draw_members(frame, chunks[1], page, team);
}

fn draw_team_header(frame: &mut Frame, area: Rect, page: &TeamPage, team: &Team) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut title = vec![Span::styled(
        team.name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if page.is_team_leader() {
        title.push(Span::styled(
            "    [i] Invite Members  [s] Settings",
            Style::default().fg(ACCENT),
        ));
    }

    let width = area.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(truncate(&team.description, width), Style::default().fg(Color::Gray))),
        Line::default(),
        Line::from(vec![
            Span::styled(format!(" {} ", team.occupancy()), Style::default().fg(Color::Black).bg(ACCENT)),
            Span::raw("  "),
            Span::styled(
                format!(" Code: {} ", team.invite_code),
                Style::default().fg(Color::Black).bg(ACCENT_GREEN),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_members(frame: &mut Frame, area: Rect, page: &TeamPage, team: &Team) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 👥 Team Members ")
        .border_style(Style::default().fg(ACCENT));

    let inner_height = area.height.saturating_sub(2) as usize;
    let selected = page.selected_index();
    let scroll_offset = if selected >= inner_height && inner_height > 0 {
        selected - inner_height + 1
    } else {
        0
    };
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = team
        .members
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height.max(1))
        .map(|(i, member)| {
            let is_selected = i == selected;
            let row_style = if is_selected {
                Style::default().bg(Color::Rgb(30, 35, 50)).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let role_style = match member.role {
                Role::Leader => Style::default().fg(Color::Yellow),
                Role::Member => Style::default().fg(Color::Gray),
            };
            let crown = if member.role == Role::Leader { "♛ " } else { "  " };
            let manage_hint = if is_selected && page.can_manage(&member.id) {
                "  r: make ".to_string() + &member.role.toggled().to_string() + "  d: remove"
            } else {
                String::new()
            };

            let name_width = width.saturating_sub(40).max(10);
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", member.initial()),
                    Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:<w$}", truncate(&member.name, name_width), w = name_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format!(" {:<24}", truncate(&member.email, 24)), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}{}", crown, member.role), role_style),
                Span::styled(manage_hint, Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line).style(row_style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
