use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::BRAND;
use crate::interactive::ui::{ACCENT, ACCENT_GREEN};
use crate::pages::landing::*;

pub fn draw(frame: &mut Frame, area: Rect, page: &LandingPage) {
    let paragraph = Paragraph::new(lines(page))
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false })
        .scroll((page.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Number of lines the landing content occupies before wrapping
pub fn content_height(page: &LandingPage) -> u16 {
    u16::try_from(lines(page).len()).unwrap_or(u16::MAX)
}

fn lines(page: &LandingPage) -> Vec<Line<'static>> {
    let title = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Gray);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line<'static>> = Vec::new();

    // Nav bar, collapsed behind `m` like the mobile menu
    let mut nav = vec![Span::styled(format!("{}  ", BRAND), accent)];
    if page.menu_open {
        for link in NAV_LINKS {
            nav.push(Span::styled(format!("{}  ", link), muted));
        }
        nav.push(Span::styled("[l] Login  ", Style::default().fg(Color::White)));
        nav.push(Span::styled("[s] Sign Up", Style::default().fg(ACCENT_GREEN)));
    } else {
        nav.push(Span::styled("☰ menu (m)", dim));
    }
    lines.push(Line::from(nav));
    lines.push(Line::default());

    // Hero
    lines.push(Line::from(vec![
        Span::styled("Welcome to ", title),
        Span::styled(BRAND, accent),
    ]).alignment(Alignment::Center));
    lines.push(Line::from(Span::styled(HERO_SUBTITLE, muted)).alignment(Alignment::Center));
    lines.push(Line::from(vec![
        Span::styled(" Create Hackathon → ", Style::default().fg(Color::Black).bg(ACCENT)),
        Span::raw("   "),
        Span::styled(" ▶ Join Hackathon ", Style::default().fg(Color::White).bg(Color::DarkGray)),
    ]).alignment(Alignment::Center));
    lines.push(Line::default());

    // Stats
    let stats: Vec<Span> = STATS
        .iter()
        .flat_map(|s| {
            vec![
                Span::styled(s.number, accent),
                Span::styled(format!(" {}    ", s.label), muted),
            ]
        })
        .collect();
    lines.push(Line::from(stats).alignment(Alignment::Center));
    lines.push(Line::default());

    // Features
    lines.push(Line::from(Span::styled(FEATURES_TITLE, title)).alignment(Alignment::Center));
    lines.push(Line::from(Span::styled(FEATURES_SUBTITLE, muted)).alignment(Alignment::Center));
    for feature in &FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", feature.icon), accent),
            Span::styled(feature.title, title),
        ]));
        lines.push(Line::from(Span::styled(format!("     {}", feature.description), muted)));
    }
    lines.push(Line::default());

    // Testimonials
    lines.push(Line::from(Span::styled(TESTIMONIALS_TITLE, title)).alignment(Alignment::Center));
    for t in &TESTIMONIALS {
        lines.push(Line::from(Span::styled(
            format!("  {}", "★".repeat(t.rating as usize)),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(Span::styled(format!("  \"{}\"", t.content), muted)));
        lines.push(Line::from(vec![
            Span::styled(format!("  — {}", t.name), Style::default().fg(Color::White)),
            Span::styled(format!(", {}", t.role), dim),
        ]));
    }
    lines.push(Line::default());

    // Call to action
    lines.push(Line::from(Span::styled(CTA_TITLE, title)).alignment(Alignment::Center));
    lines.push(Line::from(Span::styled(CTA_SUBTITLE, muted)).alignment(Alignment::Center));
    lines.push(Line::from(vec![
        Span::styled(" ✓ Get Started Free (g) ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("   "),
        Span::styled(" Learn More ", Style::default().fg(Color::White).bg(Color::DarkGray)),
    ]).alignment(Alignment::Center));
    lines.push(Line::default());

    // Footer
    lines.push(Line::from(Span::styled(BRAND, accent)));
    lines.push(Line::from(Span::styled(FOOTER_BLURB, dim)));
    for (heading, links) in FOOTER_COLUMNS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", heading), Style::default().fg(Color::White)),
            Span::styled(links.join(" · "), dim),
        ]));
    }
    lines.push(Line::from(Span::styled(COPYRIGHT, dim)).alignment(Alignment::Center));
    lines
}
