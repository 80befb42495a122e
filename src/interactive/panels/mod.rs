pub mod auth;
pub mod landing;
pub mod not_found;
pub mod team;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::pages::TextInput;

/// Render a text field on one line. The focused field shows a block cursor;
/// secret fields are masked; an empty unfocused field shows its placeholder.
pub fn input_line(input: &TextInput, focused: bool, secret: bool, placeholder: &str) -> Line<'static> {
    let text_style = Style::default().fg(Color::White);

    if input.value().is_empty() && !focused {
        return Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mask = |s: &str| -> String {
        if secret {
            "•".repeat(s.chars().count())
        } else {
            s.to_string()
        }
    };

    if !focused {
        return Line::from(Span::styled(mask(input.value()), text_style));
    }

    let (before, current, after) = input.split_at_cursor();
    let cursor_text = match current {
        Some(_) if secret => "•".to_string(),
        Some(c) => c.to_string(),
        None => " ".to_string(),
    };

    Line::from(vec![
        Span::styled(mask(before), text_style),
        Span::styled(
            cursor_text,
            Style::default()
                .fg(Color::Rgb(0, 0, 0))
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(mask(after), text_style),
    ])
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let mut out: String = s.chars().take(max_len - 1).collect();
        out.push('…');
        out
    }
}
