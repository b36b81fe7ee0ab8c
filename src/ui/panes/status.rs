//! Status bar rendering with keybindings and mode indicators

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Per-frame data for the status bar
pub struct StatusRenderData<'a> {
    pub theme: &'a Theme,
    /// Badge on the far left (`SYSTEM ACTIVE`, `PROFESSIONAL`, ...)
    pub mode: &'a str,
    pub message: &'a str,
    /// `(key, description)` pairs shown on the right
    pub keys: &'a [(&'a str, &'a str)],
    /// Optional right-most indicator (`EXITING`)
    pub indicator: Option<&'a str>,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let theme = data.theme;

    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" ● {} ", data.mode),
            Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().bg(theme.bar_bg).fg(theme.dim)),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(theme.bar_bg).fg(theme.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.bar_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(theme.dim).fg(Color::Black);
    let desc_style = Style::default().bg(theme.bar_bg).fg(theme.fg);
    let sep_style = Style::default().bg(theme.bar_bg).fg(theme.dim);

    let mut right_spans = Vec::with_capacity(data.keys.len() * 3 + 2);
    for (i, (key, desc)) in data.keys.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    if let Some(indicator) = data.indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .bg(theme.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
