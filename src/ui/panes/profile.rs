//! Side panel shown next to the terminal: user card and session stats

use crate::portfolio::Portfolio;
use crate::ui::theme::MATRIX_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Per-frame data for the profile panel
pub struct ProfileRenderData<'a> {
    pub portfolio: &'a Portfolio,
    pub commands_run: usize,
    pub current_path: String,
    pub uptime: Duration,
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(MATRIX_THEME.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(MATRIX_THEME.dim)),
        Span::styled(value, Style::default().fg(MATRIX_THEME.fg)),
    ])
}

/// `hh:mm:ss`
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

pub fn render_profile_pane(frame: &mut Frame, area: Rect, data: &ProfileRenderData) {
    let block = Block::default()
        .title(" USER PROFILE ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MATRIX_THEME.border_normal))
        .style(Style::default().bg(MATRIX_THEME.bg))
        .padding(Padding::new(1, 1, 0, 0));

    let profile = &data.portfolio.profile;
    let skill_count: usize = data.portfolio.skills.iter().map(|c| c.skills.len()).sum();

    let lines = vec![
        Line::from(Span::styled(
            profile.name.to_uppercase(),
            Style::default()
                .fg(MATRIX_THEME.bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(profile.title, Style::default().fg(MATRIX_THEME.fg))),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(MATRIX_THEME.success)),
            Span::styled("ONLINE", Style::default().fg(MATRIX_THEME.accent)),
        ]),
        Line::from(""),
        heading("SESSION"),
        field("PATH", data.current_path.clone()),
        field("COMMANDS", data.commands_run.to_string()),
        field("UPTIME", format_uptime(data.uptime)),
        Line::from(""),
        heading("QUICK STATS"),
        field("PROJECTS", data.portfolio.projects.len().to_string()),
        field("SKILLS", skill_count.to_string()),
        field("ROLES", data.portfolio.internships.len().to_string()),
        Line::from(""),
        heading("STATUS"),
        Line::from(Span::styled(
            profile.current_status,
            Style::default().fg(MATRIX_THEME.fg),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "01:02:05");
    }
}
