//! Professional (non-hacker) view: a plain résumé summary

use crate::portfolio::Portfolio;
use crate::ui::theme::PROFESSIONAL_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn section<'a>(title: &'a str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PROFESSIONAL_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));
    Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(PROFESSIONAL_THEME.bg))
        .wrap(Wrap { trim: true })
}

fn text(s: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        s.into(),
        Style::default().fg(PROFESSIONAL_THEME.fg),
    ))
}

fn strong(s: impl Into<String>) -> Span<'static> {
    Span::styled(
        s.into(),
        Style::default()
            .fg(PROFESSIONAL_THEME.bright)
            .add_modifier(Modifier::BOLD),
    )
}

fn muted(s: impl Into<String>) -> Span<'static> {
    Span::styled(s.into(), Style::default().fg(PROFESSIONAL_THEME.dim))
}

pub fn render_professional_view(frame: &mut Frame, area: Rect, portfolio: &Portfolio) {
    let profile = &portfolio.profile;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let right_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let mut hero = vec![
        Line::from(strong(profile.name)),
        Line::from(Span::styled(
            profile.title,
            Style::default().fg(PROFESSIONAL_THEME.accent),
        )),
    ];
    hero.extend(profile.summary.iter().map(|s| text(*s)));
    frame.render_widget(section("ABOUT", hero), rows[0]);

    let projects: Vec<Line> = portfolio
        .projects
        .iter()
        .flat_map(|p| {
            [
                Line::from(vec![strong(p.name), muted(format!("  {}", p.status))]),
                text(format!("  {}", p.description)),
            ]
        })
        .collect();
    frame.render_widget(section("PROJECTS", projects), columns[0]);

    let experience: Vec<Line> = portfolio
        .internships
        .iter()
        .flat_map(|i| {
            [
                Line::from(vec![strong(i.company), muted(format!("  {}", i.duration))]),
                text(format!("  {}", i.role)),
            ]
        })
        .collect();
    frame.render_widget(section("EXPERIENCE", experience), right_rows[0]);

    let skills: Vec<Line> = portfolio
        .skills
        .iter()
        .map(|c| Line::from(vec![muted(format!("{}: ", c.key)), strong(c.skills.join(", "))]))
        .collect();
    frame.render_widget(section("SKILLS", skills), right_rows[1]);
}
