//! Matrix-rain transition rendering

use crate::ui::theme::{Theme, MATRIX_THEME, PROFESSIONAL_THEME};
use crate::ui::transition::{Direction, Transition};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

fn theme_for(direction: Direction) -> &'static Theme {
    match direction {
        Direction::Entering => &MATRIX_THEME,
        Direction::Exiting => &PROFESSIONAL_THEME,
    }
}

/// Paint the falling glyph columns straight into the buffer
fn paint_rain(buf: &mut Buffer, area: Rect, transition: &Transition, now: Instant, theme: &Theme) {
    let elapsed = transition.elapsed(now);
    let columns = transition.rain();
    if area.width == 0 || area.height == 0 {
        return;
    }

    for (i, column) in columns.iter().enumerate() {
        let x = area.x + (i as u32 * area.width as u32 / columns.len() as u32) as u16;
        let Some(head) = column.head(elapsed, area.height) else {
            continue;
        };
        for (j, glyph) in column.glyphs.iter().enumerate() {
            // The trail extends upward from the head
            let Some(row) = head.checked_sub(j) else {
                break;
            };
            if row >= area.height as usize {
                continue;
            }
            let style = if j == 0 {
                Style::default().fg(theme.bright).add_modifier(Modifier::BOLD)
            } else if j < 8 {
                Style::default().fg(theme.fg)
            } else {
                Style::default().fg(theme.dim)
            };
            let y = area.y + row as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(*glyph).set_style(style);
            }
        }
    }
}

pub fn render_transition(frame: &mut Frame, area: Rect, transition: &Transition, now: Instant) {
    let theme = theme_for(transition.direction());

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);
    paint_rain(frame.buffer_mut(), area, transition, now, theme);

    let messages = transition.messages();
    let box_height = messages.len() as u16 + 2;
    let box_width = messages.iter().map(|m| m.len()).max().unwrap_or(0) as u16 + 6;

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(box_height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(box_width),
        Constraint::Fill(1),
    ])
    .areas(middle);

    let lines: Vec<Line> = transition
        .revealed(now)
        .iter()
        .map(|m| Line::styled(*m, Style::default().fg(theme.bright)))
        .collect();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused))
                .style(Style::default().bg(theme.bg)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(Clear, center);
    frame.render_widget(panel, center);
}
