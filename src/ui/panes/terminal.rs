//! Terminal pane rendering: session log plus the live prompt line

use crate::render::{DisplayLine, LineKind};
use crate::shell::Session;
use crate::ui::theme::MATRIX_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Title bar text, mimicking a shell prompt
pub const TERMINAL_TITLE: &str = " ● ● ●  swayam@portfolio:~$ ";

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Command => Style::default().fg(MATRIX_THEME.bright),
        LineKind::Output => Style::default().fg(MATRIX_THEME.fg),
        LineKind::Error => Style::default().fg(MATRIX_THEME.error),
    }
}

fn log_item(line: &DisplayLine) -> ListItem<'_> {
    ListItem::new(line.text()).style(line_style(line.kind()))
}

/// First visible item for a bottom-anchored view. `scroll_from_bottom` is
/// clamped so the top of the log is the furthest one can scroll.
pub fn visible_window(total: usize, height: usize, scroll_from_bottom: &mut usize) -> usize {
    let max_scroll = total.saturating_sub(height);
    *scroll_from_bottom = (*scroll_from_bottom).min(max_scroll);
    total.saturating_sub(height + *scroll_from_bottom)
}

/// Render the terminal pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    cursor_visible: bool,
    scroll_from_bottom: &mut usize,
) {
    let block = Block::default()
        .title(TERMINAL_TITLE)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(MATRIX_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(MATRIX_THEME.bg))
        .padding(Padding::new(1, 0, 0, 0));

    let cursor = if cursor_visible { "▮" } else { " " };
    let prompt = ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} ", session.prompt()),
            Style::default().fg(MATRIX_THEME.accent),
        ),
        Span::styled(session.input(), Style::default().fg(MATRIX_THEME.fg)),
        Span::styled(cursor, Style::default().fg(MATRIX_THEME.fg)),
    ]));

    let all_items: Vec<ListItem> = session
        .log()
        .iter()
        .map(log_item)
        .chain(std::iter::once(prompt))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let first = visible_window(total_items, visible_height, scroll_from_bottom);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(first)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_anchors_bottom() {
        let mut scroll = 0;
        assert_eq!(visible_window(100, 10, &mut scroll), 90);
        scroll = 5;
        assert_eq!(visible_window(100, 10, &mut scroll), 85);
    }

    #[test]
    fn test_visible_window_clamps_scroll() {
        let mut scroll = usize::MAX;
        assert_eq!(visible_window(100, 10, &mut scroll), 0);
        assert_eq!(scroll, 90);

        let mut scroll = 3;
        assert_eq!(visible_window(4, 10, &mut scroll), 0);
        assert_eq!(scroll, 0);
    }
}
