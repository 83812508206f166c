//! The web-search side panel: query input, drop target, result list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::views::{truncate, wrap_text};
use crate::ui::{theme, App, Focus};

pub fn render_search_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let dragging = app.session.drag().is_some();
    let focused = app.focus == Focus::Search;

    // The whole panel is the drop target; dropping anywhere on it counts.
    app.zones.drop_target = Some(area);

    let border_style = if dragging {
        Style::default().fg(theme::ACCENT_WARNING)
    } else if focused {
        Style::default().fg(theme::ACCENT_PRIMARY)
    } else {
        theme::muted_style()
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Web Search ");
    if dragging {
        block = block.style(Style::default().bg(theme::ACCENT_DROP));
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // query input
        Constraint::Length(1), // drop hint / separator
        Constraint::Min(0),    // results
    ])
    .split(inner);

    render_query_line(f, app, chunks[0], focused);

    let hint = if dragging {
        Span::styled(
            "▼ drop to search",
            Style::default()
                .fg(theme::ACCENT_WARNING)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("─".repeat(chunks[1].width as usize), theme::muted_style())
    };
    f.render_widget(Paragraph::new(Line::from(hint)), chunks[1]);

    render_results_list(f, app, chunks[2]);
}

fn render_query_line(f: &mut Frame, app: &App, area: Rect, focused: bool) {
    let line = Line::from(vec![
        Span::styled("? ", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(
            app.search_input.text.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
    if focused {
        let cursor_x = area.x + 2 + app.search_input.text[..app.search_input.cursor]
            .chars()
            .count() as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(1)), area.y));
    }
}

fn render_results_list(f: &mut Frame, app: &App, area: Rect) {
    let panel = app.session.search();
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    if panel.loading {
        lines.push(Line::styled("Searching…", theme::muted_style()));
    } else if panel.failed {
        lines.push(Line::styled(
            "Search failed. Press Enter to retry.",
            Style::default().fg(theme::ACCENT_ERROR),
        ));
    } else if panel.is_empty_result() {
        lines.push(Line::styled("No results.", theme::muted_style()));
    } else if panel.results.is_empty() {
        lines.push(Line::styled(
            "Type a query and press Enter, or drag a",
            Style::default().fg(theme::TEXT_DIM),
        ));
        lines.push(Line::styled(
            "supplier/material cell into this panel.",
            Style::default().fg(theme::TEXT_DIM),
        ));
    }

    for hit in &panel.results {
        lines.push(Line::styled(
            truncate(&hit.title, width),
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        for body_line in wrap_text(&hit.body, width).into_iter().take(2) {
            lines.push(Line::styled(
                body_line,
                Style::default().fg(theme::TEXT_PRIMARY),
            ));
        }
        // External link, display only; never fetched in-app.
        lines.push(Line::styled(
            truncate(&hit.href, width),
            Style::default().fg(theme::TEXT_DIM),
        ));
        lines.push(Line::default());
    }

    lines.truncate(area.height as usize);
    f.render_widget(Paragraph::new(lines), area);
}
