//! Chat modal for the active conversation thread.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use spendview_core::models::ChatRole;

use crate::ui::views::{truncate, wrap_text};
use crate::ui::{theme, App};

/// Centered modal rect, sized relative to the frame.
fn modal_area(frame_area: Rect) -> Rect {
    let width = (frame_area.width * 4 / 5).clamp(40, 100).min(frame_area.width);
    let height = (frame_area.height * 4 / 5).max(10).min(frame_area.height);
    Rect::new(
        frame_area.x + (frame_area.width - width) / 2,
        frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_chat_modal(f: &mut Frame, app: &mut App) {
    let Some((item, thread)) = app.session.active_thread() else {
        return;
    };

    let area = modal_area(f.area());
    f.render_widget(Clear, area);

    let title = format!(
        " {} · {} ",
        truncate(&item.original.supplier, 24),
        truncate(&item.original.material, 24)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(title)
        .style(Style::default().bg(theme::BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(0),    // history
        Constraint::Length(1), // input
        Constraint::Length(1), // hints
    ])
    .split(inner);

    let width = chunks[0].width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    if thread.messages.is_empty() {
        lines.push(Line::styled(
            "Challenge or refine this categorization. The AI sees the line",
            Style::default().fg(theme::TEXT_DIM),
        ));
        lines.push(Line::styled(
            "item and its original reasoning.",
            Style::default().fg(theme::TEXT_DIM),
        ));
    }
    for message in &thread.messages {
        let (label, label_style) = match message.role {
            ChatRole::User => (
                "you",
                Style::default()
                    .fg(theme::ACCENT_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            ChatRole::Assistant => (
                "ai",
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(label, label_style)));
        for wrapped in wrap_text(&message.content, width) {
            lines.push(Line::styled(
                wrapped,
                Style::default().fg(theme::TEXT_PRIMARY),
            ));
        }
    }
    if thread.pending {
        lines.push(Line::default());
        lines.push(Line::styled("ai is thinking…", theme::muted_style()));
    }

    // Stick to the bottom, minus whatever the user scrolled up.
    let visible = chunks[0].height as usize;
    let total = lines.len();
    let max_scroll = total.saturating_sub(visible);
    app.chat_scroll = app.chat_scroll.min(max_scroll);
    let start = max_scroll - app.chat_scroll;
    let window: Vec<Line> = lines.into_iter().skip(start).take(visible).collect();
    f.render_widget(Paragraph::new(window), chunks[0]);

    render_input_line(f, app, chunks[1]);

    f.render_widget(
        Paragraph::new("enter: send   esc: close   ↑/↓: scroll")
            .style(Style::default().fg(theme::TEXT_DIM)),
        chunks[2],
    );
}

fn render_input_line(f: &mut Frame, app: &App, area: Rect) {
    let pending = app
        .session
        .active_thread()
        .map(|(_, thread)| thread.pending)
        .unwrap_or(false);
    let prompt_style = if pending {
        theme::muted_style()
    } else {
        Style::default().fg(theme::ACCENT_SUCCESS)
    };
    let line = Line::from(vec![
        Span::styled("> ", prompt_style),
        Span::styled(
            app.chat_input.text.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);

    let cursor_x = area.x + 2 + app.chat_input.text[..app.chat_input.cursor].chars().count() as u16;
    f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(1)), area.y));
}
