//! Small modals: the upload path prompt and the blocking failure notice.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use spendview_core::session::Notice;

use crate::ui::{theme, App};

fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    Rect::new(
        frame_area.x + (frame_area.width - width) / 2,
        frame_area.y + (frame_area.height - height) / 2,
        width,
        height,
    )
}

/// Path prompt standing in for a file picker. The extension hint is
/// advisory; nothing is enforced client-side.
pub fn render_upload_modal(f: &mut Frame, app: &App) {
    let area = centered(f.area(), 60, 6);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_PRIMARY))
        .title(" Upload spreadsheet ")
        .style(Style::default().bg(theme::BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Path: ", theme::muted_style()),
            Span::styled(
                app.upload_input.text.clone(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ]),
        Line::styled(
            "Spreadsheet formats: .xlsx, .xls",
            Style::default().fg(theme::TEXT_DIM),
        ),
        Line::styled(
            "enter: upload   esc: cancel",
            Style::default().fg(theme::TEXT_DIM),
        ),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    let cursor_x =
        inner.x + 6 + app.upload_input.text[..app.upload_input.cursor].chars().count() as u16;
    f.set_cursor_position((cursor_x.min(inner.x + inner.width.saturating_sub(1)), inner.y));
}

/// Blocking notice; any key dismisses it.
pub fn render_notice(f: &mut Frame, notice: &Notice) {
    let Notice::UploadFailed(detail) = notice;
    let area = centered(f.area(), 56, 5);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT_ERROR))
        .title(" Upload failed ")
        .style(Style::default().bg(theme::BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::styled(
            format!("Failed to process file: {detail}."),
            Style::default()
                .fg(theme::ACCENT_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Previous results are untouched. Press any key.",
            theme::muted_style(),
        ),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
