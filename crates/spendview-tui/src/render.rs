//! Top-level frame composition: header, results, search panel, modals,
//! status bar. Also the place where mouse hit zones are re-recorded, since
//! only the renderer has real layout data.

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::layout::{HEADER_HEIGHT, SEARCH_PANEL_WIDTH, STATUSBAR_HEIGHT};
use crate::ui::views::chat::render_chat_modal;
use crate::ui::views::modals::{render_notice, render_upload_modal};
use crate::ui::views::results::render_results;
use crate::ui::views::search::render_search_panel;
use crate::ui::{theme, App};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    app.zones.clear();

    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_APP)),
        f.area(),
    );

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    render_header(f, app, chunks[0]);

    if app.session.search().visible {
        let body = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(SEARCH_PANEL_WIDTH),
        ])
        .split(chunks[1]);
        render_results(f, app, body[0]);
        render_search_panel(f, app, body[1]);
    } else {
        render_results(f, app, chunks[1]);
    }

    render_statusbar(f, app, chunks[2]);

    // Modals stack above the main surface; the blocking notice wins.
    if app.chat_open() {
        render_chat_modal(f, app);
    }
    if app.upload_open {
        render_upload_modal(f, app);
    }
    if let Some(notice) = app.session.notice() {
        render_notice(f, notice);
    }
}

fn render_header(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled(" spendview", theme::title_style()),
        Span::styled("  spend categorization review", theme::muted_style()),
    ];
    if let Some(name) = app.session.file_name() {
        spans.push(Span::styled(
            format!("  [{name}]"),
            Style::default().fg(theme::TEXT_PRIMARY),
        ));
    }
    if app.session.upload_loading() {
        spans.push(Span::styled(
            "  Processing…",
            Style::default().fg(theme::ACCENT_WARNING),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_statusbar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let left = if let Some(status) = &app.status {
        status.clone()
    } else {
        let rows = app.session.results().len();
        match rows {
            0 => "u: upload   s: search panel   q: quit".to_string(),
            n => format!("{n} rows   u: upload   enter: discuss   s: search panel   q: quit"),
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {left}"),
            theme::muted_style(),
        ))),
        area,
    );
}
