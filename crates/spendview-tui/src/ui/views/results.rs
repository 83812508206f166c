//! Results table plus the detail pane for the selected line item.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use spendview_core::session::DragSource;

use crate::ui::layout::{CellZone, DETAIL_HEIGHT};
use crate::ui::views::truncate;
use crate::ui::{theme, App, Focus};

const SUPPLIER_WIDTH: u16 = 18;
const MATERIAL_WIDTH: u16 = 22;
const CONFIDENCE_WIDTH: u16 = 8;
const AMOUNT_WIDTH: u16 = 12;

pub fn render_results(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks =
        Layout::vertical([Constraint::Min(0), Constraint::Length(DETAIL_HEIGHT)]).split(area);
    let (table_area, detail_area) = (chunks[0], chunks[1]);

    if app.session.results().is_empty() {
        render_empty_state(f, app, table_area);
        app.zones.table = table_area;
        return;
    }

    render_table(f, app, table_area);
    render_detail(f, app, detail_area);
}

fn render_empty_state(f: &mut Frame, app: &App, area: Rect) {
    let message = if app.session.upload_loading() {
        "Processing…"
    } else {
        "No data processed. Upload a spreadsheet to begin analysis.  (u)"
    };
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y, area.width, 1);
    f.render_widget(
        Paragraph::new(message).style(theme::muted_style()).centered(),
        line_area,
    );
}

fn column_areas(row: Rect) -> [Rect; 5] {
    let chunks = Layout::horizontal([
        Constraint::Length(SUPPLIER_WIDTH),
        Constraint::Length(MATERIAL_WIDTH),
        Constraint::Min(10),
        Constraint::Length(CONFIDENCE_WIDTH),
        Constraint::Length(AMOUNT_WIDTH),
    ])
    .split(row);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

fn render_table(f: &mut Frame, app: &mut App, area: Rect) {
    if area.height < 2 {
        return;
    }
    let header_area = Rect::new(area.x, area.y, area.width, 1);
    let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    app.zones.table = body;

    let cols = column_areas(header_area);
    let header_style = Style::default()
        .fg(theme::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    for (text, col) in ["Supplier", "Material", "Primary Category", "Conf.", "Amount"]
        .into_iter()
        .zip(cols.iter())
    {
        f.render_widget(Paragraph::new(text).style(header_style), *col);
    }

    // Keep the selection on screen; the renderer owns the scroll window.
    let visible = body.height as usize;
    if app.selected_row < app.table_offset {
        app.table_offset = app.selected_row;
    } else if visible > 0 && app.selected_row >= app.table_offset + visible {
        app.table_offset = app.selected_row + 1 - visible;
    }

    let items = app.session.results();
    let mut cell_zones: Vec<CellZone> = Vec::new();
    let mut row_zones: Vec<(usize, Rect)> = Vec::new();

    for (line, (index, item)) in items
        .iter()
        .enumerate()
        .skip(app.table_offset)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect::new(body.x, body.y + line as u16, body.width, 1);
        row_zones.push((index, row_area));
        let selected = index == app.selected_row;
        if selected {
            f.render_widget(
                Paragraph::new("").style(Style::default().bg(theme::BG_SELECTED)),
                row_area,
            );
        }

        let cols = column_areas(row_area);
        cell_zones.push(CellZone {
            item_id: item.id,
            source: DragSource::Supplier,
            area: cols[0],
        });
        cell_zones.push(CellZone {
            item_id: item.id,
            source: DragSource::Material,
            area: cols[1],
        });

        let base = if selected {
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .bg(theme::BG_SELECTED)
        } else {
            Style::default().fg(theme::TEXT_PRIMARY)
        };

        let primary = item.analysis.primary();
        let confidence = item.analysis.confidence();
        let cells = [
            (truncate(&item.original.supplier, cols[0].width as usize), base),
            (truncate(&item.original.material, cols[1].width as usize), base),
            (
                truncate(
                    &format!("{} › {} › {}", primary.level1, primary.level2, primary.leaf()),
                    cols[2].width as usize,
                ),
                base,
            ),
            (
                confidence.as_str().to_string(),
                base.fg(theme::confidence_color(confidence)),
            ),
            (
                format!("${:.2}", item.original.amount),
                base.fg(theme::TEXT_MUTED),
            ),
        ];
        for ((text, style), col) in cells.into_iter().zip(cols.iter()) {
            f.render_widget(Paragraph::new(text).style(style), *col);
        }
    }

    app.zones.cells = cell_zones;
    app.zones.rows = row_zones;
}

/// Description, alternative and AI reasoning for the selected row.
fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(item) = app.session.results().get(app.selected_row) else {
        return;
    };

    let alternative = match item.analysis.alternative() {
        Some(alt) => format!("Maybe: {} ({})", alt.category.leaf(), alt.reason),
        None => "No plausible alternatives found.".to_string(),
    };

    let focused = app.focus == Focus::Results;
    let rule_style = if focused {
        Style::default().fg(theme::ACCENT_PRIMARY)
    } else {
        theme::muted_style()
    };

    let width = area.width as usize;
    let lines = vec![
        Line::styled("─".repeat(width), rule_style),
        Line::from(vec![
            Span::styled("Description: ", theme::muted_style()),
            Span::styled(
                truncate(&item.original.description, width.saturating_sub(13)),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ]),
        Line::from(vec![
            Span::styled("Alternative: ", theme::muted_style()),
            Span::styled(
                truncate(&alternative, width.saturating_sub(13)),
                Style::default().fg(theme::ACCENT_WARNING),
            ),
        ]),
        Line::from(vec![
            Span::styled("Reasoning:   ", theme::muted_style()),
            Span::styled(
                truncate(item.analysis.reasoning(), width.saturating_sub(13)),
                Style::default().fg(theme::TEXT_PRIMARY),
            ),
        ]),
        Line::from(Span::styled(
            "enter: discuss with AI   drag supplier/material into the search panel",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
