//! Keyboard and mouse routing. Handlers translate raw terminal events into
//! session intents (queued on the `App` and executed by the runtime) plus
//! purely visual state changes (selection, scroll, focus).

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use spendview_core::session::Intent;

use crate::ui::app::DragCandidate;
use crate::ui::{App, Focus};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    // The blocking notice swallows everything; any key acknowledges it.
    if app.notice_open() {
        app.queue(Intent::DismissNotice);
        return;
    }

    if app.upload_open {
        handle_upload_modal_key(app, key);
        return;
    }

    if app.chat_open() {
        handle_chat_key(app, key);
        return;
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::Results => handle_results_key(app, key),
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('u') => {
            app.upload_open = true;
            app.upload_input.clear();
        }
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::Enter | KeyCode::Char('d') => {
            if let Some(item_id) = app.selected_item_id() {
                app.chat_input.clear();
                app.chat_scroll = 0;
                app.queue(Intent::OpenThread { item_id });
            }
        }
        KeyCode::Char('s') => app.queue(Intent::TogglePanel),
        KeyCode::Tab => {
            if app.session.search().visible {
                app.focus = Focus::Search;
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc | KeyCode::Tab => app.focus = Focus::Results,
        KeyCode::Enter => app.queue(Intent::SubmitSearch),
        KeyCode::Backspace => {
            app.search_input.backspace();
            sync_query(app);
        }
        KeyCode::Delete => {
            app.search_input.delete();
            sync_query(app);
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_home(),
        KeyCode::End => app.search_input.move_end(),
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.kill_to_end();
            sync_query(app);
        }
        KeyCode::Char(c) => {
            app.search_input.insert_char(c);
            sync_query(app);
        }
        _ => {}
    }
}

/// The session owns the authoritative query; the editor mirrors it.
fn sync_query(app: &mut App) {
    app.queue(Intent::SetQuery {
        text: app.search_input.text.clone(),
    });
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc => {
            app.queue(Intent::CloseThread);
        }
        KeyCode::Enter => {
            let pending = app
                .session
                .active_thread()
                .is_some_and(|(_, thread)| thread.pending);
            // Keep the draft while a reply is outstanding; the send would
            // be refused anyway.
            if !pending && !app.chat_input.is_blank() {
                let text = app.chat_input.take();
                app.chat_scroll = 0;
                app.queue(Intent::SendMessage { text });
            }
        }
        KeyCode::Up => app.chat_scroll = app.chat_scroll.saturating_add(1),
        KeyCode::Down => app.chat_scroll = app.chat_scroll.saturating_sub(1),
        KeyCode::Backspace => app.chat_input.backspace(),
        KeyCode::Delete => app.chat_input.delete(),
        KeyCode::Left => app.chat_input.move_left(),
        KeyCode::Right => app.chat_input.move_right(),
        KeyCode::Home => app.chat_input.move_home(),
        KeyCode::End => app.chat_input.move_end(),
        KeyCode::Char(c) => app.chat_input.insert_char(c),
        _ => {}
    }
}

fn handle_upload_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.upload_open = false,
        KeyCode::Enter => {
            if !app.upload_input.is_blank() {
                let path = app.upload_input.take();
                app.upload_open = false;
                // The runtime reads the file and turns it into an Upload
                // intent once the bytes are in hand.
                app.pending_file = Some(path.trim().into());
            }
        }
        KeyCode::Backspace => app.upload_input.backspace(),
        KeyCode::Delete => app.upload_input.delete(),
        KeyCode::Left => app.upload_input.move_left(),
        KeyCode::Right => app.upload_input.move_right(),
        KeyCode::Home => app.upload_input.move_home(),
        KeyCode::End => app.upload_input.move_end(),
        KeyCode::Char(c) => app.upload_input.insert_char(c),
        _ => {}
    }
}

pub(crate) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.notice_open() || app.upload_open {
        return;
    }
    // The chat modal only takes the scroll wheel; the drag gesture exists
    // on the main surface alone.
    if app.chat_open() {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.chat_scroll = app.chat_scroll.saturating_add(1),
            MouseEventKind::ScrollDown => app.chat_scroll = app.chat_scroll.saturating_sub(1),
            _ => {}
        }
        return;
    }

    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = app.zones.row_at(x, y) {
                app.select_row(index);
                app.focus = Focus::Results;
            }
            // Arm a potential drag; it only becomes one if the pointer
            // actually travels.
            app.drag_candidate = app.zones.cell_at(x, y).map(|cell| DragCandidate {
                item_id: cell.item_id,
                source: cell.source,
                started: false,
            });
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(candidate) = &mut app.drag_candidate {
                if !candidate.started {
                    candidate.started = true;
                    let (item_id, source) = (candidate.item_id, candidate.source);
                    if let Some(text) = app.cell_text(item_id, source) {
                        app.queue(Intent::BeginDrag { text, source });
                    }
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(candidate) = app.drag_candidate.take() else {
                return;
            };
            if !candidate.started {
                return; // plain click, selection already handled on press
            }
            if app.zones.in_drop_target(x, y) {
                let payload = app
                    .session
                    .drag()
                    .map(|drag| drag.text.clone())
                    .unwrap_or_default();
                app.search_input.set(payload.trim());
                app.queue(Intent::CompleteDrop { payload });
            } else {
                app.queue(Intent::CancelDrag);
            }
        }
        MouseEventKind::ScrollUp => {
            if app.zones.in_table(x, y) {
                app.select_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if app.zones.in_table(x, y) {
                app.select_down();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;
    use spendview_core::session::{BackendEvent, DragSource, Effect, UploadToken};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Drain queued intents into the session the way the runtime does.
    fn pump(app: &mut App) -> Vec<Effect> {
        let intents: Vec<_> = app.pending_intents.drain(..).collect();
        intents
            .into_iter()
            .filter_map(|intent| app.session.apply(intent))
            .collect()
    }

    fn app_with_one_row() -> App {
        let mut app = App::new();
        let effect = app.session.apply(Intent::Upload {
            file_name: "spend.xlsx".into(),
            bytes: vec![1],
        });
        let Some(Effect::Upload { token, .. }) = effect else {
            panic!()
        };
        let item = serde_item(0, "Acme", "Bolt");
        app.session.absorb(BackendEvent::UploadFinished {
            token,
            outcome: Ok(vec![item]),
        });
        app
    }

    fn serde_item(id: u64, supplier: &str, material: &str) -> spendview_core::models::LineItem {
        let json = format!(
            r#"{{"id":{id},"original":{{"Supplier":"{supplier}","Material":"{material}","Description":"d","Amount":1}},
                "analysis":{{"level1":"A","level2":"B","level3":"C","confidence":"High","reasoning":"r"}}}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn drag_from_cell_to_panel_runs_a_search() {
        let mut app = app_with_one_row();
        app.zones.cells.push(crate::ui::layout::CellZone {
            item_id: 0,
            source: DragSource::Supplier,
            area: Rect::new(0, 2, 10, 1),
        });
        app.zones.drop_target = Some(Rect::new(40, 0, 20, 20));

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 2, 2));
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 20, 2));
        let effects = pump(&mut app);
        assert!(effects.is_empty());
        assert!(app.session.search().visible, "panel forced visible");

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 45, 5));
        let effects = pump(&mut app);
        assert!(matches!(&effects[..], [Effect::Search { query, .. }] if query == "Acme"));
        assert_eq!(app.session.search().query, "Acme");
        assert_eq!(app.search_input.text, "Acme");
    }

    #[test]
    fn drag_released_outside_panel_cancels() {
        let mut app = app_with_one_row();
        app.zones.cells.push(crate::ui::layout::CellZone {
            item_id: 0,
            source: DragSource::Material,
            area: Rect::new(12, 2, 10, 1),
        });
        app.zones.drop_target = Some(Rect::new(40, 0, 20, 20));

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 13, 2));
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 4));
        pump(&mut app);
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 10));
        let effects = pump(&mut app);
        assert!(effects.is_empty(), "cancel issues no search");
        assert!(app.session.drag().is_none());
    }

    #[test]
    fn click_without_travel_is_selection_not_drag() {
        let mut app = app_with_one_row();
        app.zones.rows.push((0, Rect::new(0, 2, 60, 1)));
        app.zones.cells.push(crate::ui::layout::CellZone {
            item_id: 0,
            source: DragSource::Supplier,
            area: Rect::new(0, 2, 10, 1),
        });

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 2, 2));
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 2, 2));
        let effects = pump(&mut app);
        assert!(effects.is_empty());
        assert!(app.session.drag().is_none());
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn any_key_dismisses_blocking_notice() {
        let mut app = App::new();
        let Some(Effect::Upload { token, .. }) = app.session.apply(Intent::Upload {
            file_name: "x.xlsx".into(),
            bytes: vec![1],
        }) else {
            panic!()
        };
        app.session.absorb(BackendEvent::UploadFinished {
            token: UploadToken(token.0),
            outcome: Err(spendview_core::ApiError::Status(500)),
        });
        assert!(app.notice_open());

        handle_key(&mut app, key(KeyCode::Char('x')));
        pump(&mut app);
        assert!(!app.notice_open());
    }

    #[test]
    fn enter_opens_thread_for_selected_row() {
        let mut app = app_with_one_row();
        handle_key(&mut app, key(KeyCode::Enter));
        pump(&mut app);
        assert!(app.chat_open());

        // Esc closes it again.
        handle_key(&mut app, key(KeyCode::Esc));
        pump(&mut app);
        assert!(!app.chat_open());
    }

    #[test]
    fn enter_while_reply_pending_keeps_the_draft() {
        let mut app = app_with_one_row();
        handle_key(&mut app, key(KeyCode::Enter));
        pump(&mut app);

        for c in "why".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        let effects = pump(&mut app);
        assert!(matches!(&effects[..], [Effect::Chat { .. }]));

        for c in "more".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.pending_intents.is_empty(), "send refused while pending");
        assert_eq!(app.chat_input.text, "more", "draft kept");
    }

    #[test]
    fn typing_in_search_focus_syncs_the_session_query() {
        let mut app = App::new();
        app.session.apply(Intent::TogglePanel);
        app.focus = Focus::Search;
        for c in "Acme".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        pump(&mut app);
        assert_eq!(app.session.search().query, "Acme");
    }

    #[test]
    fn upload_modal_enter_requests_a_file_read() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Char('u')));
        assert!(app.upload_open);
        for c in "/tmp/spend.xlsx".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.upload_open);
        assert_eq!(
            app.pending_file.as_deref(),
            Some(std::path::Path::new("/tmp/spend.xlsx"))
        );
    }
}
