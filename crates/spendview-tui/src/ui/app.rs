//! Application state for the TUI: the core `ReviewSession` plus everything
//! that only exists because a terminal is drawing it (focus, selection,
//! scroll offsets, editors, hit zones, transient status text).

use std::path::PathBuf;

use spendview_core::session::{DragSource, Intent, ReviewSession};

use crate::ui::layout::HitZones;
use crate::ui::text_input::TextInput;

/// Which region plain keys go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Results,
    Search,
}

/// A mouse press on a draggable cell that has not travelled yet. Becomes a
/// real drag on the first `Drag` event, or a plain click on release.
#[derive(Debug, Clone)]
pub struct DragCandidate {
    pub item_id: u64,
    pub source: DragSource,
    pub started: bool,
}

pub struct App {
    pub session: ReviewSession,
    pub running: bool,
    pub focus: Focus,

    /// Selected row index into `session.results()`.
    pub selected_row: usize,
    /// First visible row of the table.
    pub table_offset: usize,
    /// Lines scrolled up from the bottom of the chat history.
    pub chat_scroll: usize,

    pub search_input: TextInput,
    pub chat_input: TextInput,
    pub upload_input: TextInput,
    /// Upload path modal open?
    pub upload_open: bool,

    /// Transient one-line status message.
    pub status: Option<String>,

    pub zones: HitZones,
    pub drag_candidate: Option<DragCandidate>,

    /// Intents queued by input handlers, drained by the runtime which also
    /// executes whatever effects they produce.
    pub pending_intents: Vec<Intent>,
    /// A file the user asked to upload; the runtime reads it off the loop.
    pub pending_file: Option<PathBuf>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: ReviewSession::new(),
            running: true,
            focus: Focus::Results,
            selected_row: 0,
            table_offset: 0,
            chat_scroll: 0,
            search_input: TextInput::new(),
            chat_input: TextInput::new(),
            upload_input: TextInput::new(),
            upload_open: false,
            status: None,
            zones: HitZones::default(),
            drag_candidate: None,
            pending_intents: Vec::new(),
            pending_file: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn queue(&mut self, intent: Intent) {
        self.pending_intents.push(intent);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Item id of the currently selected row.
    pub fn selected_item_id(&self) -> Option<u64> {
        self.session.results().get(self.selected_row).map(|item| item.id)
    }

    pub fn select_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let count = self.session.results().len();
        if count > 0 && self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    pub fn select_row(&mut self, index: usize) {
        if index < self.session.results().len() {
            self.selected_row = index;
        }
    }

    /// Clamp selection after the result set changed size.
    pub fn clamp_selection(&mut self) {
        let count = self.session.results().len();
        if count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= count {
            self.selected_row = count - 1;
        }
    }

    /// Whether the chat modal is on screen.
    pub fn chat_open(&self) -> bool {
        self.session.active_thread().is_some()
    }

    /// A modal that swallows all input is up (blocking notice first).
    pub fn notice_open(&self) -> bool {
        self.session.notice().is_some()
    }

    /// The drag payload text for a cell, looked up from the session.
    pub fn cell_text(&self, item_id: u64, source: DragSource) -> Option<String> {
        let item = self.session.item(item_id)?;
        let text = match source {
            DragSource::Supplier => &item.original.supplier,
            DragSource::Material => &item.original.material,
        };
        Some(text.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
