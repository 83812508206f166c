//! The review-session controller.
//!
//! `ReviewSession` is the single source of truth for the reviewed document:
//! the ordered result set, the per-item conversation threads, the one-shot
//! drag payload, and the search panel. All mutation goes through
//! [`ReviewSession::apply`] (user intents) and [`ReviewSession::absorb`]
//! (resolved backend requests); rendering reads the fields through the
//! accessor methods and never mutates.
//!
//! Cross-component effects live here and only here: an upload replacing the
//! result set closes the active thread and clears search results; a drag
//! start forces the search panel visible; a drop seeds the query and
//! triggers a search.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::api::ChatRequest;
use crate::models::LineItem;

use super::drag::{DragPayload, DragSource};
use super::effect::{BackendEvent, ChatToken, Effect, SearchToken, UploadToken};
use super::intent::Intent;
use super::search::SearchPanel;
use super::thread::ConversationThread;

/// A blocking, user-visible failure notice. Only uploads raise one; chat
/// and search failures surface inline in their own regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    UploadFailed(String),
}

#[derive(Debug, Default)]
pub struct ReviewSession {
    /// Insertion order is display order; replaced atomically on upload.
    result_set: Vec<LineItem>,
    /// Retained chat histories, keyed by item id. Cleared only when the
    /// result set is replaced.
    threads: HashMap<u64, ConversationThread>,
    /// At most one thread is rendered at a time.
    active_thread: Option<u64>,
    drag: Option<DragPayload>,
    search: SearchPanel,
    /// Name of the last successfully uploaded file, for the status bar.
    file_name: Option<String>,

    upload_loading: bool,
    notice: Option<Notice>,

    // Liveness counters. `upload_generation` / `search_generation` stamp the
    // most recently issued request of their class; `result_generation` bumps
    // on every result-set replacement and scopes chat replies.
    upload_generation: u64,
    search_generation: u64,
    result_generation: u64,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------
    // Render accessors
    // -------------------------------------------------------------------

    pub fn results(&self) -> &[LineItem] {
        &self.result_set
    }

    pub fn item(&self, item_id: u64) -> Option<&LineItem> {
        self.result_set.iter().find(|item| item.id == item_id)
    }

    pub fn upload_loading(&self) -> bool {
        self.upload_loading
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The rendered thread, if one is open.
    pub fn active_thread(&self) -> Option<(&LineItem, &ConversationThread)> {
        let item_id = self.active_thread?;
        let item = self.item(item_id)?;
        let thread = self.threads.get(&item_id)?;
        Some((item, thread))
    }

    pub fn active_thread_id(&self) -> Option<u64> {
        self.active_thread
    }

    pub fn search(&self) -> &SearchPanel {
        &self.search
    }

    pub fn drag(&self) -> Option<&DragPayload> {
        self.drag.as_ref()
    }

    // -------------------------------------------------------------------
    // Intents
    // -------------------------------------------------------------------

    /// Apply one intent, returning the backend request it requires, if any.
    pub fn apply(&mut self, intent: Intent) -> Option<Effect> {
        match intent {
            Intent::Upload { file_name, bytes } => self.upload(file_name, bytes),
            Intent::OpenThread { item_id } => {
                self.open_thread(item_id);
                None
            }
            Intent::CloseThread => {
                self.active_thread = None;
                None
            }
            Intent::SendMessage { text } => self.send_message(&text),
            Intent::BeginDrag { text, source } => {
                self.begin_drag(text, source);
                None
            }
            Intent::CompleteDrop { payload } => self.complete_drop(&payload),
            Intent::CancelDrag => {
                self.drag = None;
                None
            }
            Intent::SetQuery { text } => {
                self.search.query = text;
                None
            }
            Intent::SubmitSearch => self.submit_search(),
            Intent::TogglePanel => {
                self.search.toggle();
                None
            }
            Intent::DismissNotice => {
                self.notice = None;
                None
            }
        }
    }

    fn upload(&mut self, file_name: String, bytes: Vec<u8>) -> Option<Effect> {
        if bytes.is_empty() {
            return None;
        }
        // Concurrent uploads are permitted; the generation stamp makes the
        // most recently issued one authoritative when they resolve out of
        // order.
        self.upload_generation += 1;
        self.upload_loading = true;
        info!(file = %file_name, generation = self.upload_generation, "upload issued");
        Some(Effect::Upload {
            file_name,
            bytes,
            token: UploadToken(self.upload_generation),
        })
    }

    fn open_thread(&mut self, item_id: u64) {
        if self.item(item_id).is_none() {
            warn!(item_id, "open_thread for unknown item ignored");
            return;
        }
        // Reuse the retained history so reopening loses nothing.
        self.threads.entry(item_id).or_default();
        self.active_thread = Some(item_id);
    }

    fn send_message(&mut self, text: &str) -> Option<Effect> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let item_id = self.active_thread?;
        let reasoning = self.item(item_id)?.analysis.reasoning().to_string();
        let original = self.item(item_id)?.original.clone();

        let thread = self.threads.get_mut(&item_id)?;
        if !thread.can_send() {
            // Single-flight: one outstanding request per thread.
            return None;
        }
        thread.push_user(trimmed);

        let request = ChatRequest::new(&original, &reasoning, thread.messages.clone());
        Some(Effect::Chat {
            request,
            token: ChatToken {
                result_generation: self.result_generation,
                item_id,
            },
        })
    }

    fn begin_drag(&mut self, text: String, source: DragSource) {
        // A drag is a strong signal of intent to search; the panel must be
        // visible before the user tries to drop.
        self.search.visible = true;
        self.drag = Some(DragPayload { text, source });
    }

    fn complete_drop(&mut self, payload: &str) -> Option<Effect> {
        self.drag = None;
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.search.query = trimmed.to_string();
        self.submit_search()
    }

    fn submit_search(&mut self) -> Option<Effect> {
        let query = self.search.query.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.search.begin_search();
        self.search_generation += 1;
        debug!(query = %query, generation = self.search_generation, "search issued");
        Some(Effect::Search {
            query,
            token: SearchToken(self.search_generation),
        })
    }

    // -------------------------------------------------------------------
    // Backend events
    // -------------------------------------------------------------------

    /// Absorb one resolved backend request. Stale events (superseded upload
    /// or search, chat reply for a replaced result set) are discarded.
    pub fn absorb(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::UploadFinished { token, outcome } => {
                if token.0 != self.upload_generation {
                    debug!(token = token.0, current = self.upload_generation, "stale upload discarded");
                    return;
                }
                self.upload_loading = false;
                match outcome {
                    Ok(items) => self.replace_results(items),
                    Err(err) => {
                        warn!(error = %err, "upload failed");
                        self.notice = Some(Notice::UploadFailed(err.brief()));
                    }
                }
            }
            BackendEvent::ChatReply { token, outcome } => {
                if token.result_generation != self.result_generation {
                    debug!(item_id = token.item_id, "chat reply for replaced result set discarded");
                    return;
                }
                // A closed thread still owns its history; the reply lands
                // there so reopening shows it.
                let Some(thread) = self.threads.get_mut(&token.item_id) else {
                    return;
                };
                match outcome {
                    Ok(reply) => thread.push_reply(reply),
                    Err(err) => thread.push_failure(&err.brief()),
                }
            }
            BackendEvent::SearchFinished { token, outcome } => {
                if token.0 != self.search_generation {
                    debug!(token = token.0, current = self.search_generation, "stale search discarded");
                    return;
                }
                match outcome {
                    Ok(results) => self.search.finish(results),
                    Err(err) => {
                        warn!(error = %err, "search failed");
                        self.search.fail();
                    }
                }
            }
        }
    }

    /// Wholesale replacement: a fresh result set invalidates every prior
    /// per-item context and any search results cross-referencing it.
    fn replace_results(&mut self, items: Vec<LineItem>) {
        info!(rows = items.len(), "result set replaced");
        self.result_set = items;
        self.result_generation += 1;
        self.threads.clear();
        self.active_thread = None;
        self.search.results.clear();
        self.search.failed = false;
    }

    /// Record the file name shown in the status bar. Kept separate from the
    /// upload intent so a failed upload leaves the previous name in place.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = Some(name.into());
    }
}
