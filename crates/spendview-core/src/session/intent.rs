//! Typed intents: everything the user (or a gesture on their behalf) can
//! ask the session to do. The controller is the only consumer.

use super::drag::DragSource;

#[derive(Debug, Clone)]
pub enum Intent {
    /// Replace the whole result set with a freshly categorized upload.
    Upload { file_name: String, bytes: Vec<u8> },
    /// Open (or reopen) the conversation thread for one item.
    OpenThread { item_id: u64 },
    /// Stop rendering the active thread; its history is retained.
    CloseThread,
    /// Send a message on the active thread.
    SendMessage { text: String },
    /// A drag gesture started on a result cell.
    BeginDrag { text: String, source: DragSource },
    /// The gesture ended over the search drop target.
    CompleteDrop { payload: String },
    /// The gesture ended anywhere else.
    CancelDrag,
    /// Edit the search query without side effects.
    SetQuery { text: String },
    /// Issue a search for the current query.
    SubmitSearch,
    /// Show or hide the search panel.
    TogglePanel,
    /// Acknowledge the blocking notice.
    DismissNotice,
}
