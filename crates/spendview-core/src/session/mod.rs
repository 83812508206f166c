//! The interactive review session: a single mutable document (result set,
//! conversation threads, drag payload, search panel) owned by one
//! controller and driven entirely by typed intents.

pub mod controller;
pub mod drag;
pub mod effect;
pub mod intent;
pub mod search;
pub mod thread;

pub use controller::{Notice, ReviewSession};
pub use drag::{DragPayload, DragSource};
pub use effect::{BackendEvent, ChatToken, Effect, SearchToken, UploadToken};
pub use intent::Intent;
pub use search::SearchPanel;
pub use thread::ConversationThread;
