//! Effects the controller asks the runtime to perform, and the events the
//! runtime feeds back when they resolve.
//!
//! Each effect carries a liveness token; the controller stamps it when the
//! request is issued and checks it when the event comes back, so a reply
//! that resolves after its triggering context was superseded is discarded
//! instead of being applied to detached state.

use crate::api::ChatRequest;
use crate::error::ApiError;
use crate::models::{LineItem, SearchHit};

/// Identifies one issued upload. Only the most recently issued upload is
/// live; earlier in-flight uploads resolve stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadToken(pub u64);

/// Identifies one issued search, same scheme as uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(pub u64);

/// Identifies one outstanding chat request: the result-set generation it
/// was issued under plus the item whose thread it belongs to. A reply for a
/// replaced result set is stale; a reply for a merely closed thread is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatToken {
    pub result_generation: u64,
    pub item_id: u64,
}

/// A backend request the runtime must issue. At most one per intent.
#[derive(Debug, Clone)]
pub enum Effect {
    Upload {
        file_name: String,
        bytes: Vec<u8>,
        token: UploadToken,
    },
    Chat {
        request: ChatRequest,
        token: ChatToken,
    },
    Search {
        query: String,
        token: SearchToken,
    },
}

/// Resolution of an effect, delivered back to the controller in arrival
/// order over the runtime's channel.
#[derive(Debug)]
pub enum BackendEvent {
    UploadFinished {
        token: UploadToken,
        outcome: Result<Vec<LineItem>, ApiError>,
    },
    ChatReply {
        token: ChatToken,
        outcome: Result<String, ApiError>,
    },
    SearchFinished {
        token: SearchToken,
        outcome: Result<Vec<SearchHit>, ApiError>,
    },
}
