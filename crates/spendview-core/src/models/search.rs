use serde::{Deserialize, Serialize};

/// One web search result. `href` is the external destination; the app never
/// fetches it, only displays it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub href: String,
}
