use thiserror::Error;

/// Failure of a single backend request.
///
/// Every request class (upload, chat, search) maps onto this; the session
/// controller decides how each surfaces to the user. None of these escape
/// the intent that triggered them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short form for inline display (chat failure placeholders, status bar).
    pub fn brief(&self) -> String {
        match self {
            ApiError::Transport(_) => "could not reach the backend".to_string(),
            ApiError::Status(code) => format!("backend returned status {code}"),
            ApiError::Decode(_) => "backend sent a malformed response".to_string(),
        }
    }
}
