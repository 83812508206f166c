/// Default backend base URL, matching the dev backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub backend_url: String,
}

impl CoreConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
