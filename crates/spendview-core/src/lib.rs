pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod tracing_setup;

pub use api::BackendClient;
pub use config::CoreConfig;
pub use error::ApiError;
pub use session::{BackendEvent, Effect, Intent, ReviewSession};
