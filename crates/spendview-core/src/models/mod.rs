pub mod line_item;
pub mod message;
pub mod search;

pub use line_item::{Alternative, AnalysisResult, Category, Confidence, LineItem, OriginalFields};
pub use message::{ChatMessage, ChatRole};
pub use search::SearchHit;
