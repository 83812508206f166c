//! Single-value drag transfer channel.

/// Which result cell a drag payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Supplier,
    Material,
}

/// The text being carried by the current drag gesture.
///
/// Exactly one may exist system-wide; it is owned by the session and lives
/// only between drag-start and drop/cancel. It has no persistence beyond
/// the gesture.
#[derive(Debug, Clone)]
pub struct DragPayload {
    pub text: String,
    pub source: DragSource,
}
