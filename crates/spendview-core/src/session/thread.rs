//! Per-item conversation state.

use crate::models::{ChatMessage, ChatRole};

/// Chat history attached to one line item.
///
/// Messages are strictly append-ordered and never reordered or merged.
/// `pending` is the single-flight guard: it is true from the moment a user
/// message is sent until its reply (or failure placeholder) arrives, and
/// while it is set further sends are no-ops.
#[derive(Debug, Clone, Default)]
pub struct ConversationThread {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
}

impl ConversationThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a send is currently allowed.
    pub fn can_send(&self) -> bool {
        !self.pending
    }

    /// Optimistically record the outgoing user message and raise the
    /// single-flight guard.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
        self.pending = true;
    }

    /// Record the assistant reply and clear the guard.
    pub fn push_reply(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
        self.pending = false;
    }

    /// Record a failure as an inline assistant message. The user message
    /// that triggered it stays in place.
    pub fn push_failure(&mut self, brief: &str) {
        self.messages.push(ChatMessage::assistant(format!(
            "(no reply: {brief}; your message was kept, try sending again)"
        )));
        self.pending = false;
    }

    pub fn last_role(&self) -> Option<ChatRole> {
        self.messages.last().map(|m| m.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_reply_cycle() {
        let mut thread = ConversationThread::new();
        assert!(thread.can_send());

        thread.push_user("why MRO?");
        assert!(!thread.can_send());
        assert_eq!(thread.last_role(), Some(ChatRole::User));

        thread.push_reply("Because the supplier is a fastener catalog.");
        assert!(thread.can_send());
        assert_eq!(thread.messages.len(), 2);
        assert_eq!(thread.last_role(), Some(ChatRole::Assistant));
    }

    #[test]
    fn failure_keeps_user_message() {
        let mut thread = ConversationThread::new();
        thread.push_user("challenge");
        thread.push_failure("backend returned status 500");

        assert_eq!(thread.messages.len(), 2);
        assert_eq!(thread.messages[0].content, "challenge");
        assert_eq!(thread.messages[1].role, ChatRole::Assistant);
        assert!(thread.messages[1].content.contains("status 500"));
        assert!(thread.can_send());
    }
}
