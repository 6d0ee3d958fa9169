use crate::domain::models::conversation::ChatMessage;
use crate::error::WizardError;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Polled view of one conversation. The conversation id and high-water
/// timestamp live here rather than in ambient module state; the in-flight
/// guard makes the poll-tick contract explicit: a tick that would overlap
/// a running one is skipped, never queued.
pub struct ConversationSession {
    conversation_id: String,
    messages: Mutex<Vec<ChatMessage>>,
    last_seen: Mutex<Option<DateTime<Utc>>>,
    peer_typing: AtomicBool,
    in_flight: AtomicBool,
    typing_in_flight: AtomicBool,
}

impl ConversationSession {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            messages: Mutex::new(Vec::new()),
            last_seen: Mutex::new(None),
            peer_typing: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
            typing_in_flight: AtomicBool::new(false),
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().expect("messages lock poisoned").clone()
    }

    pub fn is_peer_typing(&self) -> bool {
        self.peer_typing.load(Ordering::SeqCst)
    }

    /// Fetches messages newer than the high-water timestamp and appends
    /// them. Returns `Ok(false)` when the tick was skipped because another
    /// one is still running. Provider errors leave the list untouched.
    pub async fn poll_once(&self, state: &AppState) -> Result<bool, WizardError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }

        let after = *self.last_seen.lock().expect("last_seen lock poisoned");
        let result = state
            .conversations
            .fetch_messages(&self.conversation_id, after)
            .await;
        self.in_flight.store(false, Ordering::SeqCst);

        let new_messages = result.inspect_err(|e| {
            warn!(conversation_id = %self.conversation_id, "message poll failed: {}", e);
        })?;

        if !new_messages.is_empty() {
            let newest = new_messages.iter().map(|m| m.sent_at).max();
            let mut last_seen = self.last_seen.lock().expect("last_seen lock poisoned");
            if newest > *last_seen {
                *last_seen = newest;
            }
            drop(last_seen);
            self.messages
                .lock()
                .expect("messages lock poisoned")
                .extend(new_messages);
        }
        Ok(true)
    }

    /// Refreshes the peer-typing indicator, read back via
    /// [`ConversationSession::is_peer_typing`]. Guarded like
    /// [`ConversationSession::poll_once`]: returns `Ok(false)` when the
    /// tick was skipped because another one is still running.
    pub async fn poll_typing(&self, state: &AppState) -> Result<bool, WizardError> {
        if self.typing_in_flight.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }

        let result = state.conversations.fetch_typing(&self.conversation_id).await;
        self.typing_in_flight.store(false, Ordering::SeqCst);

        let typing = result.inspect_err(|e| {
            warn!(conversation_id = %self.conversation_id, "typing poll failed: {}", e);
        })?;
        self.peer_typing.store(typing, Ordering::SeqCst);
        Ok(true)
    }
}
