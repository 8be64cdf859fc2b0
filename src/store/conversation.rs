use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Live flags for the active voice session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceState {
    /// Whether a recognition session is currently capturing
    pub is_listening: bool,

    /// Whether a downstream consumer is busy with the last utterance
    pub is_processing: bool,

    /// The transcript of the in-flight utterance (interim or just-finalized)
    pub current_transcript: String,
}

/// Who produced a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Ai,
}

/// One immutable entry in the conversation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique, time-derived identifier
    pub id: String,

    #[serde(rename = "type")]
    pub role: MessageRole,

    pub content: String,

    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

/// Conversation aggregate: voice session flags plus ordered message history.
///
/// All operations are synchronous and total. Mutations replace whole values
/// under the lock, so readers always observe a consistent snapshot. The
/// session controller is the sole writer of `is_listening` and
/// `current_transcript`; any caller may append or clear messages.
pub struct ConversationStore {
    voice: RwLock<VoiceState>,
    messages: RwLock<Vec<Message>>,
    show_full_transcript: AtomicBool,
    id_counter: AtomicU64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            voice: RwLock::new(VoiceState::default()),
            messages: RwLock::new(Vec::new()),
            show_full_transcript: AtomicBool::new(false),
            id_counter: AtomicU64::new(0),
        }
    }

    // The store must stay usable even if a writer panicked mid-operation, so
    // poisoned locks are absorbed rather than propagated.
    fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
        lock.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
        lock.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the current voice session flags
    pub fn voice_state(&self) -> VoiceState {
        Self::read(&self.voice).clone()
    }

    pub fn set_listening(&self, listening: bool) {
        Self::write(&self.voice).is_listening = listening;
    }

    pub fn set_processing(&self, processing: bool) {
        Self::write(&self.voice).is_processing = processing;
    }

    pub fn set_current_transcript(&self, transcript: &str) {
        Self::write(&self.voice).current_transcript = transcript.to_string();
    }

    /// Append a message, assigning its id and timestamp, and return a copy.
    pub fn add_message(&self, role: MessageRole, content: &str) -> Message {
        let now = Utc::now();
        // Time-derived id with a process-local counter so two messages in the
        // same millisecond still get distinct ids.
        let id = format!(
            "{}-{}",
            now.timestamp_millis(),
            self.id_counter.fetch_add(1, Ordering::SeqCst)
        );

        let message = Message {
            id,
            role,
            content: content.to_string(),
            timestamp: now,
        };

        Self::write(&self.messages).push(message.clone());
        message
    }

    /// Snapshot of the full conversation log, in append order
    pub fn messages(&self) -> Vec<Message> {
        Self::read(&self.messages).clone()
    }

    pub fn message_count(&self) -> usize {
        Self::read(&self.messages).len()
    }

    /// Remove every message. Voice session flags are untouched.
    pub fn clear_messages(&self) {
        Self::write(&self.messages).clear();
    }

    pub fn show_full_transcript(&self) -> bool {
        self.show_full_transcript.load(Ordering::SeqCst)
    }

    pub fn toggle_transcript_visibility(&self) {
        self.show_full_transcript.fetch_xor(true, Ordering::SeqCst);
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
