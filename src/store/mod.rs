//! Reactive state containers
//!
//! This module provides the application's explicit, dependency-injected state:
//! - `ConversationStore`: voice session flags and ordered message history
//! - `AuthStore`: mock auth session, persisted under `auth-storage`
//! - `ThemeStore`: theme preference, persisted under `theme-storage`
//! - `KeyValueStorage`: named-key JSON persistence shared by the thin stores
//!
//! Conversation/voice state is session-scoped and never persisted.

mod auth;
mod conversation;
mod persist;
mod theme;

pub use auth::{AuthStore, User, AUTH_STORAGE_KEY};
pub use conversation::{ConversationStore, Message, MessageRole, VoiceState};
pub use persist::KeyValueStorage;
pub use theme::{ThemeStore, THEME_STORAGE_KEY};
