pub mod config;
pub mod recognition;
pub mod responder;
pub mod session;
pub mod store;

pub use config::Config;
pub use recognition::{
    BridgeEngine, DetectedEngine, EngineCommand, EngineConfig, EngineError, EngineHandle,
    EngineKind, RecognitionEngine, RecognitionEvent, ResultBatch, ResultEntry, ScriptStep,
    ScriptedEngine,
};
pub use responder::{CannedReplies, ReplyStrategy, ResponseSimulator, CANNED_REPLIES};
pub use session::VoiceSessionController;
pub use store::{
    AuthStore, ConversationStore, KeyValueStorage, Message, MessageRole, ThemeStore, User,
    VoiceState,
};
