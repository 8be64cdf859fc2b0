//! External recognition engine interface
//!
//! Recognition itself is an external capability; this module defines the
//! engine trait, its asynchronous event model, and two implementations:
//! - `BridgeEngine`: relays control requests to a host runtime and its events
//!   back to the session controller
//! - `ScriptedEngine`: replays a fixed event script (tests and demos)

mod bridge;
mod engine;
mod event;
mod scripted;

pub use bridge::{BridgeEngine, EngineCommand, EngineHandle};
pub use engine::{detect, DetectedEngine, EngineConfig, EngineKind, RecognitionEngine};
pub use event::{Alternative, EngineError, RecognitionEvent, ResultBatch, ResultEntry};
pub use scripted::{ScriptStep, ScriptedEngine};
