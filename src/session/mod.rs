//! Recognition session management
//!
//! This module provides the `VoiceSessionController` abstraction that manages:
//! - The single external recognition engine handle
//! - Translation of engine events into conversation store mutations
//! - Interim vs final transcript handling per result batch
//! - Session lifecycle (start/stop requests, error recovery, teardown)

mod controller;

pub use controller::VoiceSessionController;
