use super::bridge::{BridgeEngine, EngineHandle};
use super::event::RecognitionEvent;
use super::scripted::ScriptedEngine;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;

/// Configuration handed to the external recognition capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Recognition locale (BCP 47 tag)
    pub locale: String,

    /// Keep capturing across utterances instead of stopping after the first
    pub continuous: bool,

    /// Report interim (not yet finalized) results
    pub interim_results: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

/// External recognition engine interface
///
/// Implementations never perform recognition themselves; they forward control
/// requests to an external capability and relay its events. `start` and `stop`
/// are requests only: the session state transition commits when the
/// corresponding `Started`/`Ended` event arrives.
#[async_trait::async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Take the engine's event stream. Yields `Some` exactly once; the session
    /// controller is the single subscriber.
    fn take_events(&mut self) -> Option<mpsc::Receiver<RecognitionEvent>>;

    /// Request that capture begin
    async fn start(&mut self) -> Result<()>;

    /// Request that capture end
    async fn stop(&mut self) -> Result<()>;

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Which engine implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Externally-driven engine bridged to a host recognition capability
    Bridge,
    /// Replay engine emitting a built-in demo script
    Scripted,
    /// No recognition capability on this runtime
    None,
}

/// A detected engine plus, for the bridge kind, the host-side handle
pub struct DetectedEngine {
    pub engine: Box<dyn RecognitionEngine>,
    /// Present only for `EngineKind::Bridge`; the host runtime drives the
    /// engine through it.
    pub bridge: Option<EngineHandle>,
}

/// Capability detection, run once at composition time.
///
/// Returns `None` when no recognition capability is available; the session
/// controller then degrades every operation to a no-op.
pub fn detect(kind: EngineKind, config: EngineConfig) -> Option<DetectedEngine> {
    match kind {
        EngineKind::Bridge => {
            let (engine, handle) = BridgeEngine::new(config);
            Some(DetectedEngine {
                engine: Box::new(engine),
                bridge: Some(handle),
            })
        }

        EngineKind::Scripted => Some(DetectedEngine {
            engine: Box::new(ScriptedEngine::demo(config)),
            bridge: None,
        }),

        EngineKind::None => {
            info!("Speech recognition is not available on this runtime");
            None
        }
    }
}
