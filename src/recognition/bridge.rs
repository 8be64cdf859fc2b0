use super::engine::{EngineConfig, RecognitionEngine};
use super::event::RecognitionEvent;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 64;

/// Control requests forwarded to the host recognition capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Start,
    Stop,
}

/// Host side of a bridge engine.
///
/// The host runtime (the actual speech capability) receives control requests
/// from `next_command` and pushes recognition events back with `emit`. The
/// carried config tells the host which locale and capture flags to apply.
pub struct EngineHandle {
    pub config: EngineConfig,
    commands: mpsc::Receiver<EngineCommand>,
    events: mpsc::Sender<RecognitionEvent>,
}

impl EngineHandle {
    /// Push a recognition event toward the session controller
    pub async fn emit(&self, event: RecognitionEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .context("Recognition event channel closed")
    }

    /// Wait for the next control request; `None` once the engine is dropped
    pub async fn next_command(&mut self) -> Option<EngineCommand> {
        self.commands.recv().await
    }
}

/// Externally-driven recognition engine.
///
/// The crate never performs recognition itself: this engine only relays
/// start/stop requests out over a command channel and hands the host's event
/// stream to the session controller.
pub struct BridgeEngine {
    commands: mpsc::Sender<EngineCommand>,
    events: Option<mpsc::Receiver<RecognitionEvent>>,
}

impl BridgeEngine {
    /// Create an engine and the host-side handle that drives it
    pub fn new(config: EngineConfig) -> (Self, EngineHandle) {
        let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);

        let engine = Self {
            commands: command_tx,
            events: Some(event_rx),
        };

        let handle = EngineHandle {
            config,
            commands: command_rx,
            events: event_tx,
        };

        (engine, handle)
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for BridgeEngine {
    fn take_events(&mut self) -> Option<mpsc::Receiver<RecognitionEvent>> {
        self.events.take()
    }

    async fn start(&mut self) -> Result<()> {
        self.commands
            .send(EngineCommand::Start)
            .await
            .context("Recognition host disconnected")
    }

    async fn stop(&mut self) -> Result<()> {
        self.commands
            .send(EngineCommand::Stop)
            .await
            .context("Recognition host disconnected")
    }

    fn name(&self) -> &str {
        "bridge"
    }
}
