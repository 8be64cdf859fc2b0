use crate::recognition::{RecognitionEngine, RecognitionEvent, ResultBatch};
use crate::responder::ResponseSimulator;
use crate::store::{ConversationStore, MessageRole};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Bridges one external recognition engine to the conversation model.
///
/// The controller subscribes to the engine's event stream exactly once and is
/// the sole writer of `is_listening` and `current_transcript`. Session states
/// are Idle and Listening; `start_listening`/`stop_listening` are requests
/// only, and the transition commits when the matching engine event arrives,
/// so transient double-invocations are safe.
///
/// When no engine was detected every operation is a no-op: nothing panics,
/// nothing mutates state, nothing returns a failure.
pub struct VoiceSessionController {
    session_id: String,
    store: Arc<ConversationStore>,
    engine: Mutex<Option<Box<dyn RecognitionEngine>>>,
    event_task: Mutex<Option<JoinHandle<()>>>,
    supported: bool,
}

impl VoiceSessionController {
    /// Wire a detected engine (or `None` when the capability is absent) to the
    /// store. Must be called from within a tokio runtime: the event loop task
    /// is spawned here.
    pub fn new(
        engine: Option<Box<dyn RecognitionEngine>>,
        store: Arc<ConversationStore>,
        simulator: ResponseSimulator,
    ) -> Self {
        let session_id = format!("voice-{}", uuid::Uuid::new_v4());

        let Some(mut engine) = engine else {
            info!("No recognition engine; voice input disabled");
            return Self {
                session_id,
                store,
                engine: Mutex::new(None),
                event_task: Mutex::new(None),
                supported: false,
            };
        };

        let Some(events) = engine.take_events() else {
            // A second subscriber would mean duplicate state mutation; treat
            // an already-claimed stream as no capability at all.
            warn!(
                "Engine '{}' event stream already claimed; voice input disabled",
                engine.name()
            );
            return Self {
                session_id,
                store,
                engine: Mutex::new(None),
                event_task: Mutex::new(None),
                supported: false,
            };
        };

        info!(
            "Voice session {} using '{}' engine",
            session_id,
            engine.name()
        );

        let task = tokio::spawn(Self::run_event_loop(
            events,
            Arc::clone(&store),
            simulator,
            session_id.clone(),
        ));

        Self {
            session_id,
            store,
            engine: Mutex::new(Some(engine)),
            event_task: Mutex::new(Some(task)),
            supported: true,
        }
    }

    /// Whether a recognition capability was detected
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Request that capture begin. No-op when unsupported or already
    /// listening; engine request failures are logged, never returned.
    pub async fn start_listening(&self) {
        if !self.supported {
            return;
        }
        if self.store.voice_state().is_listening {
            warn!("Already listening");
            return;
        }

        let mut engine = self.engine.lock().await;
        if let Some(engine) = engine.as_mut() {
            if let Err(e) = engine.start().await {
                error!("Failed to request recognition start: {:#}", e);
            }
        }
    }

    /// Request that capture end. No-op when unsupported or not listening.
    pub async fn stop_listening(&self) {
        if !self.supported {
            return;
        }
        if !self.store.voice_state().is_listening {
            return;
        }

        let mut engine = self.engine.lock().await;
        if let Some(engine) = engine.as_mut() {
            if let Err(e) = engine.stop().await {
                error!("Failed to request recognition stop: {:#}", e);
            }
        }
    }

    /// Composition-root teardown: drop the engine and stop the event loop.
    pub async fn shutdown(&self) {
        {
            let mut engine = self.engine.lock().await;
            *engine = None;
        }

        let mut handle = self.event_task.lock().await;
        if let Some(task) = handle.take() {
            // The host capability may still hold an event sender, so the loop
            // is aborted rather than drained.
            task.abort();
            let _ = task.await;
        }
    }

    async fn run_event_loop(
        mut events: mpsc::Receiver<RecognitionEvent>,
        store: Arc<ConversationStore>,
        simulator: ResponseSimulator,
        session_id: String,
    ) {
        info!("Recognition event loop started: {}", session_id);

        while let Some(event) = events.recv().await {
            match event {
                RecognitionEvent::Started => {
                    info!("Recognition started: {}", session_id);
                    store.set_listening(true);
                }

                RecognitionEvent::Result(batch) => {
                    Self::apply_results(&store, &simulator, &batch);
                }

                RecognitionEvent::Error(e) => {
                    // Terminal for this capture only; the caller may start a
                    // new session. Never surfaced as a failure return.
                    error!("Speech recognition error: {}", e);
                    store.set_listening(false);
                }

                RecognitionEvent::Ended => {
                    info!("Recognition ended: {}", session_id);
                    store.set_listening(false);
                    store.set_current_transcript("");
                }
            }
        }

        info!("Recognition event loop stopped: {}", session_id);
    }

    /// Fold one result batch into the store.
    ///
    /// Only the entries from the engine's resume index onward are new; their
    /// top transcripts are concatenated in report order into an interim and a
    /// final accumulation. The displayed transcript is batch-local: interim
    /// when non-empty, else final. A non-empty final accumulation becomes one
    /// trimmed `user` message and triggers the response simulator.
    fn apply_results(
        store: &ConversationStore,
        simulator: &ResponseSimulator,
        batch: &ResultBatch,
    ) {
        let mut interim = String::new();
        let mut finalized = String::new();

        for entry in batch.new_entries() {
            let Some(transcript) = entry.top_transcript() else {
                continue;
            };
            if entry.is_final {
                finalized.push_str(transcript);
            } else {
                interim.push_str(transcript);
            }
        }

        if interim.is_empty() {
            store.set_current_transcript(&finalized);
        } else {
            store.set_current_transcript(&interim);
        }

        if !finalized.is_empty() {
            let content = finalized.trim().to_string();
            store.add_message(MessageRole::User, &content);
            simulator.schedule_reply(content);
        }
    }
}
