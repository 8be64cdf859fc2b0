use super::engine::{EngineConfig, RecognitionEngine};
use super::event::{RecognitionEvent, ResultBatch, ResultEntry};
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tracing::{info, warn};

const CHANNEL_CAPACITY: usize = 64;

/// One step of a replay script
#[derive(Debug, Clone)]
pub struct ScriptStep {
    /// Delay before the event is emitted
    pub delay: Duration,
    pub event: RecognitionEvent,
}

impl ScriptStep {
    pub fn new(delay: Duration, event: RecognitionEvent) -> Self {
        Self { delay, event }
    }
}

/// Replay engine for tests and demos.
///
/// On `start` it emits `Started`, plays the script in order with the
/// configured delays, then emits `Ended`. `stop` interrupts the script; the
/// `Ended` event is still emitted, as a real engine would on teardown.
pub struct ScriptedEngine {
    config: EngineConfig,
    script: Vec<ScriptStep>,
    event_tx: mpsc::Sender<RecognitionEvent>,
    events: Option<mpsc::Receiver<RecognitionEvent>>,
    running: Arc<AtomicBool>,
    stop_signal: Arc<Notify>,
}

impl ScriptedEngine {
    pub fn new(config: EngineConfig, script: Vec<ScriptStep>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);

        Self {
            config,
            script,
            event_tx,
            events: Some(event_rx),
            running: Arc::new(AtomicBool::new(false)),
            stop_signal: Arc::new(Notify::new()),
        }
    }

    /// A scripted engine with a built-in two-utterance demo conversation
    pub fn demo(config: EngineConfig) -> Self {
        let step = Duration::from_millis(200);
        let script = vec![
            ScriptStep::new(
                step,
                RecognitionEvent::Result(ResultBatch::new(0, vec![ResultEntry::interim("hel")])),
            ),
            ScriptStep::new(
                step,
                RecognitionEvent::Result(ResultBatch::new(
                    0,
                    vec![ResultEntry::interim("hello th")],
                )),
            ),
            ScriptStep::new(
                step,
                RecognitionEvent::Result(ResultBatch::new(
                    0,
                    vec![ResultEntry::finalized("hello there")],
                )),
            ),
            ScriptStep::new(
                step,
                RecognitionEvent::Result(ResultBatch::new(
                    1,
                    vec![
                        ResultEntry::finalized("hello there"),
                        ResultEntry::interim("what can you"),
                    ],
                )),
            ),
            ScriptStep::new(
                step,
                RecognitionEvent::Result(ResultBatch::new(
                    1,
                    vec![
                        ResultEntry::finalized("hello there"),
                        ResultEntry::finalized("what can you do "),
                    ],
                )),
            ),
        ];

        Self::new(config, script)
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for ScriptedEngine {
    fn take_events(&mut self) -> Option<mpsc::Receiver<RecognitionEvent>> {
        self.events.take()
    }

    async fn start(&mut self) -> Result<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Scripted engine already running");
            return Ok(());
        }

        info!(
            "Scripted engine starting: locale={} steps={}",
            self.config.locale,
            self.script.len()
        );

        let script = self.script.clone();
        let event_tx = self.event_tx.clone();
        let running = Arc::clone(&self.running);
        let stop_signal = Arc::clone(&self.stop_signal);

        tokio::spawn(async move {
            if event_tx.send(RecognitionEvent::Started).await.is_err() {
                running.store(false, Ordering::SeqCst);
                return;
            }

            for step in script {
                tokio::select! {
                    _ = tokio::time::sleep(step.delay) => {}
                    _ = stop_signal.notified() => {}
                }

                if !running.load(Ordering::SeqCst) {
                    break;
                }
                if event_tx.send(step.event).await.is_err() {
                    break;
                }
            }

            running.store(false, Ordering::SeqCst);
            let _ = event_tx.send(RecognitionEvent::Ended).await;
        });

        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);
        // notify_one stores a permit, so a stop that lands between script
        // steps still interrupts the next wait.
        self.stop_signal.notify_one();
        Ok(())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
