//! Response simulation
//!
//! After each finalized user utterance the simulator schedules one delayed
//! `ai` message. The reply text comes from a `ReplyStrategy`, so the canned
//! behavior can later be swapped for a real inference collaborator without
//! touching the session controller.

mod canned;

pub use canned::{CannedReplies, CANNED_REPLIES};

use crate::store::{ConversationStore, MessageRole};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Produces the reply for a finalized utterance
#[async_trait::async_trait]
pub trait ReplyStrategy: Send + Sync {
    async fn reply_to(&self, utterance: &str) -> String;
}

/// Schedules a delayed reply for each finalized utterance.
///
/// Replies are fire-and-forget: each utterance gets an independent task, and
/// overlapping tasks complete in delay order. A pending reply is not cancelled
/// when listening ends, so it may land after the session is over.
#[derive(Clone)]
pub struct ResponseSimulator {
    store: Arc<ConversationStore>,
    strategy: Arc<dyn ReplyStrategy>,
    delay: Duration,
}

impl ResponseSimulator {
    pub fn new(
        store: Arc<ConversationStore>,
        strategy: Arc<dyn ReplyStrategy>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            strategy,
            delay,
        }
    }

    /// Schedule one `ai` message to be appended after the configured delay.
    /// The returned handle is informational; callers are free to drop it.
    pub fn schedule_reply(&self, utterance: String) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let strategy = Arc::clone(&self.strategy);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = strategy.reply_to(&utterance).await;
            debug!("Simulated reply ready: {}", reply);
            store.add_message(MessageRole::Ai, &reply);
        })
    }
}
