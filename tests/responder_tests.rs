// Unit tests for the response simulator
//
// These tests verify reply-set membership, the fixed delay, independent
// scheduling of overlapping replies, and the pluggable strategy seam.

use std::sync::Arc;
use std::time::{Duration, Instant};
use voice_session::store::{ConversationStore, MessageRole};
use voice_session::{CannedReplies, ReplyStrategy, ResponseSimulator, CANNED_REPLIES};

#[tokio::test]
async fn test_reply_comes_from_canned_set() {
    let store = Arc::new(ConversationStore::new());
    let simulator = ResponseSimulator::new(
        Arc::clone(&store),
        Arc::new(CannedReplies::new()),
        Duration::from_millis(10),
    );

    simulator
        .schedule_reply("hello".to_string())
        .await
        .unwrap();

    let messages = store.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::Ai);
    assert!(CANNED_REPLIES.contains(&messages[0].content.as_str()));
}

#[tokio::test]
async fn test_reply_waits_for_the_configured_delay() {
    let store = Arc::new(ConversationStore::new());
    let delay = Duration::from_millis(200);
    let simulator =
        ResponseSimulator::new(Arc::clone(&store), Arc::new(CannedReplies::new()), delay);

    let started = Instant::now();
    let task = simulator.schedule_reply("hello".to_string());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        store.message_count(),
        0,
        "No reply should land before the delay elapses"
    );

    task.await.unwrap();
    assert!(started.elapsed() >= delay);
    assert_eq!(store.message_count(), 1);
}

#[tokio::test]
async fn test_overlapping_replies_are_independent() {
    let store = Arc::new(ConversationStore::new());
    let simulator = ResponseSimulator::new(
        Arc::clone(&store),
        Arc::new(CannedReplies::new()),
        Duration::from_millis(30),
    );

    let first = simulator.schedule_reply("first utterance".to_string());
    let second = simulator.schedule_reply("second utterance".to_string());

    first.await.unwrap();
    second.await.unwrap();

    let ai_count = store
        .messages()
        .iter()
        .filter(|m| m.role == MessageRole::Ai)
        .count();
    assert_eq!(ai_count, 2, "Each utterance gets its own reply");
}

#[tokio::test]
async fn test_custom_reply_set() {
    let store = Arc::new(ConversationStore::new());
    let simulator = ResponseSimulator::new(
        Arc::clone(&store),
        Arc::new(CannedReplies::with_replies(vec!["only answer".to_string()])),
        Duration::from_millis(10),
    );

    simulator.schedule_reply("anything".to_string()).await.unwrap();

    assert_eq!(store.messages()[0].content, "only answer");
}

struct EchoStrategy;

#[async_trait::async_trait]
impl ReplyStrategy for EchoStrategy {
    async fn reply_to(&self, utterance: &str) -> String {
        format!("you said: {}", utterance)
    }
}

#[tokio::test]
async fn test_strategy_is_pluggable() {
    let store = Arc::new(ConversationStore::new());
    let simulator = ResponseSimulator::new(
        Arc::clone(&store),
        Arc::new(EchoStrategy),
        Duration::from_millis(10),
    );

    simulator.schedule_reply("hello".to_string()).await.unwrap();

    assert_eq!(store.messages()[0].content, "you said: hello");
}
