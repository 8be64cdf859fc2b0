use super::ReplyStrategy;
use rand::seq::SliceRandom;

/// The fixed reply set used when no real inference collaborator is wired in
pub const CANNED_REPLIES: [&str; 5] = [
    "I understand what you're saying. How can I help you further?",
    "That's interesting! Tell me more about that.",
    "I'm processing your request. What would you like to know?",
    "Thanks for sharing that with me. What's your next question?",
    "I'm here to help. What else can I assist you with?",
];

/// Uniform random pick from a closed set of canned strings
pub struct CannedReplies {
    replies: Vec<String>,
}

impl CannedReplies {
    pub fn new() -> Self {
        Self::with_replies(CANNED_REPLIES.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_replies(replies: Vec<String>) -> Self {
        Self { replies }
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ReplyStrategy for CannedReplies {
    async fn reply_to(&self, _utterance: &str) -> String {
        let mut rng = rand::thread_rng();
        self.replies
            .choose(&mut rng)
            .cloned()
            .unwrap_or_default()
    }
}
